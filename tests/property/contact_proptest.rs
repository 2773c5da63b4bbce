//! Property-based tests for contact records
//!
//! Random add/remove sequences must never break the record invariants.

use std::collections::HashSet;

use biszbo::shared::{AddOutcome, ContactRecord, CONTACT_LIMIT};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(String),
}

fn user_id() -> impl Strategy<Value = String> {
    (0u8..80).prop_map(|n| format!("u{}", n))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => user_id().prop_map(Op::Add),
        1 => user_id().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn test_record_invariants_hold(ops in prop::collection::vec(op(), 0..300)) {
        let mut record = ContactRecord::empty("u0");

        for op in ops {
            match op {
                Op::Add(id) => {
                    let before = record.len();
                    match record.add(&id) {
                        Ok(AddOutcome::Added) => prop_assert_eq!(record.len(), before + 1),
                        Ok(_) => prop_assert_eq!(record.len(), before),
                        Err(_) => {
                            prop_assert_eq!(before, CONTACT_LIMIT);
                            prop_assert!(!record.contains(&id));
                        }
                    }
                }
                Op::Remove(id) => {
                    record.remove(&id);
                    prop_assert!(!record.contains(&id));
                }
            }

            prop_assert!(record.len() <= CONTACT_LIMIT);
            prop_assert!(!record.contains("u0"));
            let unique: HashSet<&String> = record.contacts.iter().collect();
            prop_assert_eq!(unique.len(), record.len());
        }
    }

    #[test]
    fn test_add_is_idempotent(id in user_id()) {
        prop_assume!(id != "u0");
        let mut record = ContactRecord::empty("u0");
        prop_assert_eq!(record.add(&id).unwrap(), AddOutcome::Added);
        prop_assert_eq!(record.add(&id).unwrap(), AddOutcome::AlreadyPresent);
        prop_assert_eq!(record.contacts.clone(), vec![id]);
    }
}
