//! PostgreSQL contact store
//!
//! One row per owner; the contact set is a `TEXT[]` column. The table carries
//! a CHECK on its cardinality so the cap holds even for writes that bypass
//! this service.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::store::ContactStore;
use crate::backend::error::StoreError;
use crate::shared::ContactRecord;

/// Contact store backed by the `contacts` table
#[derive(Clone, Debug)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn load(&self, owner: &str) -> Result<Option<ContactRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT owner, contacts
            FROM contacts
            WHERE owner = $1
            "#,
        )
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| ContactRecord {
            owner: row.get("owner"),
            contacts: row.get("contacts"),
        }))
    }

    async fn insert_if_absent(&self, record: &ContactRecord) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO contacts (owner, contacts, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            ON CONFLICT (owner) DO NOTHING
            "#,
        )
        .bind(&record.owner)
        .bind(record.contacts.clone())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn compare_and_swap(
        &self,
        owner: &str,
        expected: &[String],
        contacts: &[String],
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET contacts = $3, updated_at = NOW()
            WHERE owner = $1 AND contacts = $2
            "#,
        )
        .bind(owner)
        .bind(expected.to_vec())
        .bind(contacts.to_vec())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
