//! Opaque identifiers
//!
//! User ids and content ids are opaque strings. Older clients send them as
//! JSON numbers, so the wire form accepts either and keeps the decimal text.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::shared::error::SharedError;

/// An identifier received over the wire, normalised to text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OpaqueId(String);

impl OpaqueId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OpaqueId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(text) => Ok(Self(text)),
            serde_json::Value::Number(number) => Ok(Self(number.to_string())),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(json_kind(&other)),
                &"a string or number identifier",
            )),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Number(_) => "number",
    }
}

/// Take a required identifier, treating missing and blank values alike
pub fn require_id(
    field: &str,
    value: Option<OpaqueId>,
    message: &str,
) -> Result<String, SharedError> {
    match value {
        Some(id) if !id.as_str().trim().is_empty() => Ok(id.into_string()),
        _ => Err(SharedError::validation(field, message)),
    }
}
