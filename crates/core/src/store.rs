//! # Store Entry Model
//!
//! Key/value records held by the store service. The store keeps decoded
//! JSON server-side, so a value written as `42` comes back as a number and
//! never-touched timestamp fields come back as the empty string.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A key/value record with server-set timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreEntry {
    /// Immutable key, acts as the identifier
    pub key: String,

    /// Stored value, rendered as its string form whatever type the
    /// backend reports
    #[serde(deserialize_with = "lenient_string")]
    pub value: String,

    /// Creation timestamp, server-set
    pub created: String,

    /// Last write timestamp, server-set
    pub last_changed: String,

    /// Last read timestamp, server-set
    pub last_accessed: String,
}

/// Deserialize any JSON value into its string form
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
