//! # Endpoint Model
//!
//! Device/sensor descriptors managed through the endpoint API.
//!
//! The backend stores display categories and capabilities as JSON-encoded
//! strings and returns them that way from `GET /endpoints`, so listing goes
//! through [`EndpointRecord`] and decodes both fields before anything is
//! displayed or edited. Writes send the decoded structures back in camelCase;
//! the backend re-encodes them itself when persisting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConsoleError, ConsoleResult};

// ============================================================================
// Endpoint
// ============================================================================

/// A device or sensor descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoint {
    /// Unique identifier, immutable after creation. Left out of write
    /// bodies when empty: the backend generates an id only when the key
    /// is absent, never for an empty string.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub endpoint_id: String,

    /// Identifier of the owning user
    pub user_id: String,

    /// Display name shown in listings
    pub friendly_name: String,

    /// Device manufacturer
    pub manufacturer_name: String,

    /// Free-text description
    pub description: String,

    /// Ordered display-category tags (e.g. "CONTACT_SENSOR")
    pub display_categories: Vec<String>,

    /// Capability descriptors, kept as opaque JSON objects
    pub capabilities: Vec<Value>,
}

// ============================================================================
// Wire Format
// ============================================================================

/// An endpoint record as returned by `GET /endpoints`
///
/// `DisplayCategories` and `Capabilities` arrive as JSON-encoded strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct EndpointRecord {
    pub endpoint_id: String,
    pub user_id: String,
    pub friendly_name: String,
    pub manufacturer_name: String,
    pub description: String,

    /// JSON-encoded array of category tags
    pub display_categories: String,

    /// JSON-encoded array of capability objects
    pub capabilities: String,
}

impl TryFrom<EndpointRecord> for Endpoint {
    type Error = ConsoleError;

    fn try_from(record: EndpointRecord) -> ConsoleResult<Self> {
        let display_categories = decode_encoded("DisplayCategories", &record.display_categories)?;
        let capabilities = decode_encoded("Capabilities", &record.capabilities)?;

        Ok(Endpoint {
            endpoint_id: record.endpoint_id,
            user_id: record.user_id,
            friendly_name: record.friendly_name,
            manufacturer_name: record.manufacturer_name,
            description: record.description,
            display_categories,
            capabilities,
        })
    }
}

/// Decode a JSON-encoded string field into its structured value
fn decode_encoded<T: serde::de::DeserializeOwned>(
    field: &'static str,
    raw: &str,
) -> ConsoleResult<T> {
    serde_json::from_str(raw).map_err(|e| ConsoleError::field_decode(field, e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
