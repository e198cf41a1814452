//! # Endpoint Client
//!
//! CRUD operations for the endpoint family. Listing decodes each record's
//! JSON-encoded DisplayCategories/Capabilities strings; writes wrap the
//! endpoint in the `{event:{endpoint:...}}` envelope the backend expects
//! and send the decoded structures (the backend re-encodes on persist).
//! Delete sends the identifier wrapped in a one-element array.

use console_core::{ConsoleResult, Endpoint, EndpointRecord};
use serde::Serialize;

use crate::client::ApiClient;

/// Typed client for the endpoint API
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointClient {
    api: ApiClient,
}

/// Write envelope: `{event:{endpoint:<Endpoint>}}`
#[derive(Debug, Serialize)]
struct EndpointEnvelope<'a> {
    event: EndpointEvent<'a>,
}

#[derive(Debug, Serialize)]
struct EndpointEvent<'a> {
    endpoint: &'a Endpoint,
}

impl<'a> EndpointEnvelope<'a> {
    fn new(endpoint: &'a Endpoint) -> Self {
        Self {
            event: EndpointEvent { endpoint },
        }
    }
}

impl EndpointClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    /// Fetch the full collection, decoding every record
    pub async fn list(&self) -> ConsoleResult<Vec<Endpoint>> {
        let records: Vec<EndpointRecord> = self.api.get_json("/endpoints").await?;
        records.into_iter().map(Endpoint::try_from).collect()
    }

    /// POST a new endpoint
    pub async fn create(&self, endpoint: &Endpoint) -> ConsoleResult<()> {
        self.api
            .post_json("/endpoints", &EndpointEnvelope::new(endpoint))
            .await
    }

    /// PUT a full replacement
    pub async fn update(&self, endpoint: &Endpoint) -> ConsoleResult<()> {
        self.api
            .put_json("/endpoints", &EndpointEnvelope::new(endpoint))
            .await
    }

    /// Delete by identifier
    pub async fn delete(&self, endpoint_id: &str) -> ConsoleResult<()> {
        self.api.delete_json("/endpoints", &[endpoint_id]).await
    }
}

// ============================================================================
// Tests
// ============================================================================
