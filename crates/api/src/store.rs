//! # Store Client
//!
//! Operations for the key/value store. Entries are never created from the
//! console, so this client only lists, updates, and deletes. Update sends
//! the whole entry; the server applies the value field and ignores the
//! rest (timestamps stay server-owned).

use console_core::{ConsoleResult, StoreEntry};

use crate::client::ApiClient;

/// Typed client for the store API
#[derive(Debug, Clone, PartialEq)]
pub struct StoreClient {
    api: ApiClient,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    /// Fetch the full entry list
    pub async fn list(&self) -> ConsoleResult<Vec<StoreEntry>> {
        self.api.get_json("/entries").await
    }

    /// PATCH the entry under its key
    pub async fn update(&self, entry: &StoreEntry) -> ConsoleResult<()> {
        self.api
            .patch_json(&format!("/entry/{}", entry.key), entry)
            .await
    }

    /// Delete by key
    pub async fn delete(&self, key: &str) -> ConsoleResult<()> {
        self.api.delete(&format!("/entry/{key}")).await
    }
}
