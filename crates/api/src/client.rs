//! # API Transport
//!
//! Thin async wrapper over reqwest, bound to one base URL per instance.
//! Typed family clients layer their wire formats on top of this; here we
//! only build URLs, send JSON, and map failures into `ConsoleError`.
//!
//! Mutation responses are status-checked but their bodies are discarded
//! (the store's delete path answers with plain text, not JSON). No request
//! timeouts are configured; a hung request simply never resolves.

use console_core::{ConsoleError, ConsoleResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Longest response-body slice carried inside an API error
const ERROR_SNIPPET_LEN: usize = 200;

/// Thin HTTP transport bound to one resource family's base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Create a client for one base URL; a trailing slash is stripped so
    /// paths always join cleanly
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET and decode a JSON payload
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ConsoleResult<T> {
        let url = self.url(path);
        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = check_status(response, "GET", &url).await?;
        let body = response.text().await.map_err(transport)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body, discarding the response body
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> ConsoleResult<()> {
        let url = self.url(path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check_status(response, "POST", &url).await?;
        Ok(())
    }

    /// PUT a JSON body, discarding the response body
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> ConsoleResult<()> {
        let url = self.url(path);
        let response = self
            .http
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check_status(response, "PUT", &url).await?;
        Ok(())
    }

    /// PATCH a JSON body, discarding the response body
    pub async fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> ConsoleResult<()> {
        let url = self.url(path);
        let response = self
            .http
            .patch(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check_status(response, "PATCH", &url).await?;
        Ok(())
    }

    /// DELETE without a body
    pub async fn delete(&self, path: &str) -> ConsoleResult<()> {
        let url = self.url(path);
        let response = self.http.delete(&url).send().await.map_err(transport)?;
        check_status(response, "DELETE", &url).await?;
        Ok(())
    }

    /// DELETE with a JSON body
    pub async fn delete_json<B: Serialize>(&self, path: &str, body: &B) -> ConsoleResult<()> {
        let url = self.url(path);
        let response = self
            .http
            .delete(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check_status(response, "DELETE", &url).await?;
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> ConsoleError {
    ConsoleError::transport(err.to_string())
}

/// Map non-success statuses to `ConsoleError::Api` with a body snippet
async fn check_status(
    response: reqwest::Response,
    method: &str,
    url: &str,
) -> ConsoleResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        tracing::debug!(%status, method, url, "request completed");
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let snippet: String = body.chars().take(ERROR_SNIPPET_LEN).collect();
    tracing::debug!(%status, method, url, "request failed");
    Err(ConsoleError::api(status.as_u16(), snippet))
}

// ============================================================================
// Tests
// ============================================================================
