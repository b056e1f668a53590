//! Backend API client.
//!
//! ARCHITECTURE
//! ============
//! Thin HTTP wrapper around the backend origin. It attaches the bearer
//! header when a credential is present and hands back the raw status and
//! body; all interpretation (401 vs other failures, body parsing) belongs
//! to the calling guard or loader. No retries, no caching, no internal
//! timeout: a slow backend blocks the request until the transport gives up.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::AUTHORIZATION;

/// Transport-level failure reaching the backend. Status-code failures are
/// not errors at this layer; they come back as a [`BackendResponse`].
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(String),
}

/// Raw backend response: status code and body text, uninterpreted.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Object-safe backend interface so routes can be exercised against a stub.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Issue a request against the backend origin, attaching
    /// `Authorization: Bearer <token>` only when `token` is non-empty.
    async fn call(
        &self,
        path: &str,
        method: Method,
        token: Option<&str>,
    ) -> Result<BackendResponse, BackendError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Real client over reqwest. One instance per process, shared via `AppState`.
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.to_owned(), http: reqwest::Client::new() }
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn call(
        &self,
        path: &str,
        method: Method,
        token: Option<&str>,
    ) -> Result<BackendResponse, BackendError> {
        let url = join_url(&self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(BackendResponse { status, body })
    }
}

// =============================================================================
// TEST STUB
// =============================================================================


#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
