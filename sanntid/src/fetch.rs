//! HTTP fetching shared by the upstream clients.
//!
//! Requests are issued once, without retries. Response bodies are returned
//! whatever the status code; a non-success status is only logged.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SanntidError;

/// Configuration shared by the upstream clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API
    pub base_url: String,
    /// Request timeout. `None` keeps the transport default (no timeout).
    pub timeout: Option<Duration>,
    /// Client identification sent to upstreams that ask for it
    pub client_name: String,
}

/// Client name sent in identification headers.
pub const DEFAULT_CLIENT_NAME: &str = concat!("sanntid-", env!("CARGO_PKG_VERSION"));

impl ClientConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            client_name: DEFAULT_CLIENT_NAME.to_string(),
        }
    }

    /// Set a custom base URL (for testing or mirrors).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the client identification.
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Build a `reqwest` client from this config.
    pub fn build_http(&self, headers: HeaderMap) -> Result<reqwest::Client, SanntidError> {
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| SanntidError::Client(e.to_string()))
    }
}

/// Issue a GET and return the raw body.
pub async fn fetch(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, SanntidError> {
    debug!(url, "GET");
    let response = http.get(url).send().await?;
    note_status(url, response.status());
    Ok(response.bytes().await?.to_vec())
}

/// Issue a POST with a JSON body and return the raw response body.
pub async fn post_json<B: Serialize + ?Sized>(
    http: &reqwest::Client,
    url: &str,
    body: &B,
) -> Result<Vec<u8>, SanntidError> {
    debug!(url, "POST");
    let response = http.post(url).json(body).send().await?;
    note_status(url, response.status());
    Ok(response.bytes().await?.to_vec())
}

// The body is still decoded; an error page usually decodes to nothing.
fn note_status(url: &str, status: StatusCode) {
    if !status.is_success() {
        warn!(url, status = status.as_u16(), "upstream returned non-success status");
    }
}
