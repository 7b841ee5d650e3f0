//! High-level client — `CoincapClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::history::client::HistoryClient;
use crate::error::SdkError;
use crate::http::CoincapHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::history::client::HistoryClient as HistorySubClient;

/// The primary entry point of the crate.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CoincapClient {
    pub(crate) http: CoincapHttp,
}

impl CoincapClient {
    pub fn builder() -> CoincapClientBuilder {
        CoincapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn history(&self) -> HistoryClient<'_> {
        HistoryClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoincapClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl Default for CoincapClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
            http_client: None,
        }
    }
}

impl CoincapClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Unset by default. Ignored on WASM and when a
    /// custom `http_client` is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<CoincapClient, SdkError> {
        let http = match self.http_client {
            Some(client) => CoincapHttp::with_client(&self.base_url, client)?,
            None => CoincapHttp::new(&self.base_url, self.timeout)?,
        };
        Ok(CoincapClient { http })
    }
}
