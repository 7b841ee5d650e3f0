//! Low-level HTTP client — `CoincapHttp`.
//!
//! One method per API endpoint. Returns wire types (merging into domain
//! records happens in the history sub-client). No retries: a failed request
//! is returned to the caller as-is.

use crate::domain::history::wire::RawSeriesBundle;
use crate::error::HttpError;
use crate::network::HISTORY_PATH;
use crate::shared::HistoryKey;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the CoinCap REST API.
#[derive(Clone)]
pub struct CoincapHttp {
    base_url: String,
    client: Client,
}

impl CoincapHttp {
    /// Build a client for `base_url`, optionally enforcing a request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder.build().map_err(HttpError::Client)?;
        Self::with_client(base_url, client)
    }

    /// Wrap an existing `reqwest::Client` (shares its connection pool).
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, HttpError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(HttpError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── History ──────────────────────────────────────────────────────────

    /// `{base}/history/{key}`. Dot segments are rejected so the URL parser
    /// cannot normalize the request out of the history path.
    pub fn history_url(&self, key: &HistoryKey) -> Result<String, HttpError> {
        if key.as_str().split('/').any(|segment| segment == "." || segment == "..") {
            return Err(HttpError::InvalidUrl(format!(
                "history key contains a dot segment: {}",
                key
            )));
        }
        Ok(format!("{}{}/{}", self.base_url, HISTORY_PATH, key.encoded_path()))
    }

    pub async fn get_history(&self, key: &HistoryKey) -> Result<RawSeriesBundle, HttpError> {
        let url = self.history_url(key)?;
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await.map_err(map_transport)?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await.map_err(map_transport)?;
            return serde_json::from_slice::<T>(&bytes).map_err(HttpError::InvalidBody);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status_code, "Request to {} failed", url);

        Err(status_error(status_code, body_text))
    }
}

fn map_transport(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

fn status_error(status: u16, body: String) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited,
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}
