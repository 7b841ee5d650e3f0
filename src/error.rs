//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Series error: {0}")]
    Series(#[from] SeriesError),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// Raised when the three series of a bundle cannot be merged index by index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error(
        "misaligned series: lengths differ (market_cap={market_cap}, price={price}, volume={volume})"
    )]
    LengthMismatch {
        market_cap: usize,
        price: usize,
        volume: usize,
    },

    #[error(
        "misaligned series: timestamps differ at index {index} (market_cap={market_cap}, price={price}, volume={volume})"
    )]
    TimestampMismatch {
        index: usize,
        market_cap: i64,
        price: i64,
        volume: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_error_names_misalignment() {
        let err = SeriesError::LengthMismatch {
            market_cap: 3,
            price: 2,
            volume: 3,
        };
        assert!(err.to_string().starts_with("misaligned series"));

        let err = SeriesError::TimestampMismatch {
            index: 1,
            market_cap: 2000,
            price: 2001,
            volume: 2000,
        };
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_sdk_error_from_series_error() {
        let err: SdkError = SeriesError::LengthMismatch {
            market_cap: 1,
            price: 0,
            volume: 0,
        }
        .into();
        assert!(matches!(err, SdkError::Series(_)));
        assert!(err.to_string().contains("misaligned series"));
    }
}
