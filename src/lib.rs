//! # coincap-history
//!
//! Fetch an asset's market cap / price / volume history from CoinCap and turn
//! it into display lines.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Newtypes, wire types, history records, pure pipeline stages (always available, WASM-safe)
//! 2. **HTTP API** — `CoincapHttp`, one method per endpoint
//! 3. **High-Level Client** — `CoincapClient` with nested sub-clients
//!
//! The pipeline runs Fetch → Merge → Sort (newest first) → Take(N) → Format.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coincap_history::prelude::*;
//!
//! let client = CoincapClient::builder()
//!     .base_url("http://coincap.io")
//!     .build()?;
//!
//! let key = HistoryKey::new(Period::Day1, &AssetId::from("BTC"));
//! for line in client.history().process(&key, 10).await? {
//!     println!("{line}");
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, pipeline, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoincapClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AssetId, HistoryKey, Period, Timestamp};

    // Domain types — history
    pub use crate::domain::history::{
        as_date, format_record, format_records, format_records_in, merge, pick_top, process,
        sort_by_time_desc, DataPoint, DisplayTz, HistoryRecord, RawSeriesBundle,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError, SeriesError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoincapClient, CoincapClientBuilder, HistorySubClient};
    #[cfg(feature = "http")]
    pub use crate::http::CoincapHttp;
}
