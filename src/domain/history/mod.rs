//! History domain — merged market cap / price / volume records.

#[cfg(feature = "http")]
pub mod client;
pub mod pipeline;
pub mod wire;

use crate::shared::Timestamp;
use serde::{Deserialize, Serialize};

pub use pipeline::{
    as_date, format_record, format_records, format_records_in, merge, pick_top, process,
    sort_by_time_desc,
};
pub use wire::{DataPoint, RawSeriesBundle};

/// One point-in-time observation combining all three series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unix timestamp in milliseconds.
    pub timestamp: Timestamp,
    pub market_cap: f64,
    pub price: f64,
    pub volume: f64,
}

/// Timezone policy used when rendering record dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTz {
    #[default]
    Utc,
    /// System local time.
    Local,
}
