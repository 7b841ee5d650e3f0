//! Network URL constants for the CoinCap history API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://coincap.io";

/// Path prefix of the history endpoint.
pub const HISTORY_PATH: &str = "/history";
