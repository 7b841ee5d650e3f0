//! Shared newtypes used across the crate.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the backend uses, so they can be used directly in wire types
//! without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Unix timestamp in milliseconds, as sent by the history endpoint.
pub type Timestamp = i64;

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Newtype for asset symbols (e.g. `"BTC"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// History window accepted by the history endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Full history; the key carries no period prefix.
    #[serde(rename = "all")]
    All,
    #[default]
    #[serde(rename = "1day")]
    Day1,
    #[serde(rename = "7day")]
    Day7,
    #[serde(rename = "30day")]
    Day30,
    #[serde(rename = "90day")]
    Day90,
    #[serde(rename = "180day")]
    Day180,
    #[serde(rename = "365day")]
    Day365,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Day1 => "1day",
            Self::Day7 => "7day",
            Self::Day30 => "30day",
            Self::Day90 => "90day",
            Self::Day180 => "180day",
            Self::Day365 => "365day",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "1day" => Ok(Self::Day1),
            "7day" => Ok(Self::Day7),
            "30day" => Ok(Self::Day30),
            "90day" => Ok(Self::Day90),
            "180day" => Ok(Self::Day180),
            "365day" => Ok(Self::Day365),
            other => Err(format!("unknown period: {}", other)),
        }
    }
}

// ─── HistoryKey ──────────────────────────────────────────────────────────────

/// Asset/period path identifying one history (e.g. `"1day/BTC"`).
///
/// Not validated here; the remote source decides what it accepts. The HTTP
/// client refuses keys with `.`/`..` segments when building the request URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryKey(String);

impl HistoryKey {
    /// Build the key for `asset` over `period`.
    pub fn new(period: Period, asset: &AssetId) -> Self {
        match period {
            Period::All => Self(asset.as_str().to_string()),
            p => Self(format!("{}/{}", p.as_str(), asset.as_str())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encode each `/`-separated segment, keeping the separators.
    pub fn encoded_path(&self) -> String {
        self.0
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for HistoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HistoryKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for HistoryKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for HistoryKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(HistoryKey(s.to_string()))
    }
}

impl Serialize for HistoryKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HistoryKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(HistoryKey(s))
    }
}
