//! Wire types for the history endpoint (REST).

use crate::shared::Timestamp;
use serde::{Deserialize, Serialize};

/// A single `[timestamp, value]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint(pub Timestamp, pub f64);

impl DataPoint {
    pub fn timestamp(&self) -> Timestamp {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

/// REST response for one asset/period: three parallel series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeriesBundle {
    pub market_cap: Vec<DataPoint>,
    pub price: Vec<DataPoint>,
    pub volume: Vec<DataPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_deserializes_pair_arrays() {
        let json = r#"{
            "market_cap": [[1000, 100], [2000, 200.5]],
            "price": [[1000, 10], [2000, 20.25]],
            "volume": [[1000, 1], [2000, 2]]
        }"#;
        let bundle: RawSeriesBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.market_cap.len(), 2);
        assert_eq!(bundle.market_cap[1], DataPoint(2000, 200.5));
        assert_eq!(bundle.price[1].value(), 20.25);
        assert_eq!(bundle.volume[0].timestamp(), 1000);
    }

    #[test]
    fn test_bundle_rejects_missing_series() {
        let json = r#"{ "market_cap": [], "price": [] }"#;
        assert!(serde_json::from_str::<RawSeriesBundle>(json).is_err());
    }

    #[test]
    fn test_data_point_rejects_wrong_arity() {
        assert!(serde_json::from_str::<DataPoint>("[1000]").is_err());
        assert!(serde_json::from_str::<DataPoint>("[1000, 1, 2]").is_err());
    }
}
