//! Pure history transformations: merge → sort → pick → format.
//!
//! Every stage borrows its input and returns a fresh `Vec`.

use super::wire::RawSeriesBundle;
use super::{DisplayTz, HistoryRecord};
use crate::error::SeriesError;
use crate::shared::Timestamp;
use chrono::{DateTime, Local, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Zip the three series of a bundle into one record per index.
///
/// Timestamps come from `market_cap`; `price` and `volume` must have the same
/// length and the same timestamp at every index.
pub fn merge(bundle: &RawSeriesBundle) -> Result<Vec<HistoryRecord>, SeriesError> {
    let (market_cap, price, volume) = (&bundle.market_cap, &bundle.price, &bundle.volume);

    if market_cap.len() != price.len() || market_cap.len() != volume.len() {
        let err = SeriesError::LengthMismatch {
            market_cap: market_cap.len(),
            price: price.len(),
            volume: volume.len(),
        };
        tracing::warn!(%err, "Rejecting history bundle");
        return Err(err);
    }

    let records = market_cap
        .iter()
        .zip(price)
        .zip(volume)
        .enumerate()
        .map(|(index, ((m, p), v))| {
            let timestamp = m.timestamp();
            if timestamp != p.timestamp() || timestamp != v.timestamp() {
                let err = SeriesError::TimestampMismatch {
                    index,
                    market_cap: timestamp,
                    price: p.timestamp(),
                    volume: v.timestamp(),
                };
                tracing::warn!(%err, "Rejecting history bundle");
                return Err(err);
            }
            Ok(HistoryRecord {
                timestamp,
                market_cap: m.value(),
                price: p.value(),
                volume: v.value(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(records = records.len(), "Merged history bundle");
    Ok(records)
}

/// Newest first. Stable, so equal timestamps keep their input order.
pub fn sort_by_time_desc(records: &[HistoryRecord]) -> Vec<HistoryRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// The first `count` records (fewer if the input is shorter).
pub fn pick_top(count: usize, records: &[HistoryRecord]) -> Vec<HistoryRecord> {
    records.iter().take(count).copied().collect()
}

/// Render a millisecond timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Timestamps chrono cannot represent fall back to the raw integer.
pub fn as_date(timestamp: Timestamp, tz: DisplayTz) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(timestamp) else {
        return timestamp.to_string();
    };
    match tz {
        DisplayTz::Utc => utc.format(DATE_FORMAT).to_string(),
        DisplayTz::Local => utc.with_timezone(&Local).format(DATE_FORMAT).to_string(),
    }
}

/// `"<date>: $<price>"` for one record.
pub fn format_record(record: &HistoryRecord, tz: DisplayTz) -> String {
    format!("{}: ${}", as_date(record.timestamp, tz), record.price)
}

/// Display lines with dates in UTC.
pub fn format_records(records: &[HistoryRecord]) -> Vec<String> {
    format_records_in(records, DisplayTz::Utc)
}

/// Display lines with dates rendered under `tz`.
pub fn format_records_in(records: &[HistoryRecord], tz: DisplayTz) -> Vec<String> {
    records.iter().map(|r| format_record(r, tz)).collect()
}

/// The synchronous tail of the chain: merge, newest first, keep `top_n`, format.
pub fn process(
    bundle: &RawSeriesBundle,
    top_n: usize,
    tz: DisplayTz,
) -> Result<Vec<String>, SeriesError> {
    let merged = merge(bundle)?;
    let top = pick_top(top_n, &sort_by_time_desc(&merged));
    tracing::debug!(selected = top.len(), of = merged.len(), "Selected history records");
    Ok(format_records_in(&top, tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::DataPoint;

    fn points(series: &[(i64, f64)]) -> Vec<DataPoint> {
        series.iter().map(|&(t, v)| DataPoint(t, v)).collect()
    }

    fn bundle(market_cap: &[(i64, f64)], price: &[(i64, f64)], volume: &[(i64, f64)]) -> RawSeriesBundle {
        RawSeriesBundle {
            market_cap: points(market_cap),
            price: points(price),
            volume: points(volume),
        }
    }

    fn sample_bundle() -> RawSeriesBundle {
        bundle(
            &[(1000, 100.0), (2000, 200.0), (3000, 300.0)],
            &[(1000, 10.0), (2000, 20.0), (3000, 30.0)],
            &[(1000, 1.0), (2000, 2.0), (3000, 3.0)],
        )
    }

    fn record(timestamp: i64, price: f64) -> HistoryRecord {
        HistoryRecord {
            timestamp,
            market_cap: price * 10.0,
            price,
            volume: 1.0,
        }
    }

    #[test]
    fn test_merge_takes_values_by_index() {
        let b = sample_bundle();
        let merged = merge(&b).unwrap();
        assert_eq!(merged.len(), 3);
        for (i, r) in merged.iter().enumerate() {
            assert_eq!(r.timestamp, b.market_cap[i].0);
            assert_eq!(r.market_cap, b.market_cap[i].1);
            assert_eq!(r.price, b.price[i].1);
            assert_eq!(r.volume, b.volume[i].1);
        }
    }

    #[test]
    fn test_merge_empty_bundle() {
        assert!(merge(&RawSeriesBundle::default()).unwrap().is_empty());
    }

    #[test]
    fn test_merge_rejects_length_mismatch() {
        let b = bundle(
            &[(1000, 100.0), (2000, 200.0)],
            &[(1000, 10.0)],
            &[(1000, 1.0), (2000, 2.0)],
        );
        assert_eq!(
            merge(&b).unwrap_err(),
            SeriesError::LengthMismatch {
                market_cap: 2,
                price: 1,
                volume: 2,
            }
        );
    }

    #[test]
    fn test_merge_rejects_timestamp_mismatch() {
        let b = bundle(
            &[(1000, 100.0), (2000, 200.0)],
            &[(1000, 10.0), (2000, 20.0)],
            &[(1000, 1.0), (2500, 2.0)],
        );
        assert_eq!(
            merge(&b).unwrap_err(),
            SeriesError::TimestampMismatch {
                index: 1,
                market_cap: 2000,
                price: 2000,
                volume: 2500,
            }
        );
    }

    #[test]
    fn test_sort_is_descending_and_idempotent() {
        let records = vec![record(2000, 2.0), record(3000, 3.0), record(1000, 1.0)];
        let sorted = sort_by_time_desc(&records);
        let times: Vec<_> = sorted.iter().map(|r| r.timestamp).collect();
        assert_eq!(times, [3000, 2000, 1000]);
        assert_eq!(sort_by_time_desc(&sorted), sorted);
        // input untouched
        assert_eq!(records[0].timestamp, 2000);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let records = vec![record(1000, 1.0), record(2000, 2.0), record(1000, 1.5)];
        let sorted = sort_by_time_desc(&records);
        let prices: Vec<_> = sorted.iter().map(|r| r.price).collect();
        assert_eq!(prices, [2.0, 1.0, 1.5]);
    }

    #[test]
    fn test_pick_top() {
        let records = vec![record(3000, 3.0), record(2000, 2.0), record(1000, 1.0)];
        assert!(pick_top(0, &records).is_empty());
        assert_eq!(pick_top(2, &records), records[..2]);
        assert_eq!(pick_top(10, &records), records);
    }

    #[test]
    fn test_as_date_utc() {
        assert_eq!(as_date(0, DisplayTz::Utc), "1970-01-01 00:00:00");
        assert_eq!(as_date(1_514_764_800_000, DisplayTz::Utc), "2018-01-01 00:00:00");
        assert_eq!(as_date(1_514_768_461_999, DisplayTz::Utc), "2018-01-01 01:01:01");
    }

    #[test]
    fn test_as_date_out_of_range_falls_back_to_raw() {
        assert_eq!(as_date(i64::MAX, DisplayTz::Utc), i64::MAX.to_string());
    }

    #[test]
    fn test_as_date_local_uses_same_layout() {
        let s = as_date(1_514_764_800_000, DisplayTz::Local);
        assert_eq!(s.len(), "2018-01-01 00:00:00".len());
        assert_eq!(&s[4..5], "-");
        assert_eq!(&s[10..11], " ");
    }

    #[test]
    fn test_format_record_price_rendering() {
        assert_eq!(
            format_record(&record(0, 30.0), DisplayTz::Utc),
            "1970-01-01 00:00:00: $30"
        );
        assert_eq!(
            format_record(&record(0, 6543.21), DisplayTz::Utc),
            "1970-01-01 00:00:00: $6543.21"
        );
    }

    #[test]
    fn test_format_records_preserves_length() {
        let records = vec![record(3000, 3.5), record(2000, 2.0)];
        let lines = format_records(&records);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("$3.5"));
        assert!(lines[1].contains("$2"));
    }

    #[test]
    fn test_process_end_to_end() {
        let lines = process(&sample_bundle(), 2, DisplayTz::Utc).unwrap();
        assert_eq!(
            lines,
            [
                "1970-01-01 00:00:03: $30".to_string(),
                "1970-01-01 00:00:02: $20".to_string(),
            ]
        );
    }

    #[test]
    fn test_process_propagates_misalignment() {
        let b = bundle(&[(1000, 100.0)], &[], &[(1000, 1.0)]);
        assert!(matches!(
            process(&b, 10, DisplayTz::Utc),
            Err(SeriesError::LengthMismatch { .. })
        ));
    }
}
