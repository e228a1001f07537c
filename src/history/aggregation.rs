use chrono::{DateTime, Duration};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::history_model::HistorySample;

/// Resamples an irregular series into fixed-width, calendar-aligned time
/// buckets, keeping the last observation per bucket. Buckets without
/// samples are omitted, never interpolated.
///
/// Stateless and pure: identical input and width always yield identical
/// output. A non-positive width yields an empty series.
pub fn resample(samples: &[HistorySample], bucket_width: Duration) -> Vec<HistorySample> {
    let width_secs = bucket_width.num_seconds();
    if width_secs <= 0 {
        return Vec::new();
    }

    let mut buckets: BTreeMap<i64, Decimal> = BTreeMap::new();
    for sample in samples {
        let secs = sample.timestamp.and_utc().timestamp();
        let bucket_start = secs.div_euclid(width_secs) * width_secs;
        // Input order is chronological, so the last insert wins the bucket.
        buckets.insert(bucket_start, sample.total_value);
    }

    buckets
        .into_iter()
        .filter_map(|(start, value)| {
            DateTime::from_timestamp(start, 0)
                .map(|ts| HistorySample::new(ts.naive_utc(), value))
        })
        .collect()
}
