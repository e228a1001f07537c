use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::errors::Result;
use super::history_errors::HistoryError;
use super::history_model::HistorySample;

/// Storage capability behind the value history: append one sample, read the
/// full series back. Swappable so tests can run against an in-memory log.
pub trait HistoryRepositoryTrait: Send + Sync {
    /// Appends one sample to the end of the log, creating it if absent.
    /// Previously appended samples must survive every later write.
    fn append(&self, sample: &HistorySample) -> std::result::Result<(), HistoryError>;

    /// Returns the full append-ordered series; empty if no log exists yet.
    fn read_all(&self) -> std::result::Result<Vec<HistorySample>, HistoryError>;
}

pub trait HistoryServiceTrait: Send + Sync {
    /// Logs a total-value sample stamped with the current time.
    fn log_sample(&self, total_value: Decimal) -> Result<HistorySample>;

    /// Logs a total-value sample at an explicit timestamp.
    fn log_sample_at(
        &self,
        timestamp: NaiveDateTime,
        total_value: Decimal,
    ) -> Result<HistorySample>;

    fn get_history(&self) -> Result<Vec<HistorySample>>;

    /// The history resampled into fixed-width buckets, last observation
    /// per bucket.
    fn resampled_history(&self, bucket_width: Duration) -> Result<Vec<HistorySample>>;
}
