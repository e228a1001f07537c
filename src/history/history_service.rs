use chrono::{Duration, Local, NaiveDateTime, Timelike};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::Result;
use super::aggregation;
use super::history_model::HistorySample;
use super::history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};

/// Append-and-read access to the total-value series, plus the resampling
/// the performance chart consumes.
pub struct HistoryService {
    repository: Arc<dyn HistoryRepositoryTrait>,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn HistoryRepositoryTrait>) -> Self {
        HistoryService { repository }
    }
}

impl HistoryServiceTrait for HistoryService {
    fn log_sample(&self, total_value: Decimal) -> Result<HistorySample> {
        // Second precision, matching the persisted timestamp format.
        let now = Local::now().naive_local();
        let now = now.with_nanosecond(0).unwrap_or(now);
        self.log_sample_at(now, total_value)
    }

    fn log_sample_at(
        &self,
        timestamp: NaiveDateTime,
        total_value: Decimal,
    ) -> Result<HistorySample> {
        let sample = HistorySample::new(timestamp, total_value);
        self.repository.append(&sample)?;
        debug!("Logged total value {} at {}", total_value, timestamp);
        Ok(sample)
    }

    fn get_history(&self) -> Result<Vec<HistorySample>> {
        Ok(self.repository.read_all()?)
    }

    fn resampled_history(&self, bucket_width: Duration) -> Result<Vec<HistorySample>> {
        let samples = self.repository.read_all()?;
        Ok(aggregation::resample(&samples, bucket_width))
    }
}
