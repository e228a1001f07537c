use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::HISTORY_TIMESTAMP_FORMAT;
use super::history_errors::HistoryError;

/// One point of the persisted total-value series. Append-only; the full
/// sequence is the engine's state across process restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySample {
    pub timestamp: NaiveDateTime,
    pub total_value: Decimal,
}

impl HistorySample {
    pub fn new(timestamp: NaiveDateTime, total_value: Decimal) -> Self {
        HistorySample {
            timestamp,
            total_value,
        }
    }
}

/// Row layout of the on-disk log: `date,total_value_algo`. Values travel as
/// strings so they round-trip exactly.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HistoryRecord {
    pub date: String,
    pub total_value_algo: String,
}

impl From<&HistorySample> for HistoryRecord {
    fn from(sample: &HistorySample) -> Self {
        HistoryRecord {
            date: sample
                .timestamp
                .format(HISTORY_TIMESTAMP_FORMAT)
                .to_string(),
            total_value_algo: sample.total_value.to_string(),
        }
    }
}

impl TryFrom<HistoryRecord> for HistorySample {
    type Error = HistoryError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let timestamp = NaiveDateTime::parse_from_str(&record.date, HISTORY_TIMESTAMP_FORMAT)
            .map_err(|e| {
                HistoryError::ReadCorrupt(format!("bad timestamp '{}': {}", record.date, e))
            })?;
        let total_value = Decimal::from_str(&record.total_value_algo).map_err(|e| {
            HistoryError::ReadCorrupt(format!(
                "bad value '{}': {}",
                record.total_value_algo, e
            ))
        })?;
        Ok(HistorySample::new(timestamp, total_value))
    }
}
