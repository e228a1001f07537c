use log::debug;
use std::fs::{self, File};
use std::path::PathBuf;

use super::history_errors::HistoryError;
use super::history_model::{HistoryRecord, HistorySample};
use super::history_traits::HistoryRepositoryTrait;

/// Flat CSV log with columns `date,total_value_algo`, one row per sample.
///
/// Appends follow a read-merge-write discipline: the existing log is read
/// back in full before the new row is added, so a log that cannot be parsed
/// fails the append instead of being clobbered. Single-writer; the intended
/// deployment runs one process.
pub struct CsvHistoryRepository {
    path: PathBuf,
}

impl CsvHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvHistoryRepository { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HistoryRepositoryTrait for CsvHistoryRepository {
    fn append(&self, sample: &HistorySample) -> Result<(), HistoryError> {
        let mut samples = self.read_all()?;
        samples.push(sample.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);
        for sample in &samples {
            writer.serialize(HistoryRecord::from(sample))?;
        }
        writer.flush()?;

        debug!(
            "Appended sample to {}, {} rows total",
            self.path.display(),
            samples.len()
        );
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<HistorySample>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut samples = Vec::new();
        for record in reader.deserialize::<HistoryRecord>() {
            let record = record.map_err(|e| HistoryError::ReadCorrupt(e.to_string()))?;
            samples.push(HistorySample::try_from(record)?);
        }
        Ok(samples)
    }
}
