use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("History log is corrupt: {0}")]
    ReadCorrupt(String),

    #[error("History log write failed: {0}")]
    WriteFailed(#[from] csv::Error),
}
