use thiserror::Error;

use crate::assets::AssetError;
use crate::history::HistoryError;
use crate::ledger::LedgerError;
use crate::quotes::QuoteError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ledger query failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Asset metadata operation failed: {0}")]
    Asset(#[from] AssetError),

    #[error("Quote operation failed: {0}")]
    Quote(#[from] QuoteError),

    #[error("History operation failed: {0}")]
    History(#[from] HistoryError),

    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration key: {0}")]
    MissingKey(String),

    #[error("Invalid configuration value for '{key}': {value}")]
    InvalidValue { key: String, value: String },
}
