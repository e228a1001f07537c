use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("Node returned status {status}: {message}")]
    Node { status: u16, message: String },

    #[error("Parsing error: {0}")]
    Parsing(String),
}
