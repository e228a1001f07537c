use thiserror::Error;

use crate::ledger::ledger_errors::LedgerError;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Ledger query failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Asset {0} not found")]
    NotFound(u64),
}
