use async_trait::async_trait;

use super::ledger_errors::LedgerError;
use super::ledger_model::Holding;

#[async_trait]
pub trait LedgerReaderTrait: Send + Sync {
    /// Returns the wallet's balances: the native ALGO amount first (always
    /// included, it funds transaction fees), then every ASA held with a
    /// nonzero amount, preserving node order.
    ///
    /// Not retried internally; the next scheduled refresh retries
    /// implicitly.
    async fn account_holdings(&self, address: &str) -> Result<Vec<Holding>, LedgerError>;
}
