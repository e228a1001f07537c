pub mod ledger_errors;
pub mod ledger_model;
pub mod ledger_traits;
pub mod providers;

pub use ledger_errors::LedgerError;
pub use ledger_model::Holding;
pub use ledger_traits::LedgerReaderTrait;
pub use providers::algod_provider::AlgodClient;
