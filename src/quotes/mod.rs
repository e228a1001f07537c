pub mod providers;
pub mod quotes_errors;
pub mod quotes_model;
pub mod quotes_service;
pub mod quotes_traits;

pub use quotes_errors::QuoteError;
pub use quotes_model::{PoolState, SwapQuote};
pub use quotes_service::QuoteService;
pub use quotes_traits::{PoolProviderTrait, QuoteResolverTrait};
pub use providers::tinyman_provider::TinymanPoolProvider;
