use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::assets::assets_model::scale_down;
use crate::constants::{ALGO_ASSET_ID, ALGO_DECIMALS, DEFAULT_SLIPPAGE};
use super::quotes_errors::QuoteError;
use super::quotes_traits::{PoolProviderTrait, QuoteResolverTrait};

/// Spot-converts raw asset amounts into whole ALGO through pool quotes.
pub struct QuoteService {
    pool_provider: Arc<dyn PoolProviderTrait>,
    slippage: Decimal,
}

impl QuoteService {
    pub fn new(pool_provider: Arc<dyn PoolProviderTrait>) -> Self {
        Self::with_slippage(pool_provider, DEFAULT_SLIPPAGE)
    }

    pub fn with_slippage(pool_provider: Arc<dyn PoolProviderTrait>, slippage: Decimal) -> Self {
        QuoteService {
            pool_provider,
            slippage,
        }
    }
}

#[async_trait]
impl QuoteResolverTrait for QuoteService {
    async fn try_resolve_value(
        &self,
        asset_id: u64,
        amount: u64,
    ) -> Result<Decimal, QuoteError> {
        // The reference asset prices itself; no pool lookup.
        if asset_id == ALGO_ASSET_ID {
            return Ok(scale_down(amount, ALGO_DECIMALS));
        }

        let pool = self
            .pool_provider
            .fetch_pool(ALGO_ASSET_ID, asset_id)
            .await?;
        let quote = pool.fixed_input_quote(asset_id, amount, self.slippage)?;

        Ok(scale_down(quote.amount_out, ALGO_DECIMALS))
    }
}
