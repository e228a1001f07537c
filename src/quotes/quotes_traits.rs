use async_trait::async_trait;
use log::warn;
use rust_decimal::Decimal;

use super::quotes_errors::QuoteError;
use super::quotes_model::PoolState;

#[async_trait]
pub trait PoolProviderTrait: Send + Sync {
    /// Looks up the liquidity pool pairing the two assets.
    async fn fetch_pool(&self, asset_1_id: u64, asset_2_id: u64)
        -> Result<PoolState, QuoteError>;
}

#[async_trait]
pub trait QuoteResolverTrait: Send + Sync {
    /// Values a raw asset amount in whole reference-asset units.
    async fn try_resolve_value(&self, asset_id: u64, amount: u64)
        -> Result<Decimal, QuoteError>;

    /// Like [`Self::try_resolve_value`], but degrades any failure to a zero
    /// value. One illiquid or delisted asset must never block pricing of the
    /// rest of the portfolio.
    async fn resolve_value(&self, asset_id: u64, amount: u64) -> Decimal {
        match self.try_resolve_value(asset_id, amount).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not price asset {}: {}. Valuing at 0.", asset_id, e);
                Decimal::ZERO
            }
        }
    }
}
