use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use crate::assets::{AssetMetadata, AssetMetadataProviderTrait};
use crate::errors::Result;
use crate::ledger::{Holding, LedgerReaderTrait};
use crate::quotes::QuoteResolverTrait;
use super::portfolio_model::{PortfolioSnapshot, PricedAsset};

#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Produces one priced, ranked snapshot of the wallet's holdings.
    async fn get_snapshot(&self, address: &str) -> Result<PortfolioSnapshot>;
}

/// Turns raw on-chain balances into a priced, ranked breakdown.
///
/// A ledger failure aborts the pass; a metadata or quote failure degrades
/// the affected position only.
pub struct ValuationService {
    ledger: Arc<dyn LedgerReaderTrait>,
    asset_provider: Arc<dyn AssetMetadataProviderTrait>,
    quote_resolver: Arc<dyn QuoteResolverTrait>,
}

impl ValuationService {
    pub fn new(
        ledger: Arc<dyn LedgerReaderTrait>,
        asset_provider: Arc<dyn AssetMetadataProviderTrait>,
        quote_resolver: Arc<dyn QuoteResolverTrait>,
    ) -> Self {
        ValuationService {
            ledger,
            asset_provider,
            quote_resolver,
        }
    }

    async fn price_holding(&self, holding: &Holding) -> PricedAsset {
        let metadata = match self.asset_provider.fetch_asset(holding.asset_id).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(
                    "Could not fetch metadata for asset {}: {}. Using placeholder.",
                    holding.asset_id, e
                );
                AssetMetadata::placeholder(holding.asset_id)
            }
        };

        let value = self
            .quote_resolver
            .resolve_value(holding.asset_id, holding.amount)
            .await;

        PricedAsset {
            amount: metadata.whole_amount(holding.amount),
            name: metadata.name,
            asset_id: holding.asset_id,
            value,
            share_of_total: Decimal::ZERO,
        }
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn get_snapshot(&self, address: &str) -> Result<PortfolioSnapshot> {
        let holdings = self.ledger.account_holdings(address).await?;
        debug!("Valuing {} holdings for {}", holdings.len(), address);

        // Pricing legs are independent and each degrades on its own.
        let mut positions =
            join_all(holdings.iter().map(|h| self.price_holding(h))).await;

        let total_value: Decimal = positions.iter().map(|p| p.value).sum();
        if total_value > Decimal::ZERO {
            for position in positions.iter_mut() {
                position.share_of_total = position.value / total_value * dec!(100);
            }
        }

        // Stable sort keeps ledger order for equal values.
        positions.sort_by(|a, b| b.value.cmp(&a.value));

        Ok(PortfolioSnapshot {
            as_of: Utc::now(),
            total_value,
            positions,
        })
    }
}
