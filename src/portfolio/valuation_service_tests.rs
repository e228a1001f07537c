use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::{AssetError, AssetMetadata, AssetMetadataProviderTrait};
use crate::constants::ALGO_ASSET_ID;
use crate::errors::Error;
use crate::ledger::{Holding, LedgerError, LedgerReaderTrait};
use crate::quotes::{QuoteError, QuoteResolverTrait};
use super::valuation_service::{ValuationService, ValuationServiceTrait};

// =========================================================================
// Mocks
// =========================================================================

struct MockLedger {
    holdings: Vec<Holding>,
    unavailable: bool,
}

impl MockLedger {
    fn with_holdings(holdings: Vec<Holding>) -> Self {
        MockLedger {
            holdings,
            unavailable: false,
        }
    }

    fn unavailable() -> Self {
        MockLedger {
            holdings: Vec::new(),
            unavailable: true,
        }
    }
}

#[async_trait]
impl LedgerReaderTrait for MockLedger {
    async fn account_holdings(&self, address: &str) -> Result<Vec<Holding>, LedgerError> {
        if self.unavailable {
            return Err(LedgerError::InvalidAddress(address.to_string()));
        }
        Ok(self.holdings.clone())
    }
}

#[derive(Default)]
struct MockAssetProvider {
    metadata: HashMap<u64, AssetMetadata>,
}

impl MockAssetProvider {
    fn with_asset(mut self, id: u64, name: &str, decimals: u32) -> Self {
        self.metadata.insert(
            id,
            AssetMetadata {
                id,
                name: name.to_string(),
                unit_name: None,
                decimals,
            },
        );
        self
    }
}

#[async_trait]
impl AssetMetadataProviderTrait for MockAssetProvider {
    async fn fetch_asset(&self, asset_id: u64) -> Result<AssetMetadata, AssetError> {
        if asset_id == ALGO_ASSET_ID {
            return Ok(AssetMetadata::native());
        }
        self.metadata
            .get(&asset_id)
            .cloned()
            .ok_or(AssetError::NotFound(asset_id))
    }
}

/// Resolver backed by a fixed value table; unknown assets fail the typed
/// path and therefore degrade to zero.
#[derive(Default)]
struct MockQuoteResolver {
    values: HashMap<u64, Decimal>,
}

impl MockQuoteResolver {
    fn with_value(mut self, asset_id: u64, value: Decimal) -> Self {
        self.values.insert(asset_id, value);
        self
    }
}

#[async_trait]
impl QuoteResolverTrait for MockQuoteResolver {
    async fn try_resolve_value(
        &self,
        asset_id: u64,
        _amount: u64,
    ) -> Result<Decimal, QuoteError> {
        self.values
            .get(&asset_id)
            .copied()
            .ok_or(QuoteError::NoPool(ALGO_ASSET_ID, asset_id))
    }
}

fn service(
    ledger: MockLedger,
    assets: MockAssetProvider,
    quotes: MockQuoteResolver,
) -> ValuationService {
    ValuationService::new(Arc::new(ledger), Arc::new(assets), Arc::new(quotes))
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn total_equals_sum_of_position_values_and_shares_sum_to_100() {
    let ledger = MockLedger::with_holdings(vec![
        Holding::new(ALGO_ASSET_ID, 5_000_000),
        Holding::new(1, 300),
        Holding::new(2, 70),
    ]);
    let assets = MockAssetProvider::default()
        .with_asset(1, "Asset One", 2)
        .with_asset(2, "Asset Two", 0);
    let quotes = MockQuoteResolver::default()
        .with_value(ALGO_ASSET_ID, dec!(5))
        .with_value(1, dec!(3))
        .with_value(2, dec!(2));

    let snapshot = service(ledger, assets, quotes)
        .get_snapshot("WALLET")
        .await
        .unwrap();

    assert_eq!(snapshot.total_value, dec!(10));
    let value_sum: Decimal = snapshot.positions.iter().map(|p| p.value).sum();
    assert_eq!(value_sum, snapshot.total_value);

    let share_sum: Decimal = snapshot.positions.iter().map(|p| p.share_of_total).sum();
    assert_eq!(share_sum, dec!(100));
    assert_eq!(snapshot.positions[0].share_of_total, dec!(50));
}

#[tokio::test]
async fn zero_total_yields_zero_shares_without_division() {
    let ledger = MockLedger::with_holdings(vec![
        Holding::new(ALGO_ASSET_ID, 0),
        Holding::new(1, 100),
    ]);
    let assets = MockAssetProvider::default().with_asset(1, "Dead Token", 0);
    // No values at all: every quote degrades to zero.
    let quotes = MockQuoteResolver::default().with_value(ALGO_ASSET_ID, dec!(0));

    let snapshot = service(ledger, assets, quotes)
        .get_snapshot("WALLET")
        .await
        .unwrap();

    assert_eq!(snapshot.total_value, Decimal::ZERO);
    assert_eq!(snapshot.positions.len(), 2);
    for position in &snapshot.positions {
        assert_eq!(position.share_of_total, Decimal::ZERO);
    }
}

#[tokio::test]
async fn positions_sort_descending_and_ties_keep_ledger_order() {
    let ledger = MockLedger::with_holdings(vec![
        Holding::new(ALGO_ASSET_ID, 1_000_000),
        Holding::new(10, 1),
        Holding::new(11, 1),
        Holding::new(12, 1),
    ]);
    let assets = MockAssetProvider::default()
        .with_asset(10, "First Tie", 0)
        .with_asset(11, "Big Position", 0)
        .with_asset(12, "Second Tie", 0);
    let quotes = MockQuoteResolver::default()
        .with_value(ALGO_ASSET_ID, dec!(1))
        .with_value(10, dec!(2))
        .with_value(11, dec!(7))
        .with_value(12, dec!(2));

    let snapshot = service(ledger, assets, quotes)
        .get_snapshot("WALLET")
        .await
        .unwrap();

    let ids: Vec<u64> = snapshot.positions.iter().map(|p| p.asset_id).collect();
    assert_eq!(ids, vec![11, 10, 12, ALGO_ASSET_ID]);
}

#[tokio::test]
async fn metadata_failure_degrades_to_placeholder_instead_of_aborting() {
    let ledger = MockLedger::with_holdings(vec![
        Holding::new(ALGO_ASSET_ID, 2_000_000),
        Holding::new(99, 150),
    ]);
    // Asset 99 has no metadata, but its quote still resolves.
    let assets = MockAssetProvider::default();
    let quotes = MockQuoteResolver::default()
        .with_value(ALGO_ASSET_ID, dec!(2))
        .with_value(99, dec!(1));

    let snapshot = service(ledger, assets, quotes)
        .get_snapshot("WALLET")
        .await
        .unwrap();

    assert_eq!(snapshot.total_value, dec!(3));
    let degraded = snapshot
        .positions
        .iter()
        .find(|p| p.asset_id == 99)
        .unwrap();
    assert_eq!(degraded.name, "ASA #99");
    assert_eq!(degraded.amount, dec!(150));
    assert_eq!(degraded.value, dec!(1));
}

#[tokio::test]
async fn ledger_failure_aborts_the_pass() {
    let result = service(
        MockLedger::unavailable(),
        MockAssetProvider::default(),
        MockQuoteResolver::default(),
    )
    .get_snapshot("NOT-AN-ADDRESS")
    .await;

    assert!(matches!(result, Err(Error::Ledger(_))));
}
