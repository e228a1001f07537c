use async_trait::async_trait;
use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use willow_core::assets::{AssetError, AssetMetadata, AssetMetadataProviderTrait};
use willow_core::constants::ALGO_ASSET_ID;
use willow_core::history::{CsvHistoryRepository, HistoryService};
use willow_core::ledger::{Holding, LedgerError, LedgerReaderTrait};
use willow_core::portfolio::{PortfolioService, ValuationService};
use willow_core::quotes::{PoolProviderTrait, PoolState, QuoteError, QuoteService};

const ASSET_X: u64 = 31566704;

// =========================================================================
// Fakes
// =========================================================================

struct FakeLedger {
    holdings: Vec<Holding>,
}

#[async_trait]
impl LedgerReaderTrait for FakeLedger {
    async fn account_holdings(&self, _address: &str) -> Result<Vec<Holding>, LedgerError> {
        Ok(self.holdings.clone())
    }
}

struct FakeAssetProvider;

#[async_trait]
impl AssetMetadataProviderTrait for FakeAssetProvider {
    async fn fetch_asset(&self, asset_id: u64) -> Result<AssetMetadata, AssetError> {
        if asset_id == ALGO_ASSET_ID {
            return Ok(AssetMetadata::native());
        }
        Ok(AssetMetadata {
            id: asset_id,
            name: "Asset X".to_string(),
            unit_name: None,
            decimals: 0,
        })
    }
}

/// Pool lookups always fail, as for a delisted or never-pooled asset.
struct NoPoolProvider;

#[async_trait]
impl PoolProviderTrait for NoPoolProvider {
    async fn fetch_pool(
        &self,
        asset_1_id: u64,
        asset_2_id: u64,
    ) -> Result<PoolState, QuoteError> {
        Err(QuoteError::NoPool(asset_1_id, asset_2_id))
    }
}

fn engine_with_history(
    history_path: std::path::PathBuf,
) -> PortfolioService {
    let ledger = Arc::new(FakeLedger {
        holdings: vec![
            Holding::new(ALGO_ASSET_ID, 5_000_000),
            Holding::new(ASSET_X, 100),
        ],
    });
    let valuation = Arc::new(ValuationService::new(
        ledger,
        Arc::new(FakeAssetProvider),
        Arc::new(QuoteService::new(Arc::new(NoPoolProvider))),
    ));
    let history = Arc::new(HistoryService::new(Arc::new(CsvHistoryRepository::new(
        history_path,
    ))));
    PortfolioService::new(valuation, history)
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn unquotable_asset_degrades_to_zero_in_a_priced_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_history(dir.path().join("history.csv"));

    let snapshot = engine.get_snapshot("WALLET").await.unwrap();

    assert_eq!(snapshot.total_value, dec!(5.0));
    assert_eq!(snapshot.positions.len(), 2);

    let native = &snapshot.positions[0];
    assert_eq!(native.asset_id, ALGO_ASSET_ID);
    assert_eq!(native.name, "Algorand");
    assert_eq!(native.amount, dec!(5.0));
    assert_eq!(native.value, dec!(5.0));
    assert_eq!(native.share_of_total, dec!(100));

    let asset_x = &snapshot.positions[1];
    assert_eq!(asset_x.asset_id, ASSET_X);
    assert_eq!(asset_x.amount, dec!(100));
    assert_eq!(asset_x.value, Decimal::ZERO);
    assert_eq!(asset_x.share_of_total, Decimal::ZERO);
}

#[tokio::test]
async fn refresh_logs_one_sample_per_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_with_history(dir.path().join("history.csv"));

    engine.refresh("WALLET").await.unwrap();
    engine.refresh("WALLET").await.unwrap();

    let history = engine.get_history().unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|s| s.total_value == dec!(5.0)));

    // Samples taken seconds apart collapse into at most one point per
    // hour bucket.
    let resampled = engine.resampled_history(Duration::minutes(60)).unwrap();
    assert!(!resampled.is_empty() && resampled.len() <= history.len());
    assert!(resampled.iter().all(|s| s.total_value == dec!(5.0)));
}
