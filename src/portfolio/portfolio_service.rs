use chrono::Duration;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::Result;
use crate::history::{CsvHistoryRepository, HistorySample, HistoryService, HistoryServiceTrait};
use crate::ledger::AlgodClient;
use crate::quotes::{QuoteService, TinymanPoolProvider};
use crate::settings::Settings;
use super::portfolio_model::PortfolioSnapshot;
use super::valuation_service::{ValuationService, ValuationServiceTrait};

/// Surface consumed by the presentation layer: snapshots on demand plus the
/// persisted total-value series behind the performance chart.
///
/// The service schedules nothing itself; the consumer triggers
/// [`PortfolioService::refresh`] on its own cadence.
pub struct PortfolioService {
    valuation: Arc<dyn ValuationServiceTrait>,
    history: Arc<dyn HistoryServiceTrait>,
}

impl PortfolioService {
    pub fn new(
        valuation: Arc<dyn ValuationServiceTrait>,
        history: Arc<dyn HistoryServiceTrait>,
    ) -> Self {
        PortfolioService { valuation, history }
    }

    /// Wires the default algod and Tinyman providers from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let algod = Arc::new(AlgodClient::new(&settings.algod_url, &settings.algod_token));
        let quotes = Arc::new(QuoteService::new(Arc::new(TinymanPoolProvider::mainnet())));
        let valuation = Arc::new(ValuationService::new(algod.clone(), algod, quotes));
        let history = Arc::new(HistoryService::new(Arc::new(CsvHistoryRepository::new(
            &settings.history_file,
        ))));
        Self::new(valuation, history)
    }

    pub async fn get_snapshot(&self, address: &str) -> Result<PortfolioSnapshot> {
        self.valuation.get_snapshot(address).await
    }

    /// One refresh cycle: value the wallet and log the total.
    pub async fn refresh(&self, address: &str) -> Result<PortfolioSnapshot> {
        let snapshot = self.valuation.get_snapshot(address).await?;
        self.history.log_sample(snapshot.total_value)?;
        debug!(
            "Refreshed {}: total value {} ALGO across {} positions",
            address,
            snapshot.total_value,
            snapshot.positions.len()
        );
        Ok(snapshot)
    }

    pub fn log_sample(&self, total_value: Decimal) -> Result<HistorySample> {
        self.history.log_sample(total_value)
    }

    pub fn get_history(&self) -> Result<Vec<HistorySample>> {
        self.history.get_history()
    }

    pub fn resampled_history(&self, bucket_width: Duration) -> Result<Vec<HistorySample>> {
        self.history.resampled_history(bucket_width)
    }
}
