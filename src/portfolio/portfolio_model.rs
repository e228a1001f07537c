use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced position of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedAsset {
    pub name: String,
    pub asset_id: u64,
    /// Whole-unit amount (raw amount scaled by the asset's decimals).
    pub amount: Decimal,
    /// Position value in whole ALGO.
    pub value: Decimal,
    /// Percent of the snapshot total; 0 for every position when the total
    /// is zero.
    pub share_of_total: Decimal,
}

/// One complete, internally consistent valuation of the portfolio.
///
/// Immutable once produced; the sum of position values equals
/// `total_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub as_of: DateTime<Utc>,
    pub total_value: Decimal,
    /// Sorted descending by value; ties keep ledger order.
    pub positions: Vec<PricedAsset>,
}
