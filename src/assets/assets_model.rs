use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{ALGO_ASSET_ID, ALGO_DECIMALS};

/// On-chain asset parameters needed to display and scale a holding.
///
/// Fetched per asset on every valuation pass, never cached across passes,
/// so on-chain metadata drift is picked up at the next refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    pub id: u64,
    pub name: String,
    pub unit_name: Option<String>,
    pub decimals: u32,
}

impl AssetMetadata {
    /// Metadata of the native ALGO balance.
    pub fn native() -> Self {
        AssetMetadata {
            id: ALGO_ASSET_ID,
            name: "Algorand".to_string(),
            unit_name: Some("ALGO".to_string()),
            decimals: ALGO_DECIMALS,
        }
    }

    /// Stand-in used when the metadata fetch fails; keeps the position
    /// visible with its raw amount.
    pub fn placeholder(asset_id: u64) -> Self {
        AssetMetadata {
            id: asset_id,
            name: format!("ASA #{}", asset_id),
            unit_name: None,
            decimals: 0,
        }
    }

    /// Converts a raw smallest-unit amount into whole units.
    pub fn whole_amount(&self, raw: u64) -> Decimal {
        scale_down(raw, self.decimals)
    }
}

/// Scales a raw integer amount down by `decimals` powers of ten.
///
/// ASA decimals are capped at 19 on chain; `Decimal` supports scales up
/// to 28.
pub fn scale_down(raw: u64, decimals: u32) -> Decimal {
    Decimal::from_i128_with_scale(raw as i128, decimals.min(28))
}
