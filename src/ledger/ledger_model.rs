use serde::{Deserialize, Serialize};

use crate::constants::ALGO_ASSET_ID;

/// One asset position as read from the node, in the asset's smallest unit.
///
/// Holdings are produced fresh on every valuation pass and never persisted
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub asset_id: u64,
    pub amount: u64,
}

impl Holding {
    pub fn new(asset_id: u64, amount: u64) -> Self {
        Holding { asset_id, amount }
    }

    pub fn is_native(&self) -> bool {
        self.asset_id == ALGO_ASSET_ID
    }
}
