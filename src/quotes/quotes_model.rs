use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::SWAP_FEE_BPS;
use super::quotes_errors::QuoteError;

/// Reserves of a Tinyman v2 constant-product pool at quote time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolState {
    pub address: String,
    pub asset_1_id: u64,
    pub asset_2_id: u64,
    pub asset_1_reserves: u64,
    pub asset_2_reserves: u64,
}

/// Result of simulating a fixed-input swap against a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapQuote {
    pub amount_in: u64,
    pub amount_out: u64,
    /// Worst acceptable output under the slippage tolerance.
    pub min_amount_out: u64,
}

impl PoolState {
    /// Simulates swapping `amount_in` of `asset_in_id` for the paired asset,
    /// with the swap fee taken off the input side.
    pub fn fixed_input_quote(
        &self,
        asset_in_id: u64,
        amount_in: u64,
        slippage: Decimal,
    ) -> Result<SwapQuote, QuoteError> {
        let (input_reserves, output_reserves) = if asset_in_id == self.asset_1_id {
            (self.asset_1_reserves, self.asset_2_reserves)
        } else if asset_in_id == self.asset_2_id {
            (self.asset_2_reserves, self.asset_1_reserves)
        } else {
            return Err(QuoteError::AssetNotInPool(asset_in_id));
        };

        if input_reserves == 0 || output_reserves == 0 {
            return Err(QuoteError::NoLiquidity(self.address.clone()));
        }

        // x*y=k, intermediates widened to u128
        let amount_in_after_fee =
            amount_in as u128 * (10_000 - SWAP_FEE_BPS) as u128 / 10_000;
        let amount_out = (amount_in_after_fee * output_reserves as u128
            / (input_reserves as u128 + amount_in_after_fee)) as u64;

        let min_amount_out = (Decimal::from(amount_out) * (Decimal::ONE - slippage))
            .floor()
            .to_u64()
            .unwrap_or(0);

        Ok(SwapQuote {
            amount_in,
            amount_out,
            min_amount_out,
        })
    }
}
