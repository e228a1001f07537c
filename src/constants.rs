use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Reserved asset ID of the native ALGO balance
pub const ALGO_ASSET_ID: u64 = 0;

/// Decimal precision of the reference asset (microalgos per ALGO)
pub const ALGO_DECIMALS: u32 = 6;

/// Slippage tolerance applied to fixed-input swap quotes
pub const DEFAULT_SLIPPAGE: Decimal = dec!(0.01);

/// Tinyman v2 total swap fee in basis points
pub const SWAP_FEE_BPS: u64 = 30;

/// Default bucket width for resampling the value history
pub const HISTORY_BUCKET_MINUTES: i64 = 60;

/// Refresh cadence expected from the presentation layer
pub const REFRESH_INTERVAL_SECS: u64 = 300;

/// Timestamp format of persisted history rows
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
