use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::constants::REFRESH_INTERVAL_SECS;
use crate::errors::{ConfigError, Result};
use crate::ledger::providers::algod_provider::ALGOD_MAINNET_URL;

pub const ENV_ALGOD_URL: &str = "WILLOW_ALGOD_URL";
pub const ENV_ALGOD_TOKEN: &str = "WILLOW_ALGOD_TOKEN";
pub const ENV_WALLET_ADDRESS: &str = "WILLOW_WALLET_ADDRESS";
pub const ENV_HISTORY_FILE: &str = "WILLOW_HISTORY_FILE";

/// Runtime configuration of the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub algod_url: String,
    pub algod_token: String,
    pub wallet_address: String,
    pub history_file: PathBuf,
    /// Cadence the presentation layer is expected to refresh at; the engine
    /// itself schedules nothing.
    pub refresh_interval_secs: u64,
}

impl Settings {
    /// Mainnet defaults for the given wallet.
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Settings {
            algod_url: ALGOD_MAINNET_URL.to_string(),
            algod_token: String::new(),
            wallet_address: wallet_address.into(),
            history_file: PathBuf::from("portfolio_history.csv"),
            refresh_interval_secs: REFRESH_INTERVAL_SECS,
        }
    }

    /// Loads settings from the environment, reading `.env` when present.
    /// Only the wallet address is required.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let wallet_address = env::var(ENV_WALLET_ADDRESS)
            .map_err(|_| ConfigError::MissingKey(ENV_WALLET_ADDRESS.to_string()))?;

        let mut settings = Settings::new(wallet_address);
        if let Ok(url) = env::var(ENV_ALGOD_URL) {
            settings.algod_url = url;
        }
        if let Ok(token) = env::var(ENV_ALGOD_TOKEN) {
            settings.algod_token = token;
        }
        if let Ok(path) = env::var(ENV_HISTORY_FILE) {
            settings.history_file = PathBuf::from(path);
        }
        Ok(settings)
    }
}
