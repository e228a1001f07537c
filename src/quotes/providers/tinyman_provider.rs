use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::quotes::quotes_errors::QuoteError;
use crate::quotes::quotes_model::PoolState;
use crate::quotes::quotes_traits::PoolProviderTrait;

pub const TINYMAN_MAINNET_API_URL: &str = "https://mainnet.analytics.tinyman.org/api/v1";

#[derive(Deserialize, Debug)]
struct PoolListResponse {
    results: Vec<PoolResponse>,
}

// Tinyman's analytics API returns ids and reserve amounts as strings.
#[derive(Deserialize, Debug)]
struct PoolResponse {
    address: String,
    asset_1: PoolAssetResponse,
    asset_2: PoolAssetResponse,
    current_asset_1_reserves: Option<String>,
    current_asset_2_reserves: Option<String>,
}

#[derive(Deserialize, Debug)]
struct PoolAssetResponse {
    id: String,
}

/// Pool lookup against the Tinyman analytics REST API. The quote itself is
/// computed locally from the returned reserves.
pub struct TinymanPoolProvider {
    client: Client,
    base_url: String,
}

impl TinymanPoolProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        TinymanPoolProvider {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn mainnet() -> Self {
        Self::new(TINYMAN_MAINNET_API_URL)
    }

    fn parse_u64(field: &str, value: &str) -> Result<u64, QuoteError> {
        value
            .parse::<u64>()
            .map_err(|e| QuoteError::MalformedResponse(format!("{}: {}", field, e)))
    }

    fn parse_reserves(field: &str, value: Option<String>) -> Result<u64, QuoteError> {
        let value = value
            .ok_or_else(|| QuoteError::MalformedResponse(format!("missing {}", field)))?;
        Self::parse_u64(field, &value)
    }
}

#[async_trait]
impl PoolProviderTrait for TinymanPoolProvider {
    async fn fetch_pool(
        &self,
        asset_1_id: u64,
        asset_2_id: u64,
    ) -> Result<PoolState, QuoteError> {
        // The listing keys pairs by descending asset id.
        let (high, low) = if asset_1_id > asset_2_id {
            (asset_1_id, asset_2_id)
        } else {
            (asset_2_id, asset_1_id)
        };
        let url = format!(
            "{}/pools/?asset_1={}&asset_2={}",
            self.base_url, high, low
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(QuoteError::Network)?
            .json::<PoolListResponse>()
            .await
            .map_err(|e| QuoteError::MalformedResponse(e.to_string()))?;

        let pool = response
            .results
            .into_iter()
            .next()
            .ok_or(QuoteError::NoPool(asset_1_id, asset_2_id))?;

        debug!("Resolved pool {} for pair {}/{}", pool.address, high, low);

        Ok(PoolState {
            asset_1_id: Self::parse_u64("asset_1.id", &pool.asset_1.id)?,
            asset_2_id: Self::parse_u64("asset_2.id", &pool.asset_2.id)?,
            asset_1_reserves: Self::parse_reserves(
                "current_asset_1_reserves",
                pool.current_asset_1_reserves,
            )?,
            asset_2_reserves: Self::parse_reserves(
                "current_asset_2_reserves",
                pool.current_asset_2_reserves,
            )?,
            address: pool.address,
        })
    }
}
