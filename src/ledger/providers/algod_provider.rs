use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::assets::assets_errors::AssetError;
use crate::assets::assets_model::AssetMetadata;
use crate::assets::assets_traits::AssetMetadataProviderTrait;
use crate::constants::ALGO_ASSET_ID;
use crate::ledger::ledger_errors::LedgerError;
use crate::ledger::ledger_model::Holding;
use crate::ledger::ledger_traits::LedgerReaderTrait;

pub const ALGOD_MAINNET_URL: &str = "https://mainnet-api.algonode.cloud";

const ALGOD_TOKEN_HEADER: &str = "X-Algod-API-Token";

#[derive(Deserialize, Debug)]
struct AccountResponse {
    amount: u64,
    #[serde(default)]
    assets: Vec<AssetHoldingResponse>,
}

#[derive(Deserialize, Debug)]
struct AssetHoldingResponse {
    #[serde(rename = "asset-id")]
    asset_id: u64,
    amount: u64,
}

#[derive(Deserialize, Debug)]
struct AssetResponse {
    params: AssetParamsResponse,
}

#[derive(Deserialize, Debug)]
struct AssetParamsResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "unit-name")]
    unit_name: Option<String>,
    decimals: u32,
}

/// Client for the algod v2 REST API, serving both the account balances and
/// the per-asset metadata the valuator needs.
pub struct AlgodClient {
    client: Client,
    base_url: String,
    token: String,
}

impl AlgodClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        AlgodClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Client against the public mainnet endpoint, which accepts an empty
    /// API token.
    pub fn mainnet() -> Self {
        Self::new(ALGOD_MAINNET_URL, "")
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LedgerError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if !self.token.is_empty() {
            request = request.header(ALGOD_TOKEN_HEADER, &self.token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // algod wraps errors as {"message": "..."}
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v["message"].as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(match status {
                StatusCode::BAD_REQUEST => LedgerError::InvalidAddress(message),
                _ => LedgerError::Node {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LedgerError::Parsing(e.to_string()))
    }
}

#[async_trait]
impl LedgerReaderTrait for AlgodClient {
    async fn account_holdings(&self, address: &str) -> Result<Vec<Holding>, LedgerError> {
        let info: AccountResponse = self.fetch_json(&format!("/v2/accounts/{}", address)).await?;

        let mut holdings = Vec::with_capacity(info.assets.len() + 1);
        holdings.push(Holding::new(ALGO_ASSET_ID, info.amount));
        holdings.extend(
            info.assets
                .iter()
                .filter(|a| a.amount > 0)
                .map(|a| Holding::new(a.asset_id, a.amount)),
        );

        debug!("Fetched {} holdings for {}", holdings.len(), address);
        Ok(holdings)
    }
}

#[async_trait]
impl AssetMetadataProviderTrait for AlgodClient {
    async fn fetch_asset(&self, asset_id: u64) -> Result<AssetMetadata, AssetError> {
        // The node has no asset record for the native balance.
        if asset_id == ALGO_ASSET_ID {
            return Ok(AssetMetadata::native());
        }

        let asset: AssetResponse = self
            .fetch_json(&format!("/v2/assets/{}", asset_id))
            .await
            .map_err(|e| match e {
                LedgerError::Node { status: 404, .. } => AssetError::NotFound(asset_id),
                other => AssetError::Ledger(other),
            })?;

        Ok(AssetMetadata {
            id: asset_id,
            name: asset
                .params
                .name
                .unwrap_or_else(|| format!("ASA #{}", asset_id)),
            unit_name: asset.params.unit_name,
            decimals: asset.params.decimals,
        })
    }
}
