use async_trait::async_trait;

use super::assets_errors::AssetError;
use super::assets_model::AssetMetadata;

#[async_trait]
pub trait AssetMetadataProviderTrait: Send + Sync {
    /// Fetches the display name and decimal precision of an asset.
    async fn fetch_asset(&self, asset_id: u64) -> Result<AssetMetadata, AssetError>;
}
