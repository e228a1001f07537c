pub mod assets_errors;
pub mod assets_model;
pub mod assets_traits;

pub use assets_errors::AssetError;
pub use assets_model::{scale_down, AssetMetadata};
pub use assets_traits::AssetMetadataProviderTrait;
