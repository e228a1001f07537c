pub mod portfolio_model;
pub mod portfolio_service;
pub mod valuation_service;

#[cfg(test)]
mod valuation_service_tests;

pub use portfolio_model::{PortfolioSnapshot, PricedAsset};
pub use portfolio_service::PortfolioService;
pub use valuation_service::{ValuationService, ValuationServiceTrait};
