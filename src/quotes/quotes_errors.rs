use thiserror::Error;

/// Failure modes of the pool-quote path.
///
/// Callers of the valuation engine never see these: the resolver maps every
/// variant to a zero value. They stay distinguishable for anyone driving the
/// typed path directly.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("No pool pairs assets {0} and {1}")]
    NoPool(u64, u64),

    #[error("Pool {0} has no liquidity")]
    NoLiquidity(String),

    #[error("Asset {0} is not part of the pool")]
    AssetNotInPool(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
