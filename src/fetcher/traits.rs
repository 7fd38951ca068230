use crate::model::{FetchError, MarketData};

/// Source of price/volume history for an asset.
#[async_trait::async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch(&self, asset: &str, days: u32) -> Result<MarketData, FetchError>;
}
