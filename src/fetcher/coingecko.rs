use crate::fetcher::traits::MarketDataSource;
use crate::model::{FetchError, MarketData};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// `market_chart` payload: `[timestamp_ms, value]` pairs, oldest first.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    #[serde(default)]
    prices: Vec<(f64, f64)>,
    #[serde(default)]
    total_volumes: Vec<(f64, f64)>,
}

impl MarketChartResponse {
    fn into_market_data(self) -> MarketData {
        let last_timestamp = self
            .prices
            .last()
            .and_then(|(ts, _)| DateTime::<Utc>::from_timestamp_millis(*ts as i64));

        let mut prices: Vec<f64> = self.prices.into_iter().map(|(_, p)| p).collect();
        let mut volumes: Vec<f64> = self.total_volumes.into_iter().map(|(_, v)| v).collect();

        // The API occasionally returns one more price than volume; keep the common tail.
        if prices.len() != volumes.len() {
            warn!(
                "Price/volume length mismatch ({} vs {}), trimming to common tail",
                prices.len(),
                volumes.len()
            );
            let common = prices.len().min(volumes.len());
            prices.drain(..prices.len() - common);
            volumes.drain(..volumes.len() - common);
        }

        MarketData {
            prices,
            volumes,
            last_timestamp,
        }
    }
}

pub struct CoinGeckoSource {
    client: Client,
    base_url: String,
    vs_currency: String,
}

impl CoinGeckoSource {
    pub fn new(base_url: &str, vs_currency: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("crypto-trend/0.1")
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            vs_currency: vs_currency.to_string(),
        })
    }

    fn build_url(&self, asset: &str) -> String {
        format!("{}/coins/{}/market_chart", self.base_url, asset.to_lowercase())
    }
}

#[async_trait::async_trait]
impl MarketDataSource for CoinGeckoSource {
    async fn fetch(&self, asset: &str, days: u32) -> Result<MarketData, FetchError> {
        let url = self.build_url(asset);
        debug!("GET {} (days={})", url, days);

        let days = days.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("vs_currency", self.vs_currency.as_str()), ("days", days.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let chart: MarketChartResponse = response.json().await?;
        Ok(chart.into_market_data())
    }
}
