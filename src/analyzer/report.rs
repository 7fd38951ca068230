use crate::analyzer::classifier::{SignalSet, classify};
use crate::analyzer::narrative::compose;
use crate::analyzer::snapshot::LatestSnapshot;
use crate::config::IndicatorConfig;
use crate::model::{AnalysisError, MarketData, PipelineError, Stage};
use crate::series::SeriesBuffer;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Result of one analysis run for one asset.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    asset: String,
    latest: LatestSnapshot,
    signals: SignalSet,
    narrative: String,
    generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn latest(&self) -> &LatestSnapshot {
        &self.latest
    }

    pub fn signals(&self) -> &SignalSet {
        &self.signals
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

/// Trait defining the interface for a market analyzer.
pub trait Analyzer {
    fn analyze(&self, asset: &str, data: &MarketData) -> Result<AnalysisReport, PipelineError>;
}

/// Indicator-driven analyzer: snapshot, classify, narrate.
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    config: IndicatorConfig,
}

impl TrendAnalyzer {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Builds the latest-value snapshot; fails on empty or misaligned input.
    pub fn snapshot(&self, data: &MarketData) -> Result<LatestSnapshot, AnalysisError> {
        if data.is_empty() {
            return Err(AnalysisError::NoData);
        }
        if data.prices.len() != data.volumes.len() {
            return Err(AnalysisError::InvalidParameter(format!(
                "{} prices but {} volumes",
                data.prices.len(),
                data.volumes.len()
            )));
        }
        let prices = SeriesBuffer::from(data.prices.as_slice());
        let volumes = SeriesBuffer::from(data.volumes.as_slice());
        LatestSnapshot::extract(&prices, &volumes, &self.config)
    }
}

impl Analyzer for TrendAnalyzer {
    fn analyze(&self, asset: &str, data: &MarketData) -> Result<AnalysisReport, PipelineError> {
        let latest = self
            .snapshot(data)
            .map_err(|e| PipelineError::new(asset, Stage::Indicators, e))?;
        debug!("Snapshot for {}: {:?}", asset, latest);

        let signals = classify(&latest).map_err(|e| PipelineError::new(asset, Stage::Classify, e))?;
        let narrative = compose(&signals);

        Ok(AnalysisReport {
            asset: asset.to_string(),
            latest,
            signals,
            narrative,
            generated_at: Utc::now(),
        })
    }
}
