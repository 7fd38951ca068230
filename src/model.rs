// Core structs: MarketData, error types
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Raw price and volume history for one asset, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MarketData {
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
    pub last_timestamp: Option<DateTime<Utc>>,
}

impl MarketData {
    pub fn new(prices: Vec<f64>, volumes: Vec<f64>) -> Self {
        Self {
            prices,
            volumes,
            last_timestamp: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("insufficient data: need {required} values, have {available}")]
    InsufficientData { required: usize, available: usize },
    #[error("empty input series")]
    EmptyInput,
    #[error("no data returned for asset")]
    NoData,
    #[error("missing indicator value: {0}")]
    MissingField(&'static str),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Http(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("api error: {0}")]
    Api(String),
    #[error("endpoint unreachable")]
    Unreachable,
}

/// Pipeline step an asset failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Indicators,
    Classify,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Indicators => "indicators",
            Stage::Classify => "classify",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Terminal failure of one asset's analysis.
#[derive(Debug, Error)]
#[error("{asset}: {stage} stage failed: {source}")]
pub struct PipelineError {
    pub asset: String,
    pub stage: Stage,
    #[source]
    pub source: StageError,
}

impl PipelineError {
    pub fn new(asset: &str, stage: Stage, source: impl Into<StageError>) -> Self {
        Self {
            asset: asset.to_string(),
            stage,
            source: source.into(),
        }
    }

    /// The analysis error behind this failure, if it was not a fetch error.
    pub fn analysis_error(&self) -> Option<&AnalysisError> {
        match &self.source {
            StageError::Analysis(e) => Some(e),
            StageError::Fetch(_) => None,
        }
    }
}
