use crate::config::IndicatorConfig;
use crate::indicators::{self, IndicatorSeries};
use crate::model::AnalysisError;
use crate::series::SeriesBuffer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacdLatest {
    pub line: f64,
    pub signal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BollingerLatest {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Most recent value of every indicator. `None` means the history was too
/// short to compute it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatestSnapshot {
    pub price: Option<f64>,
    pub short_sma: Option<f64>,
    pub long_sma: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<MacdLatest>,
    pub bollinger: Option<BollingerLatest>,
    pub volume: Option<f64>,
    pub volume_sma: Option<f64>,
}

impl LatestSnapshot {
    /// Runs every indicator and keeps the tail value of each.
    pub fn extract(
        prices: &SeriesBuffer,
        volumes: &SeriesBuffer,
        cfg: &IndicatorConfig,
    ) -> Result<Self, AnalysisError> {
        let macd = latest(indicators::macd(
            prices,
            cfg.macd_fast_period,
            cfg.macd_slow_period,
            cfg.macd_signal_period,
        ))?;
        let bollinger = latest(indicators::bollinger_bands(
            prices,
            cfg.bollinger_period,
            cfg.bollinger_multiplier,
        ))?;

        Ok(Self {
            price: prices.last().ok(),
            short_sma: latest(indicators::sma(prices, cfg.short_sma_period))?,
            long_sma: latest(indicators::sma(prices, cfg.long_sma_period))?,
            rsi: latest(indicators::rsi(prices, cfg.rsi_period))?,
            macd: macd.map(|p| MacdLatest {
                line: p.line,
                signal: p.signal,
            }),
            bollinger: bollinger.map(|p| BollingerLatest {
                upper: p.upper,
                middle: p.middle,
                lower: p.lower,
            }),
            volume: volumes.last().ok(),
            volume_sma: latest(indicators::volume_sma(volumes, cfg.volume_sma_period))?,
        })
    }
}

/// Tail of an indicator series. Lack of history is not an error here, the
/// classifier decides whether the missing value matters.
fn latest<T: Copy>(
    series: Result<IndicatorSeries<T>, AnalysisError>,
) -> Result<Option<T>, AnalysisError> {
    match series {
        Ok(values) => Ok(values.last().copied()),
        Err(AnalysisError::InsufficientData { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
