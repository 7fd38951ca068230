use crate::indicators::IndicatorSeries;
use crate::model::AnalysisError;
use crate::series::SeriesBuffer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BollingerPoint {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Bollinger Bands: SMA ± `multiplier` × population standard deviation.
///
/// Output length is `n - period + 1`.
pub fn bollinger_bands(
    series: &SeriesBuffer,
    period: usize,
    multiplier: f64,
) -> Result<IndicatorSeries<BollingerPoint>, AnalysisError> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(AnalysisError::InvalidParameter(format!(
            "bollinger multiplier must be a non-negative number, got {multiplier}"
        )));
    }

    let n = period as f64;
    Ok(series
        .window(period)?
        .map(|window| {
            let middle = window.iter().sum::<f64>() / n;
            let variance = window.iter().map(|v| (v - middle).powi(2)).sum::<f64>() / n;
            let spread = multiplier * variance.sqrt();
            BollingerPoint {
                upper: middle + spread,
                middle,
                lower: middle - spread,
            }
        })
        .collect())
}
