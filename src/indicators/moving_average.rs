use crate::indicators::IndicatorSeries;
use crate::model::AnalysisError;
use crate::series::SeriesBuffer;

/// Simple moving average over each trailing window of `period` values.
///
/// Output length is `n - period + 1` (alignment offset `period - 1`).
pub fn sma(series: &SeriesBuffer, period: usize) -> Result<IndicatorSeries, AnalysisError> {
    Ok(series
        .window(period)?
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect())
}

/// Exponential moving average seeded with the SMA of the first `period` values.
///
/// `ema[t] = value[t] * k + ema[t-1] * (1 - k)` with `k = 2 / (period + 1)`.
/// Output length is `n - period + 1`, the first element being the seed.
pub fn ema(series: &SeriesBuffer, period: usize) -> Result<IndicatorSeries, AnalysisError> {
    series.require(period)?;
    let values = series.values();
    let k = 2.0 / (period as f64 + 1.0);

    let seed = values[..period].iter().sum::<f64>() / period as f64;
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);

    let mut prev = seed;
    for &value in &values[period..] {
        prev = value * k + prev * (1.0 - k);
        out.push(prev);
    }
    Ok(out)
}

/// SMA of a volume series; same contract as [`sma`].
pub fn volume_sma(volumes: &SeriesBuffer, period: usize) -> Result<IndicatorSeries, AnalysisError> {
    sma(volumes, period)
}
