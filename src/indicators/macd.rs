use crate::indicators::IndicatorSeries;
use crate::indicators::moving_average::ema;
use crate::model::AnalysisError;
use crate::series::SeriesBuffer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacdPoint {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Moving Average Convergence Divergence.
///
/// `line = EMA(fast) - EMA(slow)` over the common tail of both EMAs,
/// `signal = EMA(signal_period)` of the line, `histogram = line - signal`.
/// Output is aligned to the signal series: for `fast <= slow` its length is
/// `n - slow - signal_period + 2`.
pub fn macd(
    series: &SeriesBuffer,
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Result<IndicatorSeries<MacdPoint>, AnalysisError> {
    let fast_ema = ema(series, fast)?;
    let slow_ema = ema(series, slow)?;

    let common = fast_ema.len().min(slow_ema.len());
    let line: Vec<f64> = fast_ema[fast_ema.len() - common..]
        .iter()
        .zip(&slow_ema[slow_ema.len() - common..])
        .map(|(f, s)| f - s)
        .collect();

    let line = SeriesBuffer::new(line);
    let signal = ema(&line, signal_period).map_err(|e| match e {
        // Report shortfall in terms of the input series, not the derived line.
        AnalysisError::InsufficientData { .. } => AnalysisError::InsufficientData {
            required: fast.max(slow) + signal_period - 1,
            available: series.len(),
        },
        other => other,
    })?;

    let line_tail = &line.values()[line.len() - signal.len()..];
    Ok(line_tail
        .iter()
        .zip(&signal)
        .map(|(&line, &signal)| MacdPoint {
            line,
            signal,
            histogram: line - signal,
        })
        .collect())
}
