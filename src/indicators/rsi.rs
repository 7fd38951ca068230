use crate::indicators::IndicatorSeries;
use crate::model::AnalysisError;
use crate::series::SeriesBuffer;

/// Relative Strength Index with Wilder smoothing.
///
/// The first average gain/loss is the plain mean of the first `period` deltas;
/// each later average is `(prev * (period - 1) + current) / period`.
/// RSI is 100 when the average loss is zero (a flat window counts as no loss)
/// and 0 when only losses occurred.
///
/// Needs `period + 1` values. Output length is `n - period`.
pub fn rsi(series: &SeriesBuffer, period: usize) -> Result<IndicatorSeries, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::InvalidParameter(
            "rsi period must be at least 1".into(),
        ));
    }
    series.require(period + 1)?;

    let (gains, losses): (Vec<f64>, Vec<f64>) = series
        .window(2)?
        .map(|w| {
            let delta = w[1] - w[0];
            (delta.max(0.0), (-delta).max(0.0))
        })
        .unzip();

    let p = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / p;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / p;

    let mut out = Vec::with_capacity(gains.len() - period + 1);
    out.push(rsi_value(avg_gain, avg_loss));

    for (gain, loss) in gains[period..].iter().zip(&losses[period..]) {
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
        out.push(rsi_value(avg_gain, avg_loss));
    }
    Ok(out)
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    if avg_gain == 0.0 {
        return 0.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
