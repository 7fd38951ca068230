// Indicator library: pure functions over a SeriesBuffer.
//
// Every function returns a series aligned to the tail of its input: the last
// output value always corresponds to the last input value, and nothing is
// emitted for positions without enough history.

pub mod bollinger;
pub mod macd;
pub mod moving_average;
pub mod rsi;

pub use bollinger::{BollingerPoint, bollinger_bands};
pub use macd::{MacdPoint, macd};
pub use moving_average::{ema, sma, volume_sma};
pub use rsi::rsi;

/// Output of an indicator, newest value last.
pub type IndicatorSeries<T = f64> = Vec<T>;
