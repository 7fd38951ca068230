use crate::analyzer::snapshot::LatestSnapshot;
use crate::model::AnalysisError;
use serde::Serialize;

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendSignal {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MacdSignal {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeSignal {
    Strong,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SignalSet {
    pub trend: TrendSignal,
    pub rsi: RsiSignal,
    pub macd: MacdSignal,
    pub volume: VolumeSignal,
}

/// Maps the latest indicator values to discrete signals.
///
/// All comparisons are strict, so ties fall to Bearish / Neutral / Weak.
pub fn classify(latest: &LatestSnapshot) -> Result<SignalSet, AnalysisError> {
    let short_sma = require(latest.short_sma, "short_sma")?;
    let long_sma = require(latest.long_sma, "long_sma")?;
    let rsi = require(latest.rsi, "rsi")?;
    let macd = require(latest.macd, "macd")?;
    let volume = require(latest.volume, "volume")?;
    let volume_sma = require(latest.volume_sma, "volume_sma")?;

    Ok(SignalSet {
        trend: if short_sma > long_sma {
            TrendSignal::Bullish
        } else {
            TrendSignal::Bearish
        },
        rsi: if rsi > RSI_OVERBOUGHT {
            RsiSignal::Overbought
        } else if rsi < RSI_OVERSOLD {
            RsiSignal::Oversold
        } else {
            RsiSignal::Neutral
        },
        macd: if macd.line > macd.signal {
            MacdSignal::Bullish
        } else {
            MacdSignal::Bearish
        },
        volume: if volume > volume_sma {
            VolumeSignal::Strong
        } else {
            VolumeSignal::Weak
        },
    })
}

fn require<T>(value: Option<T>, name: &'static str) -> Result<T, AnalysisError> {
    value.ok_or(AnalysisError::MissingField(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::snapshot::MacdLatest;

    fn snapshot() -> LatestSnapshot {
        LatestSnapshot {
            price: Some(100.0),
            short_sma: Some(101.0),
            long_sma: Some(99.0),
            rsi: Some(50.0),
            macd: Some(MacdLatest {
                line: 1.0,
                signal: 0.5,
            }),
            bollinger: None,
            volume: Some(120.0),
            volume_sma: Some(100.0),
        }
    }

    #[test]
    fn bullish_snapshot() {
        let signals = classify(&snapshot()).unwrap();
        assert_eq!(
            signals,
            SignalSet {
                trend: TrendSignal::Bullish,
                rsi: RsiSignal::Neutral,
                macd: MacdSignal::Bullish,
                volume: VolumeSignal::Strong,
            }
        );
    }

    #[test]
    fn ties_resolve_to_bearish_and_weak() {
        let snap = LatestSnapshot {
            short_sma: Some(99.0),
            macd: Some(MacdLatest {
                line: 0.5,
                signal: 0.5,
            }),
            volume: Some(100.0),
            ..snapshot()
        };
        let signals = classify(&snap).unwrap();
        assert_eq!(signals.trend, TrendSignal::Bearish);
        assert_eq!(signals.macd, MacdSignal::Bearish);
        assert_eq!(signals.volume, VolumeSignal::Weak);
    }

    #[test]
    fn rsi_boundaries_are_neutral() {
        for (rsi, expected) in [
            (70.0, RsiSignal::Neutral),
            (30.0, RsiSignal::Neutral),
            (70.01, RsiSignal::Overbought),
            (29.99, RsiSignal::Oversold),
            (100.0, RsiSignal::Overbought),
            (0.0, RsiSignal::Oversold),
        ] {
            let snap = LatestSnapshot {
                rsi: Some(rsi),
                ..snapshot()
            };
            assert_eq!(classify(&snap).unwrap().rsi, expected, "rsi {rsi}");
        }
    }

    #[test]
    fn missing_field_is_named() {
        let snap = LatestSnapshot {
            rsi: None,
            ..snapshot()
        };
        assert_eq!(classify(&snap), Err(AnalysisError::MissingField("rsi")));

        assert_eq!(
            classify(&LatestSnapshot::default()),
            Err(AnalysisError::MissingField("short_sma"))
        );
    }

    #[test]
    fn bollinger_is_not_required() {
        assert!(snapshot().bollinger.is_none());
        assert!(classify(&snapshot()).is_ok());
    }

    #[test]
    fn equal_snapshots_classify_equally() {
        let a = snapshot();
        let b = a.clone();
        assert_eq!(classify(&a), classify(&b));
    }
}
