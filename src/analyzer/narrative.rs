// Narrative composition: fixed templates, one sentence per signal category.
use crate::analyzer::classifier::{MacdSignal, RsiSignal, SignalSet, TrendSignal, VolumeSignal};

const PREFIX: &str = "Current situation: ";

fn trend_sentence(signal: TrendSignal) -> &'static str {
    match signal {
        TrendSignal::Bullish => {
            "The trend is bullish. Consider buying or holding the asset as prices might continue to rise."
        }
        TrendSignal::Bearish => {
            "The trend is bearish. Consider selling or waiting as prices may continue to fall."
        }
    }
}

fn rsi_sentence(signal: RsiSignal) -> &'static str {
    match signal {
        RsiSignal::Overbought => {
            "The asset is overbought, which might indicate a potential price correction or pullback. Caution is advised for new purchases."
        }
        RsiSignal::Oversold => {
            "The asset is oversold, which could be a signal for a potential price rebound. It might be a good opportunity to consider buying."
        }
        RsiSignal::Neutral => {
            "The asset is within normal RSI levels, suggesting stable conditions with no extreme movements expected soon."
        }
    }
}

fn macd_sentence(signal: MacdSignal) -> &'static str {
    match signal {
        MacdSignal::Bullish => {
            "The MACD line is above its signal line, pointing to strengthening upward momentum."
        }
        MacdSignal::Bearish => {
            "The MACD line is at or below its signal line, pointing to fading or downward momentum."
        }
    }
}

fn volume_sentence(signal: VolumeSignal) -> &'static str {
    match signal {
        VolumeSignal::Strong => {
            "Trading volume is above its recent average, so the current move has solid participation."
        }
        VolumeSignal::Weak => {
            "Trading volume is at or below its recent average, so the current move lacks conviction."
        }
    }
}

/// Explanation of a signal set in the order trend, RSI, MACD, volume.
pub fn compose(signals: &SignalSet) -> String {
    let sentences = [
        trend_sentence(signals.trend),
        rsi_sentence(signals.rsi),
        macd_sentence(signals.macd),
        volume_sentence(signals.volume),
    ];
    format!("{PREFIX}{}", sentences.join(" "))
}
