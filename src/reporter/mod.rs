pub mod console;
pub mod telegram;
pub mod traits;

pub use console::{JsonSink, LogSink};
pub use telegram::TelegramSink;
pub use traits::ReportSink;

/// Lines shown for a report, shared by the text sinks.
pub(crate) fn format_latest(report: &crate::analyzer::AnalysisReport) -> Vec<String> {
    fn fmt(value: Option<f64>) -> String {
        value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"))
    }

    let latest = report.latest();
    vec![
        format!("Price         | {}", fmt(latest.price)),
        format!("Short SMA     | {}", fmt(latest.short_sma)),
        format!("Long SMA      | {}", fmt(latest.long_sma)),
        format!("RSI           | {}", fmt(latest.rsi)),
        format!("MACD Line     | {}", fmt(latest.macd.map(|m| m.line))),
        format!("MACD Signal   | {}", fmt(latest.macd.map(|m| m.signal))),
        format!("BB Upper      | {}", fmt(latest.bollinger.map(|b| b.upper))),
        format!("BB Lower      | {}", fmt(latest.bollinger.map(|b| b.lower))),
        format!("Volume        | {}", fmt(latest.volume)),
        format!("Volume SMA    | {}", fmt(latest.volume_sma)),
    ]
}
