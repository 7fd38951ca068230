// Analyzer module: latest values, classification, narrative and the report.

pub mod classifier;
pub mod narrative;
pub mod report;
pub mod snapshot;

// Re-export the main Analyzer implementation for ease of use.
pub use classifier::{MacdSignal, RsiSignal, SignalSet, TrendSignal, VolumeSignal, classify};
pub use narrative::compose;
pub use report::{AnalysisReport, Analyzer, TrendAnalyzer};
pub use snapshot::{BollingerLatest, LatestSnapshot, MacdLatest};
