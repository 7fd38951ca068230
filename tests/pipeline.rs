//! End-to-end tests of the fetch → analyze → publish pipeline with stub collaborators.

use crypto_trend::analyzer::{AnalysisReport, TrendAnalyzer, TrendSignal, VolumeSignal};
use crypto_trend::config::IndicatorConfig;
use crypto_trend::fetcher::MarketDataSource;
use crypto_trend::model::{AnalysisError, FetchError, MarketData, NotifyError, PipelineError, Stage};
use crypto_trend::pipeline::{analyze_all, analyze_asset, publish_all};
use crypto_trend::reporter::ReportSink;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves canned data per asset; unknown assets fail with a 404.
struct StubSource {
    data: HashMap<String, MarketData>,
    calls: AtomicUsize,
}

impl StubSource {
    fn new(entries: Vec<(&str, MarketData)>) -> Self {
        Self {
            data: entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl MarketDataSource for StubSource {
    async fn fetch(&self, asset: &str, _days: u32) -> Result<MarketData, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.data.get(asset).cloned().ok_or(FetchError::Status(404))
    }
}

#[derive(Default)]
struct RecordingSink {
    published: Mutex<Vec<String>>,
    failed: Mutex<Vec<(String, Stage)>>,
}

#[async_trait::async_trait]
impl ReportSink for RecordingSink {
    async fn publish(&self, report: &AnalysisReport) -> Result<(), NotifyError> {
        self.published.lock().unwrap().push(report.asset().to_string());
        Ok(())
    }

    async fn publish_failure(&self, err: &PipelineError) -> Result<(), NotifyError> {
        self.failed.lock().unwrap().push((err.asset.clone(), err.stage));
        Err(NotifyError::Unreachable)
    }
}

fn trending(n: usize) -> MarketData {
    MarketData::new(
        (0..n).map(|i| 100.0 + i as f64).collect(),
        (0..n).map(|i| 1_000.0 + i as f64).collect(),
    )
}

#[tokio::test]
async fn ramp_prices_give_expected_short_sma() {
    let prices: Vec<f64> = (10..=20).map(f64::from).collect();
    let source = StubSource::new(vec![("ramp", MarketData::new(prices, vec![1.0; 11]))]);
    let cfg = IndicatorConfig {
        short_sma_period: 3,
        long_sma_period: 5,
        rsi_period: 3,
        macd_fast_period: 2,
        macd_slow_period: 4,
        macd_signal_period: 2,
        bollinger_period: 5,
        bollinger_multiplier: 2.0,
        volume_sma_period: 5,
    };

    let report = analyze_asset(&source, &TrendAnalyzer::new(cfg), "ramp", 30)
        .await
        .unwrap();
    assert_eq!(report.latest().short_sma, Some(19.0));
    assert_eq!(report.latest().long_sma, Some(18.0));
    assert_eq!(report.signals().trend, TrendSignal::Bullish);
}

#[tokio::test]
async fn constant_volume_is_weak() {
    let data = MarketData::new((0..10).map(|i| 1.0 + i as f64).collect(), vec![100.0; 10]);
    let source = StubSource::new(vec![("flatvol", data)]);
    let cfg = IndicatorConfig {
        short_sma_period: 2,
        long_sma_period: 4,
        rsi_period: 3,
        macd_fast_period: 2,
        macd_slow_period: 3,
        macd_signal_period: 2,
        bollinger_period: 4,
        bollinger_multiplier: 2.0,
        volume_sma_period: 5,
    };

    let report = analyze_asset(&source, &TrendAnalyzer::new(cfg), "flatvol", 30)
        .await
        .unwrap();
    assert_eq!(report.latest().volume_sma, Some(100.0));
    assert_eq!(report.signals().volume, VolumeSignal::Weak);
}

#[tokio::test]
async fn empty_series_is_no_data() {
    let source = StubSource::new(vec![("ghost", MarketData::default())]);
    let err = analyze_asset(&source, &TrendAnalyzer::default(), "ghost", 30)
        .await
        .unwrap_err();
    assert_eq!(err.asset, "ghost");
    assert_eq!(err.analysis_error(), Some(&AnalysisError::NoData));
}

#[tokio::test]
async fn one_failing_asset_does_not_abort_others() {
    let source = StubSource::new(vec![
        ("bitcoin", trending(60)),
        ("short", trending(10)),
        ("empty", MarketData::default()),
    ]);
    let assets: Vec<String> = ["bitcoin", "missing", "short", "empty"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let results = analyze_all(&source, &TrendAnalyzer::default(), &assets, 30).await;
    assert_eq!(results.len(), 4);
    assert_eq!(source.calls.load(Ordering::SeqCst), 4);

    assert_eq!(results[0].as_ref().unwrap().asset(), "bitcoin");

    let missing = results[1].as_ref().unwrap_err();
    assert_eq!(missing.stage, Stage::Fetch);
    assert!(missing.to_string().contains("missing"));

    let short = results[2].as_ref().unwrap_err();
    assert_eq!(short.stage, Stage::Classify);

    let empty = results[3].as_ref().unwrap_err();
    assert_eq!(empty.analysis_error(), Some(&AnalysisError::NoData));
}

#[tokio::test]
async fn publish_routes_reports_and_failures() {
    let source = StubSource::new(vec![("bitcoin", trending(60))]);
    let assets = vec!["bitcoin".to_string(), "missing".to_string()];
    let results = analyze_all(&source, &TrendAnalyzer::default(), &assets, 30).await;

    let sink = RecordingSink::default();
    publish_all(&sink, &results).await;

    assert_eq!(*sink.published.lock().unwrap(), vec!["bitcoin".to_string()]);
    assert_eq!(
        *sink.failed.lock().unwrap(),
        vec![("missing".to_string(), Stage::Fetch)]
    );
}

#[tokio::test]
async fn repeated_analysis_is_deterministic() {
    let source = StubSource::new(vec![("bitcoin", trending(60))]);
    let analyzer = TrendAnalyzer::default();
    let a = analyze_asset(&source, &analyzer, "bitcoin", 30).await.unwrap();
    let b = analyze_asset(&source, &analyzer, "bitcoin", 30).await.unwrap();
    assert_eq!(a.latest(), b.latest());
    assert_eq!(a.signals(), b.signals());
    assert_eq!(a.narrative(), b.narrative());
}
