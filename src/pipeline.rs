// Per-asset orchestration: fetch, analyze, publish.
use crate::analyzer::{AnalysisReport, Analyzer};
use crate::fetcher::MarketDataSource;
use crate::model::{PipelineError, Stage};
use crate::reporter::ReportSink;
use futures::future::join_all;
use tracing::{info, warn};

pub type AssetResult = Result<AnalysisReport, PipelineError>;

/// Fetches history for one asset and runs the analyzer over it.
pub async fn analyze_asset<S, A>(source: &S, analyzer: &A, asset: &str, days: u32) -> AssetResult
where
    S: MarketDataSource + ?Sized,
    A: Analyzer + ?Sized,
{
    info!("Processing asset: {}", asset);

    let data = source
        .fetch(asset, days)
        .await
        .map_err(|e| PipelineError::new(asset, Stage::Fetch, e))?;
    info!("Fetched {} data points for {}", data.prices.len(), asset);

    let report = analyzer.analyze(asset, &data)?;
    info!("Finished asset: {}", asset);
    Ok(report)
}

/// Analyzes every asset concurrently. Results keep the input order and one
/// asset's failure does not affect the others.
pub async fn analyze_all<S, A>(
    source: &S,
    analyzer: &A,
    assets: &[String],
    days: u32,
) -> Vec<AssetResult>
where
    S: MarketDataSource + ?Sized,
    A: Analyzer + ?Sized,
{
    let tasks = assets
        .iter()
        .map(|asset| analyze_asset(source, analyzer, asset, days));
    join_all(tasks).await
}

/// Hands each result to the sink; sink errors are logged and dropped.
pub async fn publish_all<K: ReportSink + ?Sized>(sink: &K, results: &[AssetResult]) {
    for result in results {
        let outcome = match result {
            Ok(report) => sink.publish(report).await,
            Err(err) => {
                warn!("Analysis failed: {}", err);
                sink.publish_failure(err).await
            }
        };
        if let Err(e) = outcome {
            warn!("Report delivery failed: {}", e);
        }
    }
}
