use crate::analyzer::AnalysisReport;
use crate::model::{NotifyError, PipelineError};
use crate::reporter::format_latest;
use crate::reporter::traits::ReportSink;
use tracing::{error, info};

/// Writes reports to the log as a small table plus the narrative.
pub struct LogSink;

#[async_trait::async_trait]
impl ReportSink for LogSink {
    async fn publish(&self, report: &AnalysisReport) -> Result<(), NotifyError> {
        info!("📊 {} ({})", report.asset(), report.generated_at().to_rfc3339());
        for line in format_latest(report) {
            info!("  {}", line);
        }
        info!("{}", report.narrative());
        Ok(())
    }

    async fn publish_failure(&self, err: &PipelineError) -> Result<(), NotifyError> {
        error!("❌ {}", err);
        Ok(())
    }
}

/// Prints each report as pretty JSON on stdout.
pub struct JsonSink;

#[async_trait::async_trait]
impl ReportSink for JsonSink {
    async fn publish(&self, report: &AnalysisReport) -> Result<(), NotifyError> {
        let json = serde_json::to_string_pretty(report).map_err(|e| NotifyError::Api(e.to_string()))?;
        println!("{json}");
        Ok(())
    }

    async fn publish_failure(&self, err: &PipelineError) -> Result<(), NotifyError> {
        let json = serde_json::json!({
            "asset": err.asset,
            "stage": err.stage.to_string(),
            "error": err.source.to_string(),
        });
        println!("{json}");
        Ok(())
    }
}
