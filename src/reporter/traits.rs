use crate::analyzer::AnalysisReport;
use crate::model::{NotifyError, PipelineError};

/// Destination for finished analyses. Failures are reported by the caller,
/// never fed back into analysis.
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    async fn publish(&self, report: &AnalysisReport) -> Result<(), NotifyError>;

    async fn publish_failure(&self, error: &PipelineError) -> Result<(), NotifyError>;
}
