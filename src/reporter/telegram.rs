// reporter/telegram.rs

use crate::analyzer::AnalysisReport;
use crate::model::{NotifyError, PipelineError};
use crate::reporter::format_latest;
use crate::reporter::traits::ReportSink;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

pub struct TelegramSink {
    bot_token: String,
    chat_id: i64,
    client: Client,
}

impl TelegramSink {
    pub fn new(bot_token: String, chat_id: i64) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| NotifyError::Api(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            bot_token,
            chat_id,
            client,
        })
    }

    /// Sends a plain text message via `sendMessage`.
    pub async fn send_text(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let response = match timeout(
            Duration::from_secs(10),
            self.client
                .post(&url)
                .form(&[("chat_id", self.chat_id.to_string()), ("text", text.to_string())])
                .send(),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                warn!("❌ Telegram send() failed: {:?}", e);
                return Err(NotifyError::Api(format!("Send failed: {}", e)));
            }
            Err(_) => {
                warn!("⏳ Telegram send() timed out");
                return Err(NotifyError::Unreachable);
            }
        };
        let status = response.status();
        let body = response.text().await.unwrap_or_else(|_| "unknown".into());
        if !status.is_success() {
            warn!("❌ Telegram API responded [{}]: {}", status, body);
            return Err(NotifyError::Api(format!("status {}", status)));
        }
        info!("✅ Telegram response [{}]", status);
        Ok(())
    }
}

fn report_message(report: &AnalysisReport) -> String {
    let mut message = format!("📈 {}\n\n", report.asset());
    for line in format_latest(report) {
        message.push_str(&line);
        message.push('\n');
    }
    message.push('\n');
    message.push_str(report.narrative());
    message
}

#[async_trait::async_trait]
impl ReportSink for TelegramSink {
    async fn publish(&self, report: &AnalysisReport) -> Result<(), NotifyError> {
        self.send_text(&report_message(report)).await
    }

    async fn publish_failure(&self, err: &PipelineError) -> Result<(), NotifyError> {
        self.send_text(&format!("⚠️ {}", err)).await
    }
}
