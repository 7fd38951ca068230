use crypto_trend::analyzer::TrendAnalyzer;
use crypto_trend::config::{AppConfig, OutputKind, load_config};
use crypto_trend::fetcher::CoinGeckoSource;
use crypto_trend::pipeline::{analyze_all, publish_all};
use crypto_trend::reporter::{JsonSink, LogSink, ReportSink, TelegramSink};
use tokio::time::{Duration, sleep};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", config_path, e);
            return;
        }
    };

    let source = match CoinGeckoSource::new(
        &config.api_base_url,
        &config.vs_currency,
        config.request_timeout_seconds,
    ) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize data source: {}", e);
            return;
        }
    };
    let analyzer = TrendAnalyzer::new(config.indicators.clone());

    let sink: Box<dyn ReportSink> = match build_sink(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize output: {}", e);
            return;
        }
    };

    loop {
        info!("Assets to analyze: {}", config.assets.len());
        let results = analyze_all(&source, &analyzer, &config.assets, config.lookback_days).await;
        let failed = results.iter().filter(|r| r.is_err()).count();
        publish_all(sink.as_ref(), &results).await;
        info!("Pass complete: {} ok, {} failed", results.len() - failed, failed);

        let Some(interval) = config.check_interval_seconds else {
            break;
        };

        info!("Waiting {}s for the next pass...", interval);
        tokio::select! {
            _ = sleep(Duration::from_secs(interval)) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down.");
                break;
            }
        }
    }
}

fn build_sink(config: &AppConfig) -> Result<Box<dyn ReportSink>, crypto_trend::model::NotifyError> {
    Ok(match config.output {
        OutputKind::Log => Box::new(LogSink),
        OutputKind::Json => Box::new(JsonSink),
        OutputKind::Telegram => {
            // validate() guarantees both are present for telegram output
            let token = config.telegram_bot_token.clone().unwrap_or_default();
            let chat_id = config.telegram_chat_id.unwrap_or_default();
            Box::new(TelegramSink::new(token, chat_id)?)
        }
    })
}
