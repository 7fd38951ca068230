use serde::Deserialize;
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Indicator periods used for every asset.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct IndicatorConfig {
    pub short_sma_period: usize,
    pub long_sma_period: usize,
    pub rsi_period: usize,
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,
    pub bollinger_period: usize,
    pub bollinger_multiplier: f64,
    pub volume_sma_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            short_sma_period: 5,
            long_sma_period: 20,
            rsi_period: 14,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bollinger_period: 20,
            bollinger_multiplier: 2.0,
            volume_sma_period: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Log,
    Json,
    Telegram,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub assets: Vec<String>,
    pub lookback_days: u32,
    pub vs_currency: String,
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub check_interval_seconds: Option<u64>,
    pub output: OutputKind,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<i64>,
    pub indicators: IndicatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets: vec!["bitcoin".into(), "ethereum".into(), "solana".into()],
            lookback_days: 30,
            vs_currency: "usd".into(),
            api_base_url: "https://api.coingecko.com/api/v3".into(),
            request_timeout_seconds: 10,
            check_interval_seconds: None,
            output: OutputKind::Log,
            telegram_bot_token: None,
            telegram_chat_id: None,
            indicators: IndicatorConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assets.is_empty() {
            return Err(ConfigError::Invalid("no assets configured".into()));
        }
        if self.lookback_days == 0 {
            return Err(ConfigError::Invalid("lookback_days must be at least 1".into()));
        }
        if self.output == OutputKind::Telegram
            && (self.telegram_bot_token.is_none() || self.telegram_chat_id.is_none())
        {
            return Err(ConfigError::Invalid(
                "telegram output needs telegram_bot_token and telegram_chat_id".into(),
            ));
        }

        let ind = &self.indicators;
        let periods = [
            ("short_sma_period", ind.short_sma_period),
            ("long_sma_period", ind.long_sma_period),
            ("rsi_period", ind.rsi_period),
            ("macd_fast_period", ind.macd_fast_period),
            ("macd_slow_period", ind.macd_slow_period),
            ("macd_signal_period", ind.macd_signal_period),
            ("bollinger_period", ind.bollinger_period),
            ("volume_sma_period", ind.volume_sma_period),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, p)| *p == 0) {
            return Err(ConfigError::Invalid(format!("{name} must be at least 1")));
        }
        if !ind.bollinger_multiplier.is_finite() || ind.bollinger_multiplier < 0.0 {
            return Err(ConfigError::Invalid(
                "bollinger_multiplier must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.assets, vec!["bitcoin", "ethereum", "solana"]);
        assert_eq!(config.lookback_days, 30);
        assert_eq!(config.output, OutputKind::Log);
        assert_eq!(config.indicators, IndicatorConfig::default());
    }

    #[test]
    fn partial_indicator_override() {
        let config = parse_config(r#"{"indicators": {"rsi_period": 7}}"#).unwrap();
        assert_eq!(config.indicators.rsi_period, 7);
        assert_eq!(config.indicators.long_sma_period, 20);
    }

    #[test]
    fn zero_lookback_is_invalid() {
        assert!(matches!(
            parse_config(r#"{"lookback_days": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn zero_period_is_invalid() {
        let err = parse_config(r#"{"indicators": {"macd_slow_period": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("macd_slow_period"));
    }

    #[test]
    fn telegram_output_needs_credentials() {
        assert!(matches!(
            parse_config(r#"{"output": "telegram"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(parse_config(
            r#"{"output": "telegram", "telegram_bot_token": "t", "telegram_chat_id": 1}"#
        )
        .is_ok());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(parse_config("{"), Err(ConfigError::Parse(_))));
    }
}
