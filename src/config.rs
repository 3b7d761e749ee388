use std::env;
use std::time::Duration;

use henrikval_api::DEFAULT_BASE_URL;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub henrik_api_key: String,
    pub base_url: String,
    pub metrics_log_interval: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let henrik_api_key = lookup("HENRIK_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Config("HENRIK_API_KEY must be set".into()))?;

        let base_url = lookup("HENRIK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let metrics_log_interval = lookup("METRICS_LOG_INTERVAL_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            henrik_api_key,
            base_url,
            metrics_log_interval,
        })
    }
}
