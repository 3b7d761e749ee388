use henrikval_api::HenrikApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HenrikDev API error: {0}")]
    Api(#[from] HenrikApiError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
