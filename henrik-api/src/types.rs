use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HenrikApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(StatusCode),

    #[error("Decoding raw response error: {0}")]
    Serde(serde_json::Error),

    #[error("The response body was empty")]
    EmptyBody,
}

impl HenrikApiError {
    /// HTTP status of the response when the call was rejected by the API.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            Self::Reqwest(err) => err.status(),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown region: {0}")]
pub struct UnknownRegion(pub String);

/// A call to the HenrikDev API can either result in a success with the success type or fail with a [`HenrikApiError`].
pub type HenrikApiResponse<T> = Result<T, HenrikApiError>;
