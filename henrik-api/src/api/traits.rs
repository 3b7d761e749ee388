use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error as _},
};
use serde_json::{Map, Value};

use crate::{
    diagnostics::{CallEvent, DiagnosticSink},
    types::{HenrikApiError, HenrikApiResponse},
};

use super::endpoint::ApiCall;

/// Trait implemented by structures capable of performing raw HTTP requests to the HenrikDev API.
#[async_trait]
pub trait ApiRequest: Send + Sync + Debug {
    /// Scheme and host every endpoint path is appended to.
    fn base_url(&self) -> &str;

    fn diagnostics(&self) -> &dyn DiagnosticSink;

    /// Issue a GET on `url` and return the raw body of a `200 OK` response.
    async fn request(&self, url: String) -> HenrikApiResponse<Bytes>;

    /// Called once per call after decoding.
    fn record_outcome(&self, _success: bool) {}
}

/// Run `call` against `api` and decode its body, reporting every step to the
/// diagnostic sink.
pub async fn fetch<C, T>(api: &C, call: ApiCall<'_>) -> HenrikApiResponse<T>
where
    C: ApiRequest + ?Sized,
    T: DeserializeOwned + Send,
{
    let url = call.url(api.base_url());
    api.diagnostics().record(&CallEvent::Started {
        call: &call,
        url: &url,
    });

    let result = api.request(url).await.and_then(|raw| decode(&raw));

    api.record_outcome(result.is_ok());
    api.diagnostics().record(&CallEvent::outcome(&call, &result));
    result
}

/// Decode a raw body, treating an empty or `null` document as missing.
///
/// Only a JSON object is accepted at the top level: serde's derived structs
/// would otherwise also read a positional array.
pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> HenrikApiResponse<T> {
    let raw = raw.trim_ascii();
    if raw.is_empty() {
        return Err(HenrikApiError::EmptyBody);
    }

    match serde_json::from_slice(raw).map_err(HenrikApiError::Serde)? {
        Value::Null => Err(HenrikApiError::EmptyBody),
        value @ Value::Object(_) => serde_json::from_value(value).map_err(HenrikApiError::Serde),
        other => Err(HenrikApiError::Serde(serde_json::Error::custom(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        )))),
    }
}

/// `deserialize_with` helper reading a nested struct from a JSON object only.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    serde_json::from_value(Value::Object(map)).map_err(D::Error::custom)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
