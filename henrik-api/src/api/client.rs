use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{StatusCode, header::AUTHORIZATION, redirect};
use tokio::task::JoinHandle;

use crate::{
    diagnostics::{DiagnosticSink, TracingSink},
    types::{HenrikApiError, HenrikApiResponse},
};

use super::{
    HenrikApiFull, match_v4::MatchApi, metrics::RequestMetrics, mmr_history::MmrHistoryApi,
    premier::PremierApi, traits::ApiRequest,
};

pub use super::endpoint::DEFAULT_BASE_URL;

/// HenrikDev API client implementing every supported endpoint.
///
/// Cheap to share behind an [`Arc`]: it only holds the immutable key, the
/// transport and atomic counters.
#[derive(Debug)]
pub struct HenrikApiClient {
    client: reqwest::Client,
    /// HenrikDev API key, sent verbatim as `Authorization`
    key: String,
    base_url: String,
    diagnostics: Arc<dyn DiagnosticSink>,
    metrics: Arc<RequestMetrics>,
}

impl HenrikApiClient {
    /// Create a client with a default transport.
    ///
    /// Redirects are not followed so that a `3xx` surfaces as a rejected call.
    pub fn new(api_key: impl Into<String>) -> HenrikApiResponse<Self> {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .user_agent(concat!("henrikval/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(api_key, client))
    }

    /// Create a client on top of an already configured transport.
    pub fn with_client(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            diagnostics: Arc::new(TracingSink),
            metrics: RequestMetrics::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn metrics(&self) -> &Arc<RequestMetrics> {
        &self.metrics
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self, every: Duration) -> JoinHandle<()> {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop(every).await })
    }
}

#[async_trait]
impl ApiRequest for HenrikApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn diagnostics(&self) -> &dyn DiagnosticSink {
        self.diagnostics.as_ref()
    }

    async fn request(&self, url: String) -> HenrikApiResponse<Bytes> {
        self.metrics.inc();

        let res = self
            .client
            .get(url)
            .header(AUTHORIZATION, &self.key)
            .send()
            .await
            .map_err(HenrikApiError::Reqwest)?;
        match res.status() {
            StatusCode::OK => res.bytes().await.map_err(HenrikApiError::Reqwest),
            status => Err(HenrikApiError::Status(status)),
        }
    }

    fn record_outcome(&self, success: bool) {
        self.metrics.record(success);
    }
}

impl MmrHistoryApi for HenrikApiClient {}
impl MatchApi for HenrikApiClient {}
impl PremierApi for HenrikApiClient {}
impl HenrikApiFull for HenrikApiClient {}
