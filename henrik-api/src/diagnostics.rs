//! Side channel reporting how each API call went.
//!
//! The client never surfaces failures as panics; instead every phase of a call
//! is handed to a [`DiagnosticSink`]. The default sink forwards to `tracing`,
//! callers can inject their own to collect or reroute these events.

use std::fmt::Debug;

use reqwest::StatusCode;

use crate::{
    api::endpoint::ApiCall,
    types::{HenrikApiError, HenrikApiResponse},
};

#[derive(Debug)]
pub enum CallEvent<'a> {
    /// The request is about to be sent.
    Started { call: &'a ApiCall<'a>, url: &'a str },
    /// A payload was decoded.
    Found { call: &'a ApiCall<'a> },
    /// The API answered with something else than `200 OK`.
    Rejected {
        call: &'a ApiCall<'a>,
        status: StatusCode,
    },
    /// Transport or decoding failure.
    Failed {
        call: &'a ApiCall<'a>,
        error: &'a HenrikApiError,
    },
}

impl<'a> CallEvent<'a> {
    /// Build the terminal event matching a call result.
    pub fn outcome<T>(call: &'a ApiCall<'a>, result: &'a HenrikApiResponse<T>) -> Self {
        match result {
            Ok(_) => Self::Found { call },
            Err(HenrikApiError::Status(status)) => Self::Rejected {
                call,
                status: *status,
            },
            Err(error) => Self::Failed { call, error },
        }
    }
}

pub trait DiagnosticSink: Send + Sync + Debug {
    fn record(&self, event: &CallEvent<'_>);
}

/// Default sink, emitting one log line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &CallEvent<'_>) {
        match event {
            CallEvent::Started { call, url } => {
                tracing::info!(
                    endpoint = call.endpoint.name(),
                    "[HENRIK::CLIENT] Retrieving {}",
                    call
                );
                tracing::trace!("[HENRIK::CLIENT] GET {}", url);
            }
            CallEvent::Found { call } => tracing::info!(
                endpoint = call.endpoint.name(),
                "[HENRIK::CLIENT] {} found",
                call
            ),
            CallEvent::Rejected { call, status } => tracing::warn!(
                endpoint = call.endpoint.name(),
                "[HENRIK::CLIENT] {} not found. HTTP response code : {}",
                call,
                status.as_u16()
            ),
            CallEvent::Failed { call, error } => tracing::error!(
                endpoint = call.endpoint.name(),
                "[HENRIK::CLIENT] Error while calling {}. Error : {}",
                call,
                error
            ),
        }
    }
}
