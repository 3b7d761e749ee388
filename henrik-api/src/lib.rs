//! Simple HenrikDev Valorant API client.
//!
//! The library offers typed wrappers around three REST endpoints (MMR
//! history, match details and Premier teams). Every call either yields the
//! decoded payload or a [`types::HenrikApiError`] describing why it did not,
//! and each trait also exposes an `Option` flavour for callers that only care
//! about presence.

pub mod api;
pub mod diagnostics;
pub mod region;
pub mod types;

pub use api::{
    HenrikApiFull,
    client::{DEFAULT_BASE_URL, HenrikApiClient},
    match_v4::MatchApi,
    mmr_history::MmrHistoryApi,
    premier::PremierApi,
    traits::ApiRequest,
};
pub use region::Region;
pub use types::{HenrikApiError, HenrikApiResponse};
