pub mod client;
pub mod endpoint;
pub mod match_v4;
pub mod metrics;
pub mod mmr_history;
pub mod premier;
pub mod traits;

pub use match_v4::MatchApi;
pub use mmr_history::MmrHistoryApi;
pub use premier::PremierApi;

/// All endpoints supported by the HenrikDev client.
pub trait HenrikApiFull: MmrHistoryApi + MatchApi + PremierApi {}
