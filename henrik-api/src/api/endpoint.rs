use std::fmt;

use urlencoding::encode;

/// Root of the public HenrikDev API.
pub const DEFAULT_BASE_URL: &str = "https://api.henrikdev.xyz";

/// The fixed set of routes this client knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/valorant/v1/by-puuid/mmr-history/{region}/{puuid}`
    MmrHistoryV1,
    /// `/valorant/v4/match/{region}/{match_id}`
    MatchV4,
    /// `/valorant/v1/premier/{team_name}/{team_tag}`
    PremierTeamV1,
}

impl Endpoint {
    const fn route(&self) -> &'static str {
        match self {
            Self::MmrHistoryV1 => "/valorant/v1/by-puuid/mmr-history",
            Self::MatchV4 => "/valorant/v4/match",
            Self::PremierTeamV1 => "/valorant/v1/premier",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::MmrHistoryV1 => "mmr-history-v1",
            Self::MatchV4 => "match-v4",
            Self::PremierTeamV1 => "premier-team-v1",
        }
    }

    /// Render the request path, each parameter being percent-encoded.
    pub fn path(&self, first: &str, second: &str) -> String {
        format!("{}/{}/{}", self.route(), encode(first), encode(second))
    }
}

/// A single call against an [`Endpoint`] with its two positional parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiCall<'a> {
    pub endpoint: Endpoint,
    pub params: [&'a str; 2],
}

impl<'a> ApiCall<'a> {
    pub fn new(endpoint: Endpoint, first: &'a str, second: &'a str) -> Self {
        Self {
            endpoint,
            params: [first, second],
        }
    }

    pub fn path(&self) -> String {
        self.endpoint.path(self.params[0], self.params[1])
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for ApiCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.params;
        match self.endpoint {
            Endpoint::MmrHistoryV1 => {
                write!(f, "MMR history for player {second} in region {first}")
            }
            Endpoint::MatchV4 => write!(f, "match {second} in region {first}"),
            Endpoint::PremierTeamV1 => write!(f, "Premier team {first}#{second}"),
        }
    }
}
