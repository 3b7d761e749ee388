use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{region::Region, types::HenrikApiResponse};

use super::{
    endpoint::{ApiCall, Endpoint},
    traits::{ApiRequest, fetch, object},
};

/// Match details (v4).
#[async_trait]
pub trait MatchApi: ApiRequest {
    async fn get_match_v4(
        &self,
        region: Region,
        match_id: &str,
    ) -> HenrikApiResponse<MatchV4Response> {
        fetch(
            self,
            ApiCall::new(Endpoint::MatchV4, region.as_str(), match_id),
        )
        .await
    }

    async fn find_match_v4(&self, region: Region, match_id: &str) -> Option<MatchV4Response> {
        self.get_match_v4(region, match_id).await.ok()
    }
}

/// Representation of the match data response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatchV4Response {
    #[serde(default)]
    pub status: u16,
    #[serde(deserialize_with = "object")]
    pub data: MatchV4,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatchV4 {
    #[serde(deserialize_with = "object")]
    pub metadata: MatchMetadata,
    #[serde(default)]
    pub players: Vec<MatchPlayer>,
    #[serde(default)]
    pub teams: Vec<MatchTeam>,
}

impl MatchV4 {
    pub fn player(&self, puuid: &str) -> Option<&MatchPlayer> {
        self.players.iter().find(|p| p.puuid == puuid)
    }

    pub fn team_players<'a>(&'a self, team_id: &'a str) -> impl Iterator<Item = &'a MatchPlayer> {
        self.players.iter().filter(move |p| p.team_id == team_id)
    }

    pub fn winning_team(&self) -> Option<&MatchTeam> {
        self.teams.iter().find(|t| t.won)
    }
}

/// Representation of the match metadata.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatchMetadata {
    pub match_id: String,
    #[serde(default)]
    pub map: Option<NamedRef>,
    #[serde(default)]
    pub game_version: String,
    #[serde(default)]
    pub game_length_in_ms: u64,
    #[serde(default)]
    pub started_at: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub queue: Option<MatchQueue>,
    #[serde(default)]
    pub season: Option<MatchSeason>,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub cluster: Option<String>,
}

impl MatchMetadata {
    pub fn to_formatted_match_duration(&self) -> String {
        let total_secs = self.game_length_in_ms / 1000;
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatchQueue {
    pub id: String,
    pub name: Option<String>,
    pub mode_type: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatchSeason {
    pub id: String,
    pub short: String,
}

/// Representation of the per-player statistics.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatchPlayer {
    pub puuid: String,
    pub name: String,
    pub tag: String,
    pub team_id: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub party_id: String,
    #[serde(default)]
    pub agent: Option<NamedRef>,
    #[serde(default)]
    pub stats: PlayerStats,
    #[serde(default)]
    pub ability_casts: Option<AbilityCasts>,
    #[serde(default)]
    pub tier: Option<PlayerTier>,
    #[serde(default)]
    pub account_level: u32,
    #[serde(default)]
    pub economy: Option<PlayerEconomy>,
}

impl MatchPlayer {
    pub fn kda(&self) -> String {
        format!(
            "{}/{}/{}",
            self.stats.kills, self.stats.deaths, self.stats.assists
        )
    }

    /// Share of hits landing on the head, in percent.
    pub fn headshot_rate(&self) -> f64 {
        let hits = u64::from(self.stats.headshots)
            + u64::from(self.stats.bodyshots)
            + u64::from(self.stats.legshots);
        if hits == 0 {
            0.0
        } else {
            self.stats.headshots as f64 * 100.0 / hits as f64
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PlayerStats {
    pub score: u32,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub headshots: u32,
    pub bodyshots: u32,
    pub legshots: u32,
    pub damage: DamageStats,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DamageStats {
    pub dealt: u32,
    pub received: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AbilityCasts {
    pub grenade: Option<u32>,
    pub ability1: Option<u32>,
    pub ability2: Option<u32>,
    pub ultimate: Option<u32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PlayerTier {
    pub id: u8,
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PlayerEconomy {
    pub spent: EconomyAmount,
    pub loadout_value: EconomyAmount,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EconomyAmount {
    pub overall: u32,
    pub average: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatchTeam {
    pub team_id: String,
    #[serde(default)]
    pub rounds: TeamRounds,
    #[serde(default)]
    pub won: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TeamRounds {
    pub won: u16,
    pub lost: u16,
}
