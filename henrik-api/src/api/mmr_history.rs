use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{region::Region, types::HenrikApiResponse};

use super::{
    endpoint::{ApiCall, Endpoint},
    traits::{ApiRequest, fetch},
};

/// Player MMR history (v1, by puuid).
#[async_trait]
pub trait MmrHistoryApi: ApiRequest {
    async fn get_mmr_history_v1(
        &self,
        region: Region,
        puuid: &str,
    ) -> HenrikApiResponse<MmrHistoryV1> {
        fetch(
            self,
            ApiCall::new(Endpoint::MmrHistoryV1, region.as_str(), puuid),
        )
        .await
    }

    async fn find_mmr_history_v1(&self, region: Region, puuid: &str) -> Option<MmrHistoryV1> {
        self.get_mmr_history_v1(region, puuid).await.ok()
    }
}

/// Representation of the MMR history response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MmrHistoryV1 {
    #[serde(default)]
    pub status: u16,
    pub name: String,
    pub tag: String,
    /// Most recent game first.
    #[serde(default)]
    pub data: Vec<MmrHistoryEntry>,
}

impl MmrHistoryV1 {
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.name, self.tag)
    }

    pub fn latest(&self) -> Option<&MmrHistoryEntry> {
        self.data.first()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MmrHistoryEntry {
    pub match_id: String,
    #[serde(rename = "currenttier", default)]
    pub current_tier: u8,
    #[serde(rename = "currenttierpatched", default)]
    pub current_tier_patched: String,
    #[serde(default)]
    pub images: Option<TierImages>,
    #[serde(default)]
    pub map: Option<MapRef>,
    #[serde(default)]
    pub season_id: String,
    #[serde(default)]
    pub ranking_in_tier: i32,
    #[serde(default)]
    pub mmr_change_to_last_game: i32,
    #[serde(default)]
    pub elo: i32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub date_raw: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TierImages {
    pub small: Option<String>,
    pub large: Option<String>,
    pub triangle_down: Option<String>,
    pub triangle_up: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MapRef {
    pub id: Option<String>,
    pub name: Option<String>,
}
