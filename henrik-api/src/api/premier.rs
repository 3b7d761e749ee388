use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::HenrikApiResponse;

use super::{
    endpoint::{ApiCall, Endpoint},
    traits::{ApiRequest, fetch, object},
};

/// Premier team lookup (v1, by name and tag).
#[async_trait]
pub trait PremierApi: ApiRequest {
    async fn get_premier_team_v1(
        &self,
        team_name: &str,
        team_tag: &str,
    ) -> HenrikApiResponse<PremierTeamV1Response> {
        fetch(
            self,
            ApiCall::new(Endpoint::PremierTeamV1, team_name, team_tag),
        )
        .await
    }

    async fn find_premier_team_v1(
        &self,
        team_name: &str,
        team_tag: &str,
    ) -> Option<PremierTeamV1Response> {
        self.get_premier_team_v1(team_name, team_tag).await.ok()
    }
}

/// Representation of the Premier team response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PremierTeamV1Response {
    #[serde(default)]
    pub status: u16,
    #[serde(deserialize_with = "object")]
    pub data: PremierTeam,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PremierTeam {
    pub id: String,
    pub name: String,
    pub tag: String,
    #[serde(default)]
    pub enrolled: bool,
    #[serde(default)]
    pub stats: Option<PremierStats>,
    #[serde(default)]
    pub placement: Option<PremierPlacement>,
    #[serde(default)]
    pub customization: Option<PremierCustomization>,
    #[serde(default)]
    pub member: Vec<PremierMember>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremierStats {
    pub wins: u32,
    pub matches: u32,
    pub losses: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PremierPlacement {
    pub points: u32,
    pub conference: String,
    pub division: u32,
    pub place: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PremierCustomization {
    pub icon: Option<String>,
    pub image: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PremierMember {
    pub puuid: String,
    pub name: Option<String>,
    pub tag: Option<String>,
}
