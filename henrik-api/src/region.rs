use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::UnknownRegion;

/// Region codes accepted by the HenrikDev Valorant endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Eu,
    Na,
    Latam,
    Br,
    Ap,
    Kr,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Eu,
        Region::Na,
        Region::Latam,
        Region::Br,
        Region::Ap,
        Region::Kr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eu => "eu",
            Self::Na => "na",
            Self::Latam => "latam",
            Self::Br => "br",
            Self::Ap => "ap",
            Self::Kr => "kr",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Eu => "Europe",
            Self::Na => "North America",
            Self::Latam => "Latin America",
            Self::Br => "Brazil",
            Self::Ap => "Asia Pacific",
            Self::Kr => "Korea",
        }
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eu" => Ok(Self::Eu),
            "na" => Ok(Self::Na),
            "latam" => Ok(Self::Latam),
            "br" => Ok(Self::Br),
            "ap" => Ok(Self::Ap),
            "kr" => Ok(Self::Kr),
            _ => Err(UnknownRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
