//! # Payloads
//!
//! JSON bodies exchanged between the site and its clients.
//!
//! ### Ranking
//! `GET /api/ranking_data?offset=N` returns up to [`RANKING_PAGE_SIZE`] entries ordered by
//! votes (descending) then kit id. An empty array means there is nothing past `offset`.
//!
//! ### Voting
//! `POST /vote` takes `{"weapon_id": N}` with the token from the `csrf-token` meta tag in the
//! [`CSRF_HEADER`] header.
use serde::{Deserialize, Serialize};

use crate::weapons::Kit;

pub const RANKING_PAGE_SIZE: usize = 100;
pub const LISTING_PAGE_SIZE: usize = 100;

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CSRF_META_NAME: &str = "csrf-token";

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct VoteRequest {
    #[serde(default)]
    pub weapon_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct VoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_vote_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VoteResponse {
    pub fn counted(new_vote_count: u32) -> Self {
        Self {
            success: true,
            new_vote_count: Some(new_vote_count),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            new_vote_count: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MainEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WeaponEntry {
    pub name: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub main: MainEntry,
    pub sub: WeaponEntry,
    pub special: WeaponEntry,
    pub vote_count: u32,
}

impl RankingEntry {
    pub fn from_kit(kit: &Kit, vote_count: u32) -> Self {
        Self {
            main: MainEntry {
                name: kit.main.name.to_string(),
                kind: kit.main.kind.to_string(),
                image: kit.main.image.to_string(),
            },
            sub: WeaponEntry {
                name: kit.sub.name.to_string(),
                image: kit.sub.image.to_string(),
            },
            special: WeaponEntry {
                name: kit.special.name.to_string(),
                image: kit.special.image.to_string(),
            },
            vote_count,
        }
    }
}
