//! Search results.

use serde::{Deserialize, Serialize};

/// Guilds and players whose names start with the search term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching guilds.
    #[serde(default)]
    pub guilds: Vec<SearchGuild>,
    /// Matching players.
    #[serde(default)]
    pub players: Vec<SearchPlayer>,
}

impl SearchResponse {
    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guilds.is_empty() && self.players.is_empty()
    }
}

/// A guild search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchGuild {
    /// Guild identifier.
    pub id: String,
    /// Guild name.
    pub name: String,
    /// Alliance identifier.
    #[serde(default)]
    pub alliance_id: String,
    /// Alliance name.
    #[serde(default)]
    pub alliance_name: String,
    /// Kill fame; `null` for guilds that never scored a kill.
    pub kill_fame: Option<u64>,
    /// Death fame.
    #[serde(default)]
    pub death_fame: u64,
}

/// A player search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlayer {
    /// Player identifier.
    pub id: String,
    /// Character name.
    pub name: String,
    /// Guild identifier.
    #[serde(default)]
    pub guild_id: String,
    /// Guild name.
    pub guild_name: Option<String>,
    /// Alliance identifier.
    #[serde(default)]
    pub alliance_id: String,
    /// Alliance name.
    #[serde(default)]
    pub alliance_name: String,
    /// Avatar identifier.
    #[serde(default)]
    pub avatar: String,
    /// Avatar ring identifier.
    #[serde(default)]
    pub avatar_ring: String,
    /// Total kill fame.
    #[serde(default)]
    pub kill_fame: u64,
    /// Total death fame.
    #[serde(default)]
    pub death_fame: u64,
    /// Kill fame divided by death fame.
    #[serde(default)]
    pub fame_ratio: f64,
    /// Total kills.
    #[serde(rename = "totalKills")]
    pub total_kills: Option<u64>,
    /// GvG kills.
    #[serde(rename = "gvgKills")]
    pub gvg_kills: Option<u64>,
    /// GvG matches won.
    #[serde(rename = "gvgWon")]
    pub gvg_won: Option<u64>,
}
