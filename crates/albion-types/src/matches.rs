//! GvG and Crystal League matches.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Crystal League bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrystalLeagueCategory {
    /// 5v5 arena matches.
    CrystalLeague,
    /// 20v20 city matches.
    CrystalLeagueCity,
}

impl CrystalLeagueCategory {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CrystalLeague => "crystal_league",
            Self::CrystalLeagueCity => "crystal_league_city",
        }
    }
}

impl std::fmt::Display for CrystalLeagueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A guild-versus-guild territory match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildMatch {
    /// Match identifier.
    pub match_id: String,
    /// Match type.
    pub match_type: Option<String>,
    /// Scheduled start, as sent upstream.
    pub start_time: Option<String>,
    /// Winning team, 1 or 2.
    pub winner: Option<u8>,
    /// Remaining upstream fields (teams, timelines, results).
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// A Crystal League match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CrystalLeagueMatch {
    /// Match identifier.
    pub match_id: String,
    /// Match type.
    pub match_type: Option<String>,
    /// Start time, as sent upstream.
    pub start_time: Option<String>,
    /// League level (1-4).
    pub crystal_league_level: Option<u8>,
    /// Winning team, 1 or 2.
    pub winner: Option<u8>,
    /// First team's roster.
    #[serde(default)]
    pub team1_players: Vec<MatchPlayer>,
    /// Second team's roster.
    #[serde(default)]
    pub team2_players: Vec<MatchPlayer>,
    /// First team's remaining tickets.
    pub team1_tickets: Option<u32>,
    /// Second team's remaining tickets.
    pub team2_tickets: Option<u32>,
    /// Remaining upstream fields.
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// A player on a match roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchPlayer {
    /// Player identifier.
    pub id: Option<String>,
    /// Character name.
    pub name: Option<String>,
    /// Guild name.
    pub guild_name: Option<String>,
    /// Alliance name.
    pub alliance_name: Option<String>,
    /// Remaining upstream fields.
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crystal_league_match_deserialize() {
        let json = r#"{
            "MatchId": "m1",
            "MatchType": "CrystalLeague",
            "StartTime": "2024-03-01T18:00:00Z",
            "CrystalLeagueLevel": 2,
            "Winner": 1,
            "Team1Players": [{"Id": "p1", "Name": "Caller", "Kills": 4}],
            "Team2Players": [],
            "Team1Tickets": 12,
            "Team2Tickets": 0,
            "Team1Timeline": []
        }"#;

        let m: CrystalLeagueMatch = serde_json::from_str(json).unwrap();
        assert_eq!(m.crystal_league_level, Some(2));
        assert_eq!(m.team1_players[0].name.as_deref(), Some("Caller"));
        assert!(m.team1_players[0].details.contains_key("Kills"));
        assert!(m.details.contains_key("Team1Timeline"));
        assert!(!m.details.contains_key("MatchId"));
    }

    #[test]
    fn test_guild_match_keeps_details() {
        let m: GuildMatch =
            serde_json::from_str(r#"{"MatchId": "gm1", "Winner": 2, "AttackerTickets": 5}"#).unwrap();
        assert_eq!(m.winner, Some(2));
        assert_eq!(m.details["AttackerTickets"], serde_json::json!(5));
    }

    #[test]
    fn test_category_wire_values() {
        assert_eq!(CrystalLeagueCategory::CrystalLeague.to_string(), "crystal_league");
        assert_eq!(
            CrystalLeagueCategory::CrystalLeagueCity.to_string(),
            "crystal_league_city"
        );
    }
}
