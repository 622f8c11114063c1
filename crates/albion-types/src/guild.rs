//! Guild and alliance records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Player;

/// Basic guild information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildInfo {
    /// Guild identifier.
    pub id: String,
    /// Guild name.
    pub name: String,
    /// Founder's player identifier.
    pub founder_id: Option<String>,
    /// Founder's character name.
    pub founder_name: Option<String>,
    /// Founding time.
    pub founded: Option<DateTime<Utc>>,
    /// Alliance tag.
    pub alliance_tag: Option<String>,
    /// Alliance identifier.
    #[serde(default)]
    pub alliance_id: String,
    /// Alliance name.
    pub alliance_name: Option<String>,
    /// Guild logo descriptor.
    pub logo: Option<serde_json::Value>,
    /// Total kill fame (lower-case key upstream).
    #[serde(rename = "killFame", default)]
    pub kill_fame: u64,
    /// Total death fame.
    #[serde(default)]
    pub death_fame: u64,
    /// Territory attacks won.
    pub attacks_won: Option<u32>,
    /// Territory defenses won.
    pub defenses_won: Option<u32>,
    /// Number of members.
    #[serde(default)]
    pub member_count: u32,
}

/// Guild information with aggregate statistics and top players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedGuildInfo {
    /// Basic guild record.
    pub guild: GuildInfo,
    /// Aggregate PvP statistics.
    pub overall: Option<GuildOverall>,
    /// Summary block.
    pub basic: Option<GuildBasic>,
    /// Highest-fame members.
    #[serde(default)]
    pub top_players: Vec<Player>,
}

/// Aggregate guild PvP statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuildOverall {
    /// Total kills.
    pub kills: u64,
    /// Total kill fame.
    pub fame: u64,
    /// Total deaths.
    pub deaths: u64,
    /// GvG kills.
    pub gvg_kills: u64,
    /// GvG matches won.
    pub gvg_won: u64,
    /// Fame ratio.
    pub ratio: f64,
}

/// Guild summary block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildBasic {
    /// Founder's character name.
    pub founder: Option<String>,
    /// Founding time.
    pub founded: Option<DateTime<Utc>>,
    /// Number of members.
    #[serde(default)]
    pub member_count: u32,
}

/// GvG statistics for a guild.
///
/// The upstream payload varies between seasons; known counters are typed and
/// everything else is kept in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GvgStats {
    /// Attacks won.
    pub attacks_won: Option<u32>,
    /// Defenses won.
    pub defenses_won: Option<u32>,
    /// Remaining upstream fields.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// Alliance information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alliance {
    /// Alliance identifier.
    pub alliance_id: String,
    /// Alliance name.
    pub alliance_name: String,
    /// Alliance tag.
    pub alliance_tag: Option<String>,
    /// Founder's player identifier.
    pub founder_id: Option<String>,
    /// Founder's character name.
    pub founder_name: Option<String>,
    /// Founding time.
    pub founded: Option<DateTime<Utc>>,
    /// Member guilds.
    #[serde(default)]
    pub guilds: Vec<AllianceGuild>,
    /// Number of players across all member guilds.
    #[serde(default)]
    pub num_players: u32,
}

/// A guild inside an alliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllianceGuild {
    /// Guild identifier.
    pub id: String,
    /// Guild name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guild_info_lowercase_kill_fame() {
        let json = r#"{
            "Id": "g1", "Name": "Callers", "FounderId": "p1", "FounderName": "Caller",
            "Founded": "2019-02-10T15:36:29.421733Z", "AllianceTag": "", "AllianceId": "",
            "AllianceName": null, "Logo": null, "killFame": 123456, "DeathFame": 42,
            "AttacksWon": null, "DefensesWon": null, "MemberCount": 17
        }"#;

        let guild: GuildInfo = serde_json::from_str(json).unwrap();
        assert_eq!(guild.kill_fame, 123_456);
        assert_eq!(guild.member_count, 17);
        assert!(guild.founded.is_some());
        assert!(guild.alliance_name.is_none());
    }

    #[test]
    fn test_gvg_stats_keeps_unknown_fields() {
        let stats: GvgStats =
            serde_json::from_str(r#"{"AttacksWon": 3, "Seasons": [1, 2]}"#).unwrap();
        assert_eq!(stats.attacks_won, Some(3));
        assert_eq!(stats.defenses_won, None);
        assert!(stats.other.contains_key("Seasons"));
    }

    #[test]
    fn test_alliance_deserialize() {
        let json = r#"{
            "AllianceId": "a1", "AllianceName": "Grand", "AllianceTag": "GRD",
            "FounderId": "p1", "FounderName": "Caller", "Founded": "2020-01-01T00:00:00Z",
            "Guilds": [{"Id": "g1", "Name": "Callers"}], "NumPlayers": 300
        }"#;

        let alliance: Alliance = serde_json::from_str(json).unwrap();
        assert_eq!(alliance.alliance_tag.as_deref(), Some("GRD"));
        assert_eq!(alliance.guilds.len(), 1);
        assert_eq!(alliance.num_players, 300);
    }

    #[test]
    fn test_detailed_guild_info_deserialize() {
        let json = r#"{
            "guild": {"Id": "g1", "Name": "Callers", "killFame": 90000, "DeathFame": 10,
                      "MemberCount": 2},
            "overall": {"kills": 3, "gvgKills": 1, "gvgWon": 0, "fame": 90000,
                        "deaths": 1, "ratio": 9000.0},
            "basic": {"founder": "Caller", "founded": "2017-07-21T12:00:00Z", "memberCount": 2},
            "topPlayers": [{"Id": "p1", "Name": "Caller", "KillFame": 90000}]
        }"#;

        let info: DetailedGuildInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.guild.id, "g1");
        assert_eq!(info.guild.kill_fame, 90000);
        let overall = info.overall.unwrap();
        assert_eq!(overall.gvg_kills, 1);
        assert_eq!(overall.ratio, 9000.0);
        let basic = info.basic.unwrap();
        assert_eq!(basic.founder.as_deref(), Some("Caller"));
        assert_eq!(basic.member_count, 2);
        assert_eq!(info.top_players.len(), 1);
        assert_eq!(info.top_players[0].name, "Caller");
    }

    #[test]
    fn test_detailed_guild_info_optional_blocks() {
        let json = r#"{"guild": {"Id": "g2", "Name": "Quiet"}, "overall": null}"#;
        let info: DetailedGuildInfo = serde_json::from_str(json).unwrap();
        assert!(info.overall.is_none());
        assert!(info.basic.is_none());
        assert!(info.top_players.is_empty());
    }
}
