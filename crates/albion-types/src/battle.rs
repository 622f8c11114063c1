//! Battles and kill events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Player;

/// A battle: a cluster of kill events close in time and space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    /// Battle identifier.
    pub id: u64,
    /// First kill of the battle.
    pub start_time: DateTime<Utc>,
    /// Last kill of the battle.
    pub end_time: Option<DateTime<Utc>>,
    /// Time after which the battle was closed.
    pub timeout: Option<DateTime<Utc>>,
    /// Total kill fame.
    #[serde(default)]
    pub total_fame: u64,
    /// Total number of kills.
    #[serde(default)]
    pub total_kills: u32,
    /// Cluster (zone) name, often `null`.
    pub cluster_name: Option<String>,
    /// Participating players keyed by player id.
    #[serde(default)]
    pub players: BTreeMap<String, BattlePlayer>,
    /// Participating guilds keyed by guild id.
    #[serde(default)]
    pub guilds: BTreeMap<String, BattleGuild>,
    /// Participating alliances keyed by alliance id.
    #[serde(default)]
    pub alliances: BTreeMap<String, BattleAlliance>,
    /// Seconds of inactivity that close a battle.
    #[serde(rename = "battle_TIMEOUT")]
    pub battle_timeout: Option<u32>,
}

impl Battle {
    /// Returns the battle duration, if it has ended.
    #[must_use]
    pub fn duration(&self) -> Option<chrono::TimeDelta> {
        self.end_time.map(|end| end - self.start_time)
    }
}

/// A player's tally in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePlayer {
    /// Player identifier.
    pub id: String,
    /// Character name.
    pub name: String,
    /// Kills scored.
    #[serde(default)]
    pub kills: u32,
    /// Deaths suffered.
    #[serde(default)]
    pub deaths: u32,
    /// Kill fame earned.
    #[serde(default)]
    pub kill_fame: u64,
    /// Guild name.
    pub guild_name: Option<String>,
    /// Guild identifier.
    pub guild_id: Option<String>,
    /// Alliance name.
    pub alliance_name: Option<String>,
    /// Alliance identifier.
    pub alliance_id: Option<String>,
}

/// A guild's tally in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleGuild {
    /// Guild identifier.
    pub id: String,
    /// Guild name.
    pub name: String,
    /// Kills scored.
    #[serde(default)]
    pub kills: u32,
    /// Deaths suffered.
    #[serde(default)]
    pub deaths: u32,
    /// Kill fame earned.
    #[serde(default)]
    pub kill_fame: u64,
    /// Alliance name.
    pub alliance: Option<String>,
    /// Alliance identifier.
    pub alliance_id: Option<String>,
}

/// An alliance's tally in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleAlliance {
    /// Alliance identifier.
    pub id: String,
    /// Alliance name.
    pub name: String,
    /// Kills scored.
    #[serde(default)]
    pub kills: u32,
    /// Deaths suffered.
    #[serde(default)]
    pub deaths: u32,
    /// Kill fame earned.
    #[serde(default)]
    pub kill_fame: u64,
}

/// A single kill event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    /// Event identifier.
    pub event_id: u64,
    /// When the kill happened.
    pub time_stamp: DateTime<Utc>,
    /// Payload version.
    #[serde(default)]
    pub version: u32,
    /// The player credited with the kill.
    pub killer: Player,
    /// The player who died.
    pub victim: Player,
    /// Fame awarded for the kill.
    #[serde(default)]
    pub total_victim_kill_fame: u64,
    /// Location name, usually `null`.
    pub location: Option<String>,
    /// Everyone who dealt damage or healed.
    #[serde(default)]
    pub participants: Vec<Player>,
    /// The killer's party.
    #[serde(default)]
    pub group_members: Vec<Player>,
    /// Number of party members.
    #[serde(rename = "groupMemberCount", default)]
    pub group_member_count: u32,
    /// Number of participants.
    #[serde(rename = "numberOfParticipants", default)]
    pub number_of_participants: u32,
    /// GvG match the kill belongs to.
    #[serde(rename = "GvGMatch")]
    pub gvg_match: Option<serde_json::Value>,
    /// Battle the kill was grouped into.
    pub battle_id: Option<u64>,
    /// Kill area, e.g. `OPEN_WORLD`.
    pub kill_area: Option<String>,
    /// Event category.
    pub category: Option<String>,
    /// Event type, e.g. `KILL`.
    #[serde(rename = "Type")]
    pub event_type: Option<String>,
}

impl Event {
    /// Returns true if the killer fought alone.
    #[must_use]
    pub fn is_solo(&self) -> bool {
        self.participants.len() <= 1 && self.group_member_count <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battle_deserialize() {
        let json = r#"{
            "id": 1234,
            "startTime": "2024-03-01T18:30:00.123Z",
            "endTime": "2024-03-01T18:45:00.123Z",
            "timeout": "2024-03-01T18:47:00.123Z",
            "totalFame": 500000,
            "totalKills": 12,
            "clusterName": null,
            "players": {
                "p1": {"name": "Caller", "kills": 3, "deaths": 0, "killFame": 90000,
                       "guildName": "Callers", "guildId": "g1", "allianceName": "", "allianceId": "", "id": "p1"}
            },
            "guilds": {
                "g1": {"name": "Callers", "kills": 3, "deaths": 0, "killFame": 90000, "alliance": "", "allianceId": "", "id": "g1"}
            },
            "alliances": {},
            "battle_TIMEOUT": 120
        }"#;

        let battle: Battle = serde_json::from_str(json).unwrap();
        assert_eq!(battle.id, 1234);
        assert_eq!(battle.players["p1"].kills, 3);
        assert_eq!(battle.guilds["g1"].kill_fame, 90_000);
        assert!(battle.alliances.is_empty());
        assert_eq!(battle.battle_timeout, Some(120));
        assert_eq!(battle.duration().unwrap().num_minutes(), 15);
    }

    #[test]
    fn test_event_deserialize() {
        let json = r#"{
            "groupMemberCount": 1,
            "numberOfParticipants": 1,
            "EventId": 987654321,
            "TimeStamp": "2024-03-01T18:33:09.618375900Z",
            "Version": 4,
            "Killer": {"Id": "p1", "Name": "Caller", "KillFame": 10},
            "Victim": {"Id": "p2", "Name": "Target", "DeathFame": 10},
            "TotalVictimKillFame": 25000,
            "Location": null,
            "Participants": [{"Id": "p1", "Name": "Caller", "DamageDone": 1500.5, "SupportHealingDone": 0.0}],
            "GroupMembers": [{"Id": "p1", "Name": "Caller"}],
            "GvGMatch": null,
            "BattleId": 987654321,
            "KillArea": "OPEN_WORLD",
            "Category": null,
            "Type": "KILL"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.killer.name, "Caller");
        assert_eq!(event.victim.name, "Target");
        assert_eq!(event.participants[0].damage_done, Some(1500.5));
        assert_eq!(event.event_type.as_deref(), Some("KILL"));
        assert!(event.gvg_match.is_none());
        assert!(event.is_solo());
    }
}
