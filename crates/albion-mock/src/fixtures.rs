//! Canned upstream payloads.

use serde_json::{Value, json};

/// A player record with a few fame figures and no guild.
#[must_use]
pub fn player(id: &str, name: &str) -> Value {
    json!({
        "AverageItemPower": 1100.5,
        "Equipment": {
            "MainHand": {"Type": "T6_MAIN_SPEAR@1", "Count": 1, "Quality": 2,
                         "ActiveSpells": [], "PassiveSpells": [], "LegendarySoul": null},
            "OffHand": null, "Head": null, "Armor": null, "Shoes": null, "Bag": null,
            "Cape": null, "Mount": null, "Potion": null, "Food": null
        },
        "Inventory": [],
        "Name": name,
        "Id": id,
        "GuildName": "",
        "GuildId": "",
        "AllianceName": "",
        "AllianceId": "",
        "AllianceTag": "",
        "Avatar": "",
        "AvatarRing": "",
        "DeathFame": 1000,
        "KillFame": 5000,
        "FameRatio": 5.0,
        "LifetimeStatistics": null
    })
}

/// A search result with one player hit and no guild hits.
#[must_use]
pub fn search(player_id: &str, player_name: &str) -> Value {
    json!({
        "guilds": [],
        "players": [{
            "Id": player_id,
            "Name": player_name,
            "GuildId": "",
            "GuildName": null,
            "AllianceId": "",
            "AllianceName": "",
            "Avatar": "",
            "AvatarRing": "",
            "KillFame": 5000,
            "DeathFame": 1000,
            "FameRatio": 5.0,
            "totalKills": null,
            "gvgKills": null,
            "gvgWon": null
        }]
    })
}

/// A solo kill event between two players.
#[must_use]
pub fn event(event_id: u64) -> Value {
    json!({
        "groupMemberCount": 1,
        "numberOfParticipants": 1,
        "EventId": event_id,
        "TimeStamp": "2024-03-01T18:33:09.618375900Z",
        "Version": 4,
        "Killer": player("killer", "Caller"),
        "Victim": player("victim", "Target"),
        "TotalVictimKillFame": 25000,
        "Location": null,
        "Participants": [],
        "GroupMembers": [],
        "GvGMatch": null,
        "BattleId": event_id,
        "KillArea": "OPEN_WORLD",
        "Category": null,
        "Type": "KILL"
    })
}

/// A small battle with one player and one guild.
#[must_use]
pub fn battle(battle_id: u64) -> Value {
    json!({
        "id": battle_id,
        "startTime": "2024-03-01T18:30:00.000Z",
        "endTime": "2024-03-01T18:45:00.000Z",
        "timeout": "2024-03-01T18:47:00.000Z",
        "totalFame": 90000,
        "totalKills": 3,
        "clusterName": null,
        "players": {
            "p1": {"id": "p1", "name": "Caller", "kills": 3, "deaths": 0, "killFame": 90000,
                   "guildName": "Callers", "guildId": "g1", "allianceName": "", "allianceId": ""}
        },
        "guilds": {
            "g1": {"id": "g1", "name": "Callers", "kills": 3, "deaths": 0, "killFame": 90000,
                   "alliance": "", "allianceId": ""}
        },
        "alliances": {},
        "battle_TIMEOUT": 120
    })
}

/// A status host payload.
#[must_use]
pub fn status(kind: &str, message: &str) -> Value {
    json!({"status": kind, "message": message})
}
