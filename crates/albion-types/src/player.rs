//! Player records, equipment and lifetime statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A player as returned by player lookups, guild member lists and kill events.
///
/// Participants and group members of an [`Event`](crate::Event) carry the
/// same shape plus per-fight damage and healing figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    /// Player identifier.
    pub id: String,
    /// Character name.
    pub name: String,
    /// Guild identifier, empty when the player has no guild.
    #[serde(default)]
    pub guild_id: String,
    /// Guild name.
    pub guild_name: Option<String>,
    /// Alliance identifier, empty when the guild has no alliance.
    #[serde(default)]
    pub alliance_id: String,
    /// Alliance name.
    pub alliance_name: Option<String>,
    /// Alliance tag.
    pub alliance_tag: Option<String>,
    /// Avatar identifier.
    pub avatar: Option<String>,
    /// Avatar ring identifier.
    pub avatar_ring: Option<String>,
    /// Average item power at the time of the snapshot.
    pub average_item_power: Option<f64>,
    /// Equipped items.
    pub equipment: Option<Equipment>,
    /// Bag contents; empty slots are `null` upstream.
    #[serde(default)]
    pub inventory: Vec<Option<Item>>,
    /// Total kill fame.
    #[serde(default)]
    pub kill_fame: u64,
    /// Total death fame.
    #[serde(default)]
    pub death_fame: u64,
    /// Kill fame divided by death fame.
    #[serde(default)]
    pub fame_ratio: f64,
    /// Lifetime PvE, gathering and crafting fame.
    pub lifetime_statistics: Option<LifetimeStatistics>,
    /// Damage dealt, present on event participants.
    pub damage_done: Option<f64>,
    /// Healing done, present on event participants.
    pub support_healing_done: Option<f64>,
}

impl Player {
    /// Returns true if the player belongs to a guild.
    #[must_use]
    pub fn has_guild(&self) -> bool {
        !self.guild_id.is_empty()
    }
}

/// A single item stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    /// Item identifier, e.g. `T8_MAIN_SWORD@3`.
    #[serde(rename = "Type")]
    pub item_type: String,
    /// Stack size.
    pub count: u32,
    /// Quality tier, 1 (normal) to 5 (masterpiece).
    pub quality: u8,
    /// Active spells slotted on the item.
    #[serde(default)]
    pub active_spells: Vec<serde_json::Value>,
    /// Passive spells slotted on the item.
    #[serde(default)]
    pub passive_spells: Vec<serde_json::Value>,
    /// Legendary soul attached to an artifact weapon.
    pub legendary_soul: Option<serde_json::Value>,
}

/// Items in each equipment slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Equipment {
    /// Main hand weapon.
    pub main_hand: Option<Item>,
    /// Off hand item.
    pub off_hand: Option<Item>,
    /// Helmet.
    pub head: Option<Item>,
    /// Chest armor.
    pub armor: Option<Item>,
    /// Boots.
    pub shoes: Option<Item>,
    /// Bag.
    pub bag: Option<Item>,
    /// Cape.
    pub cape: Option<Item>,
    /// Mount.
    pub mount: Option<Item>,
    /// Potion slot.
    pub potion: Option<Item>,
    /// Food slot.
    pub food: Option<Item>,
}

impl Equipment {
    /// Returns the equipped items, skipping empty slots.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        [
            &self.main_hand,
            &self.off_hand,
            &self.head,
            &self.armor,
            &self.shoes,
            &self.bag,
            &self.cape,
            &self.mount,
            &self.potion,
            &self.food,
        ]
        .into_iter()
        .flatten()
    }
}

/// Lifetime fame totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifetimeStatistics {
    /// PvE fame by zone.
    #[serde(rename = "PvE")]
    pub pve: Option<PveFame>,
    /// Gathering fame by resource.
    pub gathering: Option<GatheringFame>,
    /// Crafting fame.
    pub crafting: Option<FameBreakdown>,
    /// Crystal League fame.
    #[serde(default)]
    pub crystal_league: u64,
    /// Fishing fame.
    #[serde(default)]
    pub fishing_fame: u64,
    /// Farming fame.
    #[serde(default)]
    pub farming_fame: u64,
    /// When the statistics were last aggregated.
    pub timestamp: Option<DateTime<Utc>>,
}

/// PvE fame by zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PveFame {
    /// All zones.
    pub total: u64,
    /// Royal continent.
    pub royal: u64,
    /// Outlands.
    pub outlands: u64,
    /// Roads of Avalon.
    pub avalon: u64,
    /// Hellgates.
    pub hellgate: u64,
    /// Corrupted dungeons.
    pub corrupted_dungeon: u64,
    /// Mists.
    pub mists: u64,
}

/// Fame split by zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FameBreakdown {
    /// All zones.
    pub total: u64,
    /// Royal continent.
    pub royal: u64,
    /// Outlands.
    pub outlands: u64,
    /// Roads of Avalon.
    pub avalon: u64,
}

/// Gathering fame by resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GatheringFame {
    /// Fiber.
    pub fiber: FameBreakdown,
    /// Hide.
    pub hide: FameBreakdown,
    /// Ore.
    pub ore: FameBreakdown,
    /// Rock.
    pub rock: FameBreakdown,
    /// Wood.
    pub wood: FameBreakdown,
    /// All resources.
    pub all: FameBreakdown,
}
