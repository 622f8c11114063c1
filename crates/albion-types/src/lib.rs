//! Core types for the Albion Online gameinfo API client.
//!
//! This crate provides the data contracts shared by the albion crates:
//!
//! - [`Region`] / [`EndpointTarget`] - Which upstream hosts a client talks to
//! - [`Player`], [`GuildInfo`], [`Alliance`], [`Battle`], [`Event`] - Killboard records
//! - [`GuildMatch`], [`CrystalLeagueMatch`] - Match records
//! - [`WeaponCategory`], [`ItemCategoryTree`] - Static item catalogues
//! - [`ServerStatus`] - Status host payload
//! - [`QueryParams`] and the `*Params` types - Endpoint query parameters
//! - [`AlbionError`] - The single error type every call reports

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/albion-sdk/albion-sdk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod battle;
mod error;
mod guild;
mod items;
mod matches;
mod params;
mod player;
mod query;
mod region;
mod search;
mod status;

pub use battle::{Battle, BattleAlliance, BattleGuild, BattlePlayer, Event};
pub use error::{AbortReason, AlbionError, BoxError, Result};
pub use guild::{
    Alliance, AllianceGuild, DetailedGuildInfo, GuildBasic, GuildInfo, GuildOverall, GvgStats,
};
pub use items::{ItemCategory, ItemCategoryTree, ItemSubcategory, WeaponCategory};
pub use matches::{CrystalLeagueCategory, CrystalLeagueMatch, GuildMatch, MatchPlayer};
pub use params::{
    BattleParams, BattleSort, KillRange, PaginationParams, ParamParseError, TopKillsParams,
};
pub use player::{
    Equipment, FameBreakdown, GatheringFame, Item, LifetimeStatistics, Player, PveFame,
};
pub use query::{QueryParams, ToQuery, encode_path_segment};
pub use region::{EndpointTarget, Region};
pub use search::{SearchGuild, SearchPlayer, SearchResponse};
pub use status::{ServerStatus, StatusKind};
