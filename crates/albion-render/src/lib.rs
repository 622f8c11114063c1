//! Render service URL builders for Albion Online icons.
//!
//! - [`item_icon_url`] - Item icons with enchantment, quality and size
//! - [`spell_icon_url`] - Spell icons
//! - [`wardrobe_icon_url`] - Wardrobe (skin) icons
//! - [`destiny_board_icon_url`] - Destiny board node icons
//! - [`guild_logo_url`] - Guild logos
//!
//! # Example
//!
//! ```
//! use albion_render::{ItemIconParams, Quality, item_icon_url};
//!
//! let params = ItemIconParams {
//!     quality: Some(Quality::Masterpiece),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     item_icon_url("T8_MAIN_SWORD", Some(&params)),
//!     "https://render.albiononline.com/v1/item/T8_MAIN_SWORD@0.png?quality=5"
//! );
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/albion-sdk/albion-sdk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod params;

pub use params::{
    Enchantment, GuildLogoParams, IconParams, IconSize, ItemIconParams, Quality, RenderParamError,
};

use albion_types::{QueryParams, ToQuery, encode_path_segment};

/// Base URL of the render service.
pub const RENDER_API_URL: &str = "https://render.albiononline.com/v1";

fn render_url(path: &str, query: &QueryParams) -> String {
    if query.is_empty() {
        format!("{RENDER_API_URL}{path}")
    } else {
        format!("{RENDER_API_URL}{path}?{}", query.encode())
    }
}

/// Item icon URL: `/item/{item}@{enchantment}.png`.
///
/// `item` is an item identifier (`T4_BAG`) or a localized name.
#[must_use]
pub fn item_icon_url(item: &str, params: Option<&ItemIconParams>) -> String {
    let enchantment = params.and_then(|p| p.enchantment).unwrap_or_default();
    let path = format!("/item/{}@{enchantment}.png", encode_path_segment(item));
    render_url(&path, &params.to_query())
}

/// Spell icon URL: `/spell/{spell}.png`.
#[must_use]
pub fn spell_icon_url(spell: &str, params: Option<&IconParams>) -> String {
    let path = format!("/spell/{}.png", encode_path_segment(spell));
    render_url(&path, &params.to_query())
}

/// Wardrobe icon URL: `/wardrobe/{item}.png`.
#[must_use]
pub fn wardrobe_icon_url(item: &str) -> String {
    format!("{RENDER_API_URL}/wardrobe/{}.png", encode_path_segment(item))
}

/// Destiny board node icon URL: `/destiny/{node}.png`.
#[must_use]
pub fn destiny_board_icon_url(node: &str, params: Option<&IconParams>) -> String {
    let path = format!("/destiny/{}.png", encode_path_segment(node));
    render_url(&path, &params.to_query())
}

/// Guild logo URL: `/guild/logo.png?symbol=...`.
#[must_use]
pub fn guild_logo_url(params: &GuildLogoParams) -> String {
    render_url("/guild/logo.png", &params.to_query())
}
