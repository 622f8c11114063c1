//! Render service icon URL command.

use albion_sdk::render::{
    Enchantment, GuildLogoParams, IconParams, IconSize, ItemIconParams, Quality,
    destiny_board_icon_url, guild_logo_url, item_icon_url, spell_icon_url, wardrobe_icon_url,
};
use anyhow::Result;

use crate::args::IconKind;

/// Print the render URL for an icon.
pub(crate) fn icon(kind: IconKind) -> Result<()> {
    let url = match kind {
        IconKind::Item {
            item,
            enchantment,
            quality,
            size,
            locale,
        } => {
            let params = ItemIconParams {
                enchantment: enchantment.map(Enchantment::try_from).transpose()?,
                quality: quality.map(Quality::try_from).transpose()?,
                size: icon_size(size)?,
                locale,
            };
            item_icon_url(&item, Some(&params))
        }
        IconKind::Spell {
            spell,
            size,
            locale,
        } => {
            let params = IconParams {
                size: icon_size(size)?,
                locale,
            };
            spell_icon_url(&spell, Some(&params))
        }
        IconKind::Wardrobe { item } => wardrobe_icon_url(&item),
        IconKind::Destiny { node, size, locale } => {
            let params = IconParams {
                size: icon_size(size)?,
                locale,
            };
            destiny_board_icon_url(&node, Some(&params))
        }
        IconKind::GuildLogo {
            symbol,
            size,
            logo_type,
            motif_color,
            symbol_color,
            symbol_scale,
        } => guild_logo_url(&GuildLogoParams {
            symbol,
            size: icon_size(size)?,
            logo_type,
            motif_color,
            symbol_color,
            symbol_scale,
        }),
    };

    println!("{url}");
    Ok(())
}

fn icon_size(pixels: Option<u16>) -> Result<Option<IconSize>> {
    Ok(pixels.map(IconSize::try_from).transpose()?)
}
