//! Guild lookup and feud commands.

use albion_sdk::prelude::*;
use anyhow::Result;

use super::Session;
use crate::args::{GuildView, PageArgs};

/// Show a guild record or one of its listings.
pub(crate) async fn guild(
    session: &Session,
    guild_id: &str,
    view: GuildView,
    page: PageArgs,
    sort: Option<BattleSort>,
    range: Option<KillRange>,
) -> Result<()> {
    let client = session.client();
    if view.members {
        session.emit(client.guild_members(guild_id)).await
    } else if view.detailed {
        session.emit(client.guild_detailed_info(guild_id)).await
    } else if view.stats {
        session.emit(client.guild_gvg_stats(guild_id)).await
    } else if view.events {
        session
            .emit(client.guild_recent_events(guild_id, page.pagination()))
            .await
    } else if view.battles {
        session
            .emit(client.guild_recent_battles(guild_id, page.battles(sort)))
            .await
    } else if view.top {
        session
            .emit(client.guild_top_kills(guild_id, page.top_kills(range)))
            .await
    } else if view.matches {
        session
            .emit(client.guild_recent_matches(guild_id, page.pagination()))
            .await
    } else {
        session.emit(client.guild_info(guild_id)).await
    }
}

/// Show kill events between two guilds.
pub(crate) async fn feud(session: &Session, guild_id: &str, other_guild_id: &str) -> Result<()> {
    session
        .emit(session.client().guild_feud(guild_id, other_guild_id))
        .await
}
