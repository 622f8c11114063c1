//! Crystal League and guild match commands.

use anyhow::Result;

use super::Session;
use crate::args::PageArgs;

/// List recent Crystal League matches, regular or city.
pub(crate) async fn crystal_league(session: &Session, city: bool, page: PageArgs) -> Result<()> {
    let client = session.client();
    let params = page.pagination();
    if city {
        session
            .emit(client.recent_crystal_league_city_matches(params))
            .await
    } else {
        session.emit(client.recent_crystal_league_matches(params)).await
    }
}

pub(crate) async fn guild_match(session: &Session, match_id: &str) -> Result<()> {
    session.emit(session.client().guild_match_info(match_id)).await
}
