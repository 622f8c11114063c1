//! Player lookup command.

use anyhow::Result;

use super::Session;
use crate::args::{PlayerView, RankingArgs};

/// Show a player record, or one of their kill/death listings.
pub(crate) async fn player(
    session: &Session,
    player_id: &str,
    view: PlayerView,
    ranking: RankingArgs,
) -> Result<()> {
    let client = session.client();
    if view.kills {
        session.emit(client.player_latest_kills(player_id)).await
    } else if view.deaths {
        session.emit(client.player_latest_deaths(player_id)).await
    } else if view.top {
        session
            .emit(client.player_top_kills(player_id, ranking.params()))
            .await
    } else if view.solo {
        session
            .emit(client.player_top_solo_kills(player_id, ranking.params()))
            .await
    } else {
        session.emit(client.player_info(player_id)).await
    }
}
