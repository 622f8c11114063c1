//! Battle and kill event commands.

use albion_sdk::prelude::*;
use anyhow::Result;

use super::Session;
use crate::args::{PageArgs, RankingArgs};

/// Page size the battle event endpoint accepts at most.
const BATTLE_EVENTS_PAGE: u32 = 51;

pub(crate) async fn battles(
    session: &Session,
    page: PageArgs,
    sort: Option<BattleSort>,
) -> Result<()> {
    session
        .emit(session.client().recent_battles(page.battles(sort)))
        .await
}

/// Show a battle, or one page of its kill events.
pub(crate) async fn battle(
    session: &Session,
    battle_id: u64,
    events: bool,
    page: PageArgs,
) -> Result<()> {
    let client = session.client();
    if events {
        let limit = page.limit.unwrap_or(BATTLE_EVENTS_PAGE);
        let offset = page.offset.unwrap_or(0);
        session
            .emit(client.battle_events(battle_id, limit, offset))
            .await
    } else {
        session.emit(client.battle_info(battle_id)).await
    }
}

pub(crate) async fn events(session: &Session, page: PageArgs) -> Result<()> {
    session
        .emit(session.client().recent_events(page.pagination()))
        .await
}

pub(crate) async fn top_events(session: &Session, ranking: RankingArgs) -> Result<()> {
    session
        .emit(session.client().recent_top_events(ranking.params()))
        .await
}

pub(crate) async fn event(session: &Session, event_id: u64) -> Result<()> {
    session.emit(session.client().event_info(event_id)).await
}
