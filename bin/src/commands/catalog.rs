//! Search, alliance and static catalogue commands.

use anyhow::Result;

use super::Session;

/// Search players and guilds by name prefix.
pub(crate) async fn search(session: &Session, term: &str) -> Result<()> {
    session.emit(session.client().search(term)).await
}

pub(crate) async fn alliance(session: &Session, alliance_id: &str) -> Result<()> {
    session.emit(session.client().alliance_info(alliance_id)).await
}

pub(crate) async fn weapon_categories(session: &Session) -> Result<()> {
    session.emit(session.client().weapon_categories()).await
}

pub(crate) async fn item_categories(session: &Session) -> Result<()> {
    session.emit(session.client().item_category_tree()).await
}
