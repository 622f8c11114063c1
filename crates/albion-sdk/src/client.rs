//! The gameinfo API client.

use albion_fetch::{ClientConfig, Executor, url::build_url};
use albion_types::{
    Alliance, AlbionError, Battle, BattleParams, CrystalLeagueCategory, CrystalLeagueMatch,
    DetailedGuildInfo, EndpointTarget, Event, GuildInfo, GuildMatch, GvgStats, ItemCategoryTree,
    PaginationParams, Player, QueryParams, Region, Result, SearchResponse, ToQuery,
    TopKillsParams, WeaponCategory, encode_path_segment,
};

use crate::{Call, StatusCall};

/// Client for one Albion Online server.
///
/// Holds only the target's base URLs and a shared HTTP executor, so it can be
/// cloned freely and used from many tasks at once.
///
/// # Example
///
/// ```ignore
/// let client = AlbionClient::new(Region::Americas)?;
/// let player = client.player_info("Lw1tG5G9TkWd7pNdQxYpkA").await?;
/// ```
#[derive(Debug, Clone)]
pub struct AlbionClient {
    target: EndpointTarget,
    executor: Executor,
}

impl AlbionClient {
    /// Creates a client for a region's public hosts.
    ///
    /// # Errors
    ///
    /// Returns [`AlbionError::Transport`] if the HTTP client cannot be built.
    pub fn new(region: Region) -> Result<Self> {
        Self::with_config(region, ClientConfig::default())
    }

    /// Creates a client from a region name such as `"europe"` or `"asia"`.
    ///
    /// # Errors
    ///
    /// Returns [`AlbionError::InvalidRegion`] for an unknown name, before any
    /// HTTP machinery is created.
    pub fn from_region_name(name: &str) -> Result<Self> {
        let region: Region = name.parse()?;
        Self::new(region)
    }

    /// Creates a client for explicit hosts, e.g. a mirror or a test double.
    ///
    /// # Errors
    ///
    /// Returns [`AlbionError::Transport`] if the HTTP client cannot be built.
    pub fn with_target(target: EndpointTarget) -> Result<Self> {
        Self::with_config(target, ClientConfig::default())
    }

    /// Creates a client with a custom executor configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AlbionError::Transport`] if the HTTP client cannot be built.
    pub fn with_config(target: impl Into<EndpointTarget>, config: ClientConfig) -> Result<Self> {
        let target = target.into();
        let executor = Executor::new(config).map_err(|e| {
            AlbionError::transport(target.api_url(), "failed to build HTTP client", e)
        })?;
        Ok(Self { target, executor })
    }

    /// Returns the hosts this client talks to.
    #[must_use]
    pub const fn target(&self) -> &EndpointTarget {
        &self.target
    }

    /// Returns the underlying executor.
    #[must_use]
    pub const fn executor(&self) -> &Executor {
        &self.executor
    }

    fn call<T>(&self, path: &str, query: Option<&QueryParams>) -> Call<'_, T> {
        Call::new(&self.executor, build_url(self.target.api_url(), path, query))
    }

    fn call_with<T>(&self, path: &str, params: &impl ToQuery) -> Call<'_, T> {
        self.call(path, Some(&params.to_query()))
    }

    /// Probes the server status host.
    pub fn server_status(&self) -> StatusCall<'_> {
        StatusCall::new(&self.executor, self.target.status_url().to_string())
    }

    /// Searches players and guilds by name prefix.
    pub fn search(&self, term: &str) -> Call<'_, SearchResponse> {
        let mut query = QueryParams::new();
        query.append("q", term);
        self.call("/search", Some(&query))
    }

    // Players

    /// Looks up a player.
    pub fn player_info(&self, player_id: &str) -> Call<'_, Player> {
        self.call(&player_path(player_id, ""), None)
    }

    /// Latest kills of a player.
    pub fn player_latest_kills(&self, player_id: &str) -> Call<'_, Vec<Event>> {
        self.call(&player_path(player_id, "/kills"), None)
    }

    /// Latest deaths of a player.
    pub fn player_latest_deaths(&self, player_id: &str) -> Call<'_, Vec<Event>> {
        self.call(&player_path(player_id, "/deaths"), None)
    }

    /// Highest-fame kills of a player.
    pub fn player_top_kills(
        &self,
        player_id: &str,
        params: Option<TopKillsParams>,
    ) -> Call<'_, Vec<Event>> {
        self.call_with(&player_path(player_id, "/topkills"), &params)
    }

    /// Highest-fame solo kills of a player.
    pub fn player_top_solo_kills(
        &self,
        player_id: &str,
        params: Option<TopKillsParams>,
    ) -> Call<'_, Vec<Event>> {
        self.call_with(&player_path(player_id, "/solokills"), &params)
    }

    // Guilds

    /// Looks up a guild.
    pub fn guild_info(&self, guild_id: &str) -> Call<'_, GuildInfo> {
        self.call(&guild_path(guild_id, ""), None)
    }

    /// Guild record with overall statistics and top players.
    pub fn guild_detailed_info(&self, guild_id: &str) -> Call<'_, DetailedGuildInfo> {
        self.call(&guild_path(guild_id, "/data"), None)
    }

    /// Current members of a guild.
    pub fn guild_members(&self, guild_id: &str) -> Call<'_, Vec<Player>> {
        self.call(&guild_path(guild_id, "/members"), None)
    }

    /// Guild-vs-guild statistics of a guild.
    pub fn guild_gvg_stats(&self, guild_id: &str) -> Call<'_, GvgStats> {
        self.call(&guild_path(guild_id, "/stats"), None)
    }

    /// Kill events between two guilds.
    pub fn guild_feud(&self, guild_id: &str, other_guild_id: &str) -> Call<'_, Vec<Event>> {
        let suffix = format!("/fued/{}", encode_path_segment(other_guild_id));
        self.call(&guild_path(guild_id, &suffix), None)
    }

    /// Recent kill events involving a guild.
    pub fn guild_recent_events(
        &self,
        guild_id: &str,
        params: Option<PaginationParams>,
    ) -> Call<'_, Vec<Event>> {
        self.call("/events", Some(&guild_query(guild_id, &params)))
    }

    /// Recent battles involving a guild.
    pub fn guild_recent_battles(
        &self,
        guild_id: &str,
        params: Option<BattleParams>,
    ) -> Call<'_, Vec<Battle>> {
        self.call("/battles", Some(&guild_query(guild_id, &params)))
    }

    /// Highest-fame kills of a guild.
    pub fn guild_top_kills(
        &self,
        guild_id: &str,
        params: Option<TopKillsParams>,
    ) -> Call<'_, Vec<Event>> {
        self.call_with(&guild_path(guild_id, "/top"), &params)
    }

    /// Past guild matches of a guild.
    pub fn guild_recent_matches(
        &self,
        guild_id: &str,
        params: Option<PaginationParams>,
    ) -> Call<'_, Vec<GuildMatch>> {
        self.call("/guildmatches/past", Some(&guild_query(guild_id, &params)))
    }

    /// Looks up a guild match.
    pub fn guild_match_info(&self, match_id: &str) -> Call<'_, GuildMatch> {
        self.call(
            &format!("/guildmatches/{}", encode_path_segment(match_id)),
            None,
        )
    }

    // Alliances

    /// Looks up an alliance.
    pub fn alliance_info(&self, alliance_id: &str) -> Call<'_, Alliance> {
        self.call(
            &format!("/alliances/{}", encode_path_segment(alliance_id)),
            None,
        )
    }

    // Battles and events

    /// Recent battles server-wide.
    pub fn recent_battles(&self, params: Option<BattleParams>) -> Call<'_, Vec<Battle>> {
        self.call_with("/battles", &params)
    }

    /// Looks up a battle.
    pub fn battle_info(&self, battle_id: u64) -> Call<'_, Battle> {
        self.call(&format!("/battles/{battle_id}"), None)
    }

    /// Kill events of a battle, one page at a time.
    pub fn battle_events(&self, battle_id: u64, limit: u32, offset: u32) -> Call<'_, Vec<Event>> {
        let mut query = QueryParams::new();
        query.append("offset", offset).append("limit", limit);
        self.call(&format!("/battle/{battle_id}"), Some(&query))
    }

    /// Recent kill events server-wide.
    pub fn recent_events(&self, params: Option<PaginationParams>) -> Call<'_, Vec<Event>> {
        self.call_with("/events", &params)
    }

    /// Highest-fame kill events server-wide.
    pub fn recent_top_events(&self, params: Option<TopKillsParams>) -> Call<'_, Vec<Event>> {
        self.call_with("/events/killfame", &params)
    }

    /// Looks up a kill event.
    pub fn event_info(&self, event_id: u64) -> Call<'_, Event> {
        self.call(&format!("/events/{event_id}"), None)
    }

    // Crystal League

    /// Recent Crystal League matches.
    pub fn recent_crystal_league_matches(
        &self,
        params: Option<PaginationParams>,
    ) -> Call<'_, Vec<CrystalLeagueMatch>> {
        self.crystal_league(CrystalLeagueCategory::CrystalLeague, params)
    }

    /// Recent Crystal League city matches.
    pub fn recent_crystal_league_city_matches(
        &self,
        params: Option<PaginationParams>,
    ) -> Call<'_, Vec<CrystalLeagueMatch>> {
        self.crystal_league(CrystalLeagueCategory::CrystalLeagueCity, params)
    }

    fn crystal_league(
        &self,
        category: CrystalLeagueCategory,
        params: Option<PaginationParams>,
    ) -> Call<'_, Vec<CrystalLeagueMatch>> {
        let mut query = QueryParams::new();
        query.append("category", category).extend_from(&params);
        self.call("/matches/crystalleague", Some(&query))
    }

    // Items

    /// Weapon categories.
    pub fn weapon_categories(&self) -> Call<'_, Vec<WeaponCategory>> {
        self.call("/items/_weaponcategories", None)
    }

    /// The item category tree.
    pub fn item_category_tree(&self) -> Call<'_, ItemCategoryTree> {
        self.call("/items/_itemCategoryTree", None)
    }
}

fn player_path(player_id: &str, suffix: &str) -> String {
    format!("/players/{}{suffix}", encode_path_segment(player_id))
}

fn guild_path(guild_id: &str, suffix: &str) -> String {
    format!("/guilds/{}{suffix}", encode_path_segment(guild_id))
}

/// `guildId` first, then the endpoint's own parameters.
fn guild_query(guild_id: &str, params: &impl ToQuery) -> QueryParams {
    let mut query = QueryParams::new();
    query.append("guildId", guild_id).extend_from(params);
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use albion_types::{BattleSort, KillRange};

    fn client() -> AlbionClient {
        AlbionClient::new(Region::Americas).unwrap()
    }

    const BASE: &str = "https://gameinfo.albiononline.com/api/gameinfo";

    #[test]
    fn test_unknown_region_name_fails() {
        let err = AlbionClient::from_region_name("Atlantis").unwrap_err();
        assert!(matches!(err, AlbionError::InvalidRegion(ref name) if name == "Atlantis"));
    }

    #[test]
    fn test_region_name_selects_hosts() {
        let client = AlbionClient::from_region_name("europe").unwrap();
        assert_eq!(client.target(), &Region::Europe.target());
    }

    #[test]
    fn test_search_encodes_term() {
        let client = client();
        let call = client.search("Big Bad");
        assert_eq!(call.url(), format!("{BASE}/search?q=Big+Bad"));
    }

    #[test]
    fn test_player_paths() {
        let client = client();
        assert_eq!(client.player_info("abc").url(), format!("{BASE}/players/abc"));
        assert_eq!(
            client.player_latest_deaths("abc").url(),
            format!("{BASE}/players/abc/deaths")
        );
        assert_eq!(
            client.player_top_solo_kills("abc", None).url(),
            format!("{BASE}/players/abc/solokills")
        );
    }

    #[test]
    fn test_top_kills_query() {
        let params = TopKillsParams {
            range: Some(KillRange::LastWeek),
            limit: Some(10),
            offset: None,
        };
        assert_eq!(
            client().player_top_kills("abc", Some(params)).url(),
            format!("{BASE}/players/abc/topkills?range=lastWeek&limit=10")
        );
    }

    #[test]
    fn test_guild_queries_lead_with_guild_id() {
        let client = client();
        let params = BattleParams {
            limit: Some(20),
            offset: Some(0),
            sort: Some(BattleSort::TopFame),
        };
        assert_eq!(
            client.guild_recent_battles("g1", Some(params)).url(),
            format!("{BASE}/battles?guildId=g1&limit=20&offset=0&sort=topfame")
        );
        assert_eq!(
            client.guild_recent_events("g1", None).url(),
            format!("{BASE}/events?guildId=g1")
        );
        assert_eq!(
            client
                .guild_recent_matches("g1", Some(PaginationParams::new(5, 10)))
                .url(),
            format!("{BASE}/guildmatches/past?guildId=g1&limit=5&offset=10")
        );
    }

    #[test]
    fn test_guild_feud_path() {
        assert_eq!(
            client().guild_feud("a b", "c").url(),
            format!("{BASE}/guilds/a%20b/fued/c")
        );
    }

    #[test]
    fn test_battle_events_offset_first() {
        assert_eq!(
            client().battle_events(42, 50, 100).url(),
            format!("{BASE}/battle/42?offset=100&limit=50")
        );
    }

    #[test]
    fn test_crystal_league_category_first() {
        let client = client();
        assert_eq!(
            client.recent_crystal_league_matches(None).url(),
            format!("{BASE}/matches/crystalleague?category=crystal_league")
        );
        assert_eq!(
            client
                .recent_crystal_league_city_matches(Some(PaginationParams::new(10, 0)))
                .url(),
            format!("{BASE}/matches/crystalleague?category=crystal_league_city&limit=10&offset=0")
        );
    }

    #[test]
    fn test_item_catalogue_paths() {
        let client = client();
        assert_eq!(
            client.weapon_categories().url(),
            format!("{BASE}/items/_weaponcategories")
        );
        assert_eq!(
            client.item_category_tree().url(),
            format!("{BASE}/items/_itemCategoryTree")
        );
    }

    #[test]
    fn test_status_call_uses_status_host() {
        let client = AlbionClient::new(Region::Asia).unwrap();
        assert_eq!(client.server_status().url(), Region::Asia.status_url());
    }
}
