//! Argument groups shared by several subcommands.

use albion_sdk::prelude::*;
use clap::{Args, Subcommand};

/// Paging flags for list endpoints.
#[derive(Args, Clone, Copy)]
pub(crate) struct PageArgs {
    /// Maximum number of entries
    #[arg(long)]
    pub(crate) limit: Option<u32>,

    /// Number of entries to skip
    #[arg(long)]
    pub(crate) offset: Option<u32>,
}

impl PageArgs {
    /// Returns `None` when neither flag was given.
    pub(crate) const fn pagination(&self) -> Option<PaginationParams> {
        if self.limit.is_none() && self.offset.is_none() {
            None
        } else {
            Some(PaginationParams {
                limit: self.limit,
                offset: self.offset,
            })
        }
    }

    pub(crate) const fn battles(&self, sort: Option<BattleSort>) -> Option<BattleParams> {
        if self.limit.is_none() && self.offset.is_none() && sort.is_none() {
            None
        } else {
            Some(BattleParams {
                limit: self.limit,
                offset: self.offset,
                sort,
            })
        }
    }

    pub(crate) const fn top_kills(&self, range: Option<KillRange>) -> Option<TopKillsParams> {
        if self.limit.is_none() && self.offset.is_none() && range.is_none() {
            None
        } else {
            Some(TopKillsParams {
                range,
                limit: self.limit,
                offset: self.offset,
            })
        }
    }
}

/// Flags for kill-fame rankings.
#[derive(Args, Clone, Copy)]
pub(crate) struct RankingArgs {
    /// Ranking window (day, week, month, lastWeek, lastMonth)
    #[arg(long)]
    pub(crate) range: Option<KillRange>,

    #[command(flatten)]
    pub(crate) page: PageArgs,
}

impl RankingArgs {
    pub(crate) const fn params(&self) -> Option<TopKillsParams> {
        self.page.top_kills(self.range)
    }
}

/// Which player record to show.
#[derive(Args, Clone, Copy)]
#[group(multiple = false)]
pub(crate) struct PlayerView {
    /// Latest kills
    #[arg(long)]
    pub(crate) kills: bool,

    /// Latest deaths
    #[arg(long)]
    pub(crate) deaths: bool,

    /// Highest-fame kills
    #[arg(long)]
    pub(crate) top: bool,

    /// Highest-fame solo kills
    #[arg(long)]
    pub(crate) solo: bool,
}

/// Which guild record to show.
#[derive(Args, Clone, Copy)]
#[group(multiple = false)]
pub(crate) struct GuildView {
    /// Current members
    #[arg(long)]
    pub(crate) members: bool,

    /// Overall statistics and top players
    #[arg(long)]
    pub(crate) detailed: bool,

    /// Guild-vs-guild statistics
    #[arg(long)]
    pub(crate) stats: bool,

    /// Recent kill events
    #[arg(long)]
    pub(crate) events: bool,

    /// Recent battles
    #[arg(long)]
    pub(crate) battles: bool,

    /// Highest-fame kills
    #[arg(long)]
    pub(crate) top: bool,

    /// Past guild matches
    #[arg(long)]
    pub(crate) matches: bool,
}

/// Render service icon kinds.
#[derive(Subcommand)]
pub(crate) enum IconKind {
    /// Item icon
    Item {
        /// Item identifier (e.g., T4_BAG) or localized name
        item: String,

        /// Enchantment level (0-4)
        #[arg(short, long)]
        enchantment: Option<u8>,

        /// Quality tier (1-5)
        #[arg(short, long)]
        quality: Option<u8>,

        /// Icon size in pixels (1-217)
        #[arg(short, long)]
        size: Option<u16>,

        /// Locale for localized names (e.g., en, de)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Spell icon
    Spell {
        /// Spell identifier
        spell: String,

        /// Icon size in pixels (1-217)
        #[arg(short, long)]
        size: Option<u16>,

        /// Locale for localized names
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Wardrobe icon
    Wardrobe {
        /// Wardrobe item identifier
        item: String,
    },

    /// Destiny board node icon
    Destiny {
        /// Destiny board node identifier
        node: String,

        /// Icon size in pixels (1-217)
        #[arg(short, long)]
        size: Option<u16>,

        /// Locale for localized names
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Guild logo
    GuildLogo {
        /// Symbol code (e.g., TREE)
        symbol: String,

        /// Icon size in pixels (1-217)
        #[arg(short, long)]
        size: Option<u16>,

        /// Logo scheme code
        #[arg(long = "type")]
        logo_type: Option<u8>,

        /// Background motif color
        #[arg(long)]
        motif_color: Option<String>,

        /// Symbol color
        #[arg(long)]
        symbol_color: Option<String>,

        /// Symbol scale factor
        #[arg(long)]
        symbol_scale: Option<f32>,
    },
}
