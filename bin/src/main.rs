//! albion CLI - Query the Albion Online gameinfo API from the command line.

use std::time::Duration;

use albion_sdk::prelude::*;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod display;

use args::{GuildView, IconKind, PageArgs, PlayerView, RankingArgs};
use commands::Session;

#[derive(Parser)]
#[command(name = "albion")]
#[command(about = "Query the Albion Online killboard and gameinfo API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Server region (americas, asia, europe)
    #[arg(short, long, default_value = "americas", global = true)]
    region: String,

    /// Abort requests that take longer than this many milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Api(ApiCommand),

    /// Print a render service icon URL (no request is made)
    Icon {
        #[command(subcommand)]
        kind: IconKind,
    },
}

/// Subcommands that talk to the gameinfo or status hosts.
#[derive(Subcommand)]
enum ApiCommand {
    /// Show the server status
    Status,

    /// Search players and guilds by name
    Search {
        /// Name or name prefix
        term: String,
    },

    /// Show a player, or their kills and deaths
    Player {
        /// Player identifier
        id: String,

        #[command(flatten)]
        view: PlayerView,

        #[command(flatten)]
        ranking: RankingArgs,
    },

    /// Show a guild, its members, statistics or recent activity
    Guild {
        /// Guild identifier
        id: String,

        #[command(flatten)]
        view: GuildView,

        #[command(flatten)]
        page: PageArgs,

        /// Battle sort order (recent, topfame), used with --battles
        #[arg(long)]
        sort: Option<BattleSort>,

        /// Ranking window (day, week, month, lastWeek, lastMonth), used with --top
        #[arg(long)]
        range: Option<KillRange>,
    },

    /// Show kills between two guilds
    Feud {
        /// First guild identifier
        guild: String,

        /// Second guild identifier
        other_guild: String,
    },

    /// Show an alliance
    Alliance {
        /// Alliance identifier
        id: String,
    },

    /// List recent battles
    Battles {
        #[command(flatten)]
        page: PageArgs,

        /// Sort order (recent, topfame)
        #[arg(long)]
        sort: Option<BattleSort>,
    },

    /// Show a battle, or its kill events
    Battle {
        /// Battle identifier
        id: u64,

        /// List the battle's kill events instead
        #[arg(long)]
        events: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List recent kill events
    Events {
        #[command(flatten)]
        page: PageArgs,
    },

    /// List the highest-fame kill events
    TopEvents {
        #[command(flatten)]
        ranking: RankingArgs,
    },

    /// Show a kill event
    Event {
        /// Event identifier
        id: u64,
    },

    /// List recent Crystal League matches
    CrystalLeague {
        /// City matches instead of regular ones
        #[arg(long)]
        city: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a guild match
    GuildMatch {
        /// Match identifier
        id: String,
    },

    /// List weapon categories
    WeaponCategories,

    /// Show the item category tree
    ItemCategories,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Cancels in-flight requests on Ctrl-C.
fn cancel_on_interrupt() -> CancelToken {
    let token = CancelToken::new();
    let on_interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted, cancelling request");
            on_interrupt.cancel();
        }
    });
    token
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Icon { kind } => commands::icon::icon(kind),
        Commands::Api(command) => {
            let timeout = cli.timeout_ms.map(Duration::from_millis);
            let session = Session::new(&cli.region, timeout, cancel_on_interrupt())?;
            run(&session, command).await
        }
    }
}

async fn run(session: &Session, command: ApiCommand) -> Result<()> {
    match command {
        ApiCommand::Status => commands::status::status(session).await,
        ApiCommand::Search { term } => commands::catalog::search(session, &term).await,
        ApiCommand::Player { id, view, ranking } => {
            commands::player::player(session, &id, view, ranking).await
        }
        ApiCommand::Guild {
            id,
            view,
            page,
            sort,
            range,
        } => commands::guild::guild(session, &id, view, page, sort, range).await,
        ApiCommand::Feud { guild, other_guild } => {
            commands::guild::feud(session, &guild, &other_guild).await
        }
        ApiCommand::Alliance { id } => commands::catalog::alliance(session, &id).await,
        ApiCommand::Battles { page, sort } => commands::killboard::battles(session, page, sort).await,
        ApiCommand::Battle { id, events, page } => {
            commands::killboard::battle(session, id, events, page).await
        }
        ApiCommand::Events { page } => commands::killboard::events(session, page).await,
        ApiCommand::TopEvents { ranking } => commands::killboard::top_events(session, ranking).await,
        ApiCommand::Event { id } => commands::killboard::event(session, id).await,
        ApiCommand::CrystalLeague { city, page } => {
            commands::matches::crystal_league(session, city, page).await
        }
        ApiCommand::GuildMatch { id } => commands::matches::guild_match(session, &id).await,
        ApiCommand::WeaponCategories => commands::catalog::weapon_categories(session).await,
        ApiCommand::ItemCategories => commands::catalog::item_categories(session).await,
    }
}
