use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spiceroute_core::category::CategoryKind;
use spiceroute_core::filter::FilterDimension;
use spiceroute_core::ingredient::IndexLetter;

mod commands;
mod context;
mod helper;
mod logging;
mod render;

use context::AppContext;

#[derive(Parser)]
#[command(name = "spiceroute")]
#[command(about = "SpiceRoute - browse world recipes and chat with the recipe assistant", long_about = None)]
struct Cli {
    /// Recipe API base URL (overrides config.toml and SPICEROUTE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding config.toml and state.toml
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Keep the chat session id in memory instead of state.toml
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show featured recipes
    Home,
    /// List recipes matching a filter query
    Recipes {
        /// Query string or list URL, e.g. "country=Thailand&method=Wokken"
        query: Option<String>,

        /// Page to show (clamped to the available pages)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Toggle a filter value before listing, as dimension=value
        #[arg(long = "toggle", value_parser = parse_toggle)]
        toggles: Vec<(FilterDimension, String)>,
    },
    /// Browse recipes interactively
    Browse {
        /// Starting query string or list URL
        query: Option<String>,
    },
    /// Show one recipe
    Recipe {
        /// Recipe id, or the path segments of a detail route
        #[arg(required = true, num_args = 1..)]
        id: Vec<String>,
    },
    /// Show category tiles
    Categories {
        /// country, region, method or main_ingredient
        #[arg(long, default_value = "country")]
        kind: CategoryKind,
    },
    /// Show the A-Z ingredient index
    Ingredients {
        /// Restrict to one letter
        #[arg(long, value_parser = parse_letter)]
        letter: Option<IndexLetter>,

        /// Only show ingredients containing this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the filter options offered by the backend
    Filters,
    /// Chat with the recipe assistant
    Chat {
        /// Send a single message and exit instead of starting the REPL
        message: Option<String>,
    },
}

fn parse_toggle(raw: &str) -> Result<(FilterDimension, String), String> {
    let (dimension, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected dimension=value, got '{}'", raw))?;
    let dimension = dimension.parse::<FilterDimension>().map_err(|e| e.to_string())?;
    Ok((dimension, value.to_string()))
}

fn parse_letter(raw: &str) -> Result<IndexLetter, String> {
    IndexLetter::parse(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let ctx = AppContext::build(cli.api_url.as_deref(), cli.config_dir, cli.ephemeral)?;

    match cli.command {
        Commands::Home => commands::catalog::home(&ctx).await?,
        Commands::Recipes {
            query,
            page,
            toggles,
        } => commands::list::show(&ctx, query.as_deref(), page, &toggles).await?,
        Commands::Browse { query } => commands::list::browse(&ctx, query.as_deref()).await?,
        Commands::Recipe { id } => commands::detail::show(&ctx, &id).await?,
        Commands::Categories { kind } => commands::catalog::categories(&ctx, kind).await?,
        Commands::Ingredients { letter, search } => {
            commands::catalog::ingredients(&ctx, letter, search.as_deref()).await?
        }
        Commands::Filters => commands::catalog::filters(&ctx).await?,
        Commands::Chat { message } => commands::chat::run(&ctx, message.as_deref()).await?,
    }

    Ok(())
}
