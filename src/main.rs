mod commands;
mod error;
mod models;
mod summarize;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use summarize::DEFAULT_LOOKBACK;

#[derive(Parser)]
#[command(name = "cards")]
#[command(about = "Summarize text and preview collection cards and community pages")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text to a character budget
    Summarize {
        /// Text to summarize (reads stdin when omitted or '-')
        text: Option<String>,
        /// Maximum characters kept before the ellipsis
        #[arg(short, long, default_value_t = summarize::TITLE_BUDGET)]
        budget: usize,
        /// Characters before the cutoff searched for a word boundary
        #[arg(long, default_value_t = DEFAULT_LOOKBACK)]
        lookback: usize,
    },

    /// Show the card for a collection JSON record
    Card {
        /// Path to the collection JSON
        file: PathBuf,
        /// Local ID of the community the collection belongs to
        #[arg(short, long)]
        community: i64,
        /// Print the card as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the community page for a community query JSON result
    Community {
        /// Path to the query result JSON
        file: PathBuf,
        /// Selected tab (collections, discussion)
        #[arg(short, long)]
        tab: Option<String>,
        /// Print the page state as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            text,
            budget,
            lookback,
        } => commands::summarize::run(text.as_deref(), budget, lookback),

        Commands::Card {
            file,
            community,
            json,
        } => commands::card::run(&file, community, json),

        Commands::Community { file, tab, json } => {
            commands::community::run(&file, tab.as_deref(), json)
        }
    }
}
