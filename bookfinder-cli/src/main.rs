//! Bookfinder CLI - Search the Open Library catalog from the terminal

mod commands;
mod render;

use anyhow::{Context, Result};
use bookfinder_core::{Config, CoverSize};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate the result limit (must be at least 1)
fn parse_limit(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("limit must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookfinder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search books by title
    Search {
        /// Title to search for
        title: String,

        /// Maximum number of results (defaults to BOOKFINDER_SEARCH_LIMIT or 12)
        #[arg(short, long, value_parser = parse_limit)]
        limit: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a work
    Show {
        /// Catalog key, e.g. /works/OL45883W
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the cover image URL for a cover id
    Cover {
        /// Cover id from a search result
        id: i64,

        /// Image size (s, m, l)
        #[arg(short, long, default_value = "m")]
        size: CoverSize,
    },

    /// Interactive search session reading from stdin
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookfinder_cli=debug,bookfinder_core=debug"
    } else {
        "bookfinder_cli=info,bookfinder_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env().context("Invalid BOOKFINDER_* environment")?;

    match cli.command {
        Commands::Search { title, limit, json } => {
            if let Some(limit) = limit {
                config.search_limit = limit;
            }
            commands::search(&config, &title, json).await
        }

        Commands::Show { key, json } => commands::show(&config, &key, json).await,

        Commands::Cover { id, size } => commands::cover(&config, id, size),

        Commands::Browse => commands::browse(&config).await,
    }
}
