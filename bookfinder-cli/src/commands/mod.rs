//! CLI command implementations

mod browse;
mod cover;
mod search;
mod show;

pub use browse::browse;
pub use cover::cover;
pub use search::search;
pub use show::show;

use anyhow::{Context, Result};
use bookfinder_core::{CatalogClient, Config, OpenLibraryClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Build the catalog client for the configured endpoint
fn catalog(config: &Config) -> Result<Arc<dyn CatalogClient>> {
    let client = OpenLibraryClient::from_config(config)
        .with_context(|| format!("Failed to create HTTP client for {}", config.api_url))?;
    Ok(Arc::new(client))
}

/// Spinner shown while a request is in flight
fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
