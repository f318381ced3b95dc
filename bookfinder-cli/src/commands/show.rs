//! Show command implementation

use super::{catalog, spinner};
use crate::render;
use anyhow::Result;
use bookfinder_core::{Config, DetailController, DetailPanel};

/// Fetch and print the details of one work
pub async fn show(config: &Config, key: &str, json: bool) -> Result<()> {
    let catalog = catalog(config)?;
    let mut controller = DetailController::new();

    let pb = spinner("Loading book details...");
    controller.show(catalog.as_ref(), key).await;
    pb.finish_and_clear();

    let panel = controller
        .selected()
        .map(|detail| DetailPanel::new(detail, &config.covers_url));

    if json {
        println!("{}", serde_json::to_string_pretty(&panel)?);
    } else {
        match &panel {
            Some(panel) => render::print_panel(panel),
            None => println!("No details available"),
        }
    }

    Ok(())
}
