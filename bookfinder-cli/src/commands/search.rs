//! Search command implementation

use super::{catalog, spinner};
use crate::render;
use anyhow::Result;
use bookfinder_core::{BookCard, Config, SearchController};

/// Run one title search and print the results
pub async fn search(config: &Config, title: &str, json: bool) -> Result<()> {
    let catalog = catalog(config)?;
    let mut controller = SearchController::new(config.search_limit);

    match controller.begin(title) {
        Some(request) => {
            let pb = spinner(format!("Searching for \"{}\"...", request.query));
            let response = request.fetch(catalog.as_ref()).await;
            controller.complete(response);
            pb.finish_and_clear();
        }
        None => tracing::debug!("Blank query, nothing to search"),
    }

    let cards: Vec<BookCard> = controller
        .results()
        .iter()
        .map(|book| BookCard::new(book, &config.covers_url, false))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
        render::print_cards(&cards);
    }

    Ok(())
}
