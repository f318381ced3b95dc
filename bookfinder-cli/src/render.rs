//! Plain-text rendering of view models

use bookfinder_core::{BookCard, DetailPanel, Session, Tab};

/// Print a numbered result list
pub fn print_cards(cards: &[BookCard]) {
    if cards.is_empty() {
        println!("No results");
        return;
    }

    for (i, card) in cards.iter().enumerate() {
        let heart = if card.favorite { "♥" } else { " " };
        println!("{:>3}. {} {}", i + 1, heart, card.title);
        if let Some(author) = &card.byline {
            println!("        by {}", author);
        }
        if let Some(year) = card.published {
            println!("        Published: {}", year);
        }
        println!("        {}", card.key);
    }
}

/// Print the detail modal contents
pub fn print_panel(panel: &DetailPanel) {
    println!("{}", panel.title);
    println!("{}", "=".repeat(panel.title.chars().count().max(1)));
    if let Some(authors) = &panel.authors {
        println!("by {}", authors);
    }
    if let Some(year) = panel.published {
        println!("Published:   {}", year);
    }
    if let Some(publisher) = &panel.publisher {
        println!("Publisher:   {}", publisher);
    }
    if !panel.subjects.is_empty() {
        println!("Subjects:    {}", panel.subjects.join(", "));
    }
    if let Some(url) = &panel.cover_url {
        println!("Cover:       {}", url);
    }
    if let Some(description) = &panel.description {
        println!();
        println!("{}", description);
    }
}

/// Print the whole interactive screen
pub fn print_session(session: &Session) {
    let favorites = session.favorite_count();
    match session.tab() {
        Tab::Search => {
            let status = if session.is_searching() {
                " (searching...)"
            } else {
                ""
            };
            println!();
            println!(
                "-- Search: \"{}\"{} -- favorites: {}",
                session.query(),
                status,
                favorites
            );
        }
        Tab::Favorites => {
            println!();
            println!("-- Your Favorite Books ({}) --", favorites);
        }
    }

    let cards = session.cards();
    if cards.is_empty() && session.tab() == Tab::Favorites {
        println!("No favorite books yet");
    } else {
        print_cards(&cards);
    }

    let detail = session.detail();
    if detail.is_open() {
        println!();
        if detail.is_loading() {
            println!("Loading book details...");
        } else {
            match session.detail_panel() {
                Some(panel) => print_panel(&panel),
                None => println!("No details available"),
            }
        }
    }
}
