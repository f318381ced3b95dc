//! Session behaviour tests
//!
//! Drives a [`Session`] against a scripted catalog with per-request delays.
//! All tests run on a paused clock, so delays are exact and instant.

use async_trait::async_trait;
use bookfinder_core::{
    BookDetail, BookSummary, CatalogClient, CatalogError, CatalogResult, Config, Description,
    Session, Tab, Update,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// Scripted catalog
// =============================================================================

#[derive(Default)]
struct ScriptedCatalog {
    searches: HashMap<String, (Duration, Vec<BookSummary>)>,
    works: HashMap<String, (Duration, BookDetail)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedCatalog {
    fn search(mut self, query: &str, delay_ms: u64, keys: &[&str]) -> Self {
        let books = keys
            .iter()
            .map(|key| BookSummary::new(format!("/works/{}", key), format!("{} book", key)))
            .collect();
        self.searches
            .insert(query.to_string(), (Duration::from_millis(delay_ms), books));
        self
    }

    fn work(mut self, key: &str, delay_ms: u64, detail: BookDetail) -> Self {
        self.works
            .insert(key.to_string(), (Duration::from_millis(delay_ms), detail));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogClient for ScriptedCatalog {
    async fn search(&self, query: &str, _limit: u32) -> CatalogResult<Vec<BookSummary>> {
        self.calls.lock().unwrap().push(format!("search:{}", query));
        match self.searches.get(query) {
            Some((delay, books)) => {
                tokio::time::sleep(*delay).await;
                Ok(books.clone())
            }
            None => Err(CatalogError::Status {
                status: 500,
                url: format!("/search.json?title={}", query),
            }),
        }
    }

    async fn work(&self, key: &str) -> CatalogResult<BookDetail> {
        self.calls.lock().unwrap().push(format!("work:{}", key));
        match self.works.get(key) {
            Some((delay, detail)) => {
                tokio::time::sleep(*delay).await;
                Ok(detail.clone())
            }
            None => Err(CatalogError::Status {
                status: 404,
                url: format!("{}.json", key),
            }),
        }
    }
}

fn create_session(catalog: ScriptedCatalog) -> (Session, Arc<ScriptedCatalog>) {
    let catalog = Arc::new(catalog);
    let session = Session::new(catalog.clone(), &Config::default());
    (session, catalog)
}

fn keys(books: &[BookSummary]) -> Vec<&str> {
    books.iter().map(|b| b.key.as_str()).collect()
}

// =============================================================================
// Searching
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_results_equal_response_in_order() {
    let (mut session, _catalog) =
        create_session(ScriptedCatalog::default().search("cat", 20, &["C", "A", "B"]));

    session.submit("cat");
    assert!(session.is_searching());
    session.settle().await;

    assert!(!session.is_searching());
    assert_eq!(keys(session.results()), vec!["/works/C", "/works/A", "/works/B"]);
}

#[tokio::test(start_paused = true)]
async fn test_typing_burst_issues_one_search() {
    let (mut session, catalog) =
        create_session(ScriptedCatalog::default().search("abc", 20, &["ABC"]));

    for text in ["a", "ab", "abc"] {
        session.set_query(text);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(session.is_debouncing());

    assert_eq!(
        session.step().await,
        Some(Update::SearchIssued("abc".to_string()))
    );
    session.settle().await;

    assert_eq!(catalog.calls(), vec!["search:abc"]);
    assert_eq!(keys(session.results()), vec!["/works/ABC"]);
}

#[tokio::test(start_paused = true)]
async fn test_search_waits_for_pause() {
    let (mut session, catalog) =
        create_session(ScriptedCatalog::default().search("cat", 0, &["A"]));
    let start = tokio::time::Instant::now();

    session.set_query("cat");
    tokio::time::sleep(Duration::from_millis(299)).await;
    assert!(catalog.calls().is_empty());
    assert!(session.is_debouncing());

    assert_eq!(
        session.step().await,
        Some(Update::SearchIssued("cat".to_string()))
    );
    assert!(start.elapsed() >= Duration::from_millis(300));

    session.settle().await;
    assert_eq!(catalog.calls(), vec!["search:cat"]);
    assert_eq!(keys(session.results()), vec!["/works/A"]);
}

#[tokio::test(start_paused = true)]
async fn test_blank_query_clears_immediately_without_request() {
    let (mut session, catalog) =
        create_session(ScriptedCatalog::default().search("cat", 10, &["A"]));
    session.submit("cat");
    session.settle().await;
    assert_eq!(session.results().len(), 1);

    session.set_query("   ");

    assert!(session.results().is_empty());
    assert!(!session.is_debouncing());
    assert_eq!(session.step().await, None);
    assert_eq!(catalog.calls(), vec!["search:cat"]);
}

#[tokio::test(start_paused = true)]
async fn test_blank_query_cancels_pending_search() {
    let (mut session, catalog) =
        create_session(ScriptedCatalog::default().search("cat", 10, &["A"]));

    session.set_query("cat");
    session.set_query("");
    session.settle().await;

    assert!(catalog.calls().is_empty());
    assert!(session.results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_slow_earlier_search_does_not_clobber_newer() {
    let (mut session, _catalog) = create_session(
        ScriptedCatalog::default()
            .search("cat", 500, &["CAT"])
            .search("dog", 50, &["DOG"]),
    );

    session.submit("cat");
    session.submit("dog");

    assert_eq!(
        session.step().await,
        Some(Update::SearchCompleted { applied: true })
    );
    assert_eq!(
        session.step().await,
        Some(Update::SearchCompleted { applied: false })
    );
    assert_eq!(keys(session.results()), vec!["/works/DOG"]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_guard_through_debounce() {
    let (mut session, catalog) = create_session(
        ScriptedCatalog::default()
            .search("cat", 1000, &["CAT"])
            .search("dog", 10, &["DOG"]),
    );

    session.set_query("cat");
    assert_eq!(
        session.step().await,
        Some(Update::SearchIssued("cat".to_string()))
    );
    session.set_query("dog");
    session.settle().await;

    assert_eq!(catalog.calls(), vec!["search:cat", "search:dog"]);
    assert_eq!(keys(session.results()), vec!["/works/DOG"]);
    assert!(!session.is_searching());
}

#[tokio::test(start_paused = true)]
async fn test_failed_search_degrades_to_empty() {
    let (mut session, _catalog) =
        create_session(ScriptedCatalog::default().search("cat", 10, &["A"]));
    session.submit("cat");
    session.settle().await;

    session.submit("unknown");
    session.settle().await;

    assert!(session.results().is_empty());
    assert!(!session.is_searching());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_timer() {
    let (mut session, catalog) =
        create_session(ScriptedCatalog::default().search("cat", 10, &["A"]));

    session.set_query("cat");
    drop(session);
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(catalog.calls().is_empty());
}

// =============================================================================
// Favorites and tabs
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_favorite_outside_results_appears_after_later_search() {
    let (mut session, _catalog) = create_session(
        ScriptedCatalog::default()
            .search("cat", 10, &["A"])
            .search("x", 10, &["B", "X"]),
    );
    session.submit("cat");
    session.settle().await;

    assert!(session.toggle_favorite("/works/X"));
    assert!(session.is_favorite("/works/X"));
    assert_eq!(session.favorite_count(), 1);
    assert!(session.favorites_view().is_empty());

    session.submit("x");
    session.settle().await;

    let view: Vec<&str> = session
        .favorites_view()
        .iter()
        .map(|b| b.key.as_str())
        .collect();
    assert_eq!(view, vec!["/works/X"]);
}

#[tokio::test(start_paused = true)]
async fn test_switching_tabs_keeps_in_flight_search() {
    let (mut session, _catalog) =
        create_session(ScriptedCatalog::default().search("cat", 100, &["A", "B"]));

    session.submit("cat");
    session.set_tab(Tab::Favorites);
    session.settle().await;

    assert_eq!(session.tab(), Tab::Favorites);
    assert_eq!(session.results().len(), 2);
    assert!(session.cards().is_empty());

    session.toggle_favorite("/works/B");
    let cards = session.cards();
    assert_eq!(cards.len(), 1);
    assert!(cards[0].favorite);

    session.set_tab(Tab::Search);
    assert_eq!(session.cards().len(), 2);
}

// =============================================================================
// Details
// =============================================================================

fn hobbit(description: Description) -> BookDetail {
    let mut detail = BookDetail::new(
        BookSummary::new("/works/OL1W", "The Hobbit").with_author("J.R.R. Tolkien"),
    );
    detail.description = Some(description);
    detail
}

#[tokio::test(start_paused = true)]
async fn test_open_detail_shows_loading_then_content() {
    let detail = hobbit(Description::Text("There and back again.".to_string()));
    let (mut session, _catalog) =
        create_session(ScriptedCatalog::default().work("/works/OL1W", 100, detail.clone()));

    session.open_detail("/works/OL1W");
    assert!(session.detail().is_open());
    assert!(session.detail().is_loading());
    assert!(session.detail_panel().is_none());

    session.settle().await;

    assert!(!session.detail().is_loading());
    assert_eq!(session.detail().selected(), Some(&detail));
    let panel = session.detail_panel().unwrap();
    assert_eq!(panel.authors.as_deref(), Some("J.R.R. Tolkien"));
}

#[tokio::test(start_paused = true)]
async fn test_close_before_response_discards_it() {
    let detail = hobbit(Description::Text("There and back again.".to_string()));
    let (mut session, _catalog) =
        create_session(ScriptedCatalog::default().work("/works/OL1W", 100, detail));

    session.open_detail("/works/OL1W");
    session.close_detail();

    assert_eq!(
        session.step().await,
        Some(Update::DetailCompleted { applied: false })
    );
    assert!(!session.detail().is_open());
    assert!(session.detail().selected().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_failed_detail_keeps_modal_open_and_empty() {
    let (mut session, _catalog) = create_session(ScriptedCatalog::default());

    session.open_detail("/works/OL404W");
    session.settle().await;

    assert!(session.detail().is_open());
    assert!(!session.detail().is_loading());
    assert!(session.detail_panel().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_description_forms_render_identically() {
    let plain = hobbit(Description::Text("plain text".to_string()));
    let wrapped = hobbit(Description::Value {
        value: "plain text".to_string(),
    });
    let (mut session, _catalog) = create_session(
        ScriptedCatalog::default()
            .work("/works/plain", 10, plain)
            .work("/works/wrapped", 10, wrapped),
    );

    session.open_detail("/works/plain");
    session.settle().await;
    let first = session.detail_panel().unwrap();

    session.open_detail("/works/wrapped");
    session.settle().await;
    let second = session.detail_panel().unwrap();

    assert_eq!(first.description.as_deref(), Some("plain text"));
    assert_eq!(first, second);
}
