//! Interactive search session
//!
//! A [`Session`] owns one of each controller and applies events to them one
//! at a time. User actions are plain method calls. Timer fires and network
//! completions are delivered by [`Session::step`], so every state change
//! happens on the task that owns the session.

mod debounce;
mod detail;
mod favorites;
mod search;
mod tab;

pub use debounce::Debouncer;
pub use detail::{DetailController, DetailRequest, DetailResponse};
pub use favorites::FavoritesStore;
pub use search::{SearchController, SearchRequest, SearchResponse};
pub use tab::Tab;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::types::BookSummary;
use crate::view::{BookCard, DetailPanel};
use std::sync::Arc;
use tokio::task::JoinSet;

/// A network request that finished
#[derive(Debug)]
enum Completion {
    Search(SearchResponse),
    Detail(DetailResponse),
}

/// What a call to [`Session::step`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Typing paused and a search was issued for the query
    SearchIssued(String),

    /// A search finished; `applied` is false for superseded responses
    SearchCompleted { applied: bool },

    /// A detail fetch finished; `applied` is false for discarded responses
    DetailCompleted { applied: bool },

    /// A request task panicked or was aborted
    TaskFailed,
}

/// Search, detail and favorites state for one user session
pub struct Session {
    catalog: Arc<dyn CatalogClient>,
    covers_url: String,
    query: String,
    tab: Tab,
    debouncer: Debouncer,
    search: SearchController,
    detail: DetailController,
    favorites: FavoritesStore,
    tasks: JoinSet<Completion>,
}

impl Session {
    pub fn new(catalog: Arc<dyn CatalogClient>, config: &Config) -> Self {
        Self {
            catalog,
            covers_url: config.covers_url.clone(),
            query: String::new(),
            tab: Tab::default(),
            debouncer: Debouncer::new(config.debounce),
            search: SearchController::new(config.search_limit),
            detail: DetailController::new(),
            favorites: FavoritesStore::new(),
            tasks: JoinSet::new(),
        }
    }

    // ----- user events -----

    /// Record a keystroke-level change of the query.
    ///
    /// A blank query clears the results at once; anything else is searched
    /// after the debounce interval.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        if self.query.trim().is_empty() {
            self.debouncer.cancel();
            self.search.clear();
        } else {
            self.debouncer.schedule(self.query.clone());
        }
    }

    /// Search for `text` immediately, skipping the debounce
    pub fn submit(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.debouncer.cancel();
        let query = self.query.clone();
        self.issue_search(&query);
    }

    /// Open the detail modal for a catalog key
    pub fn open_detail(&mut self, key: &str) {
        let request = self.detail.open(key);
        let catalog = Arc::clone(&self.catalog);
        self.tasks.spawn(async move {
            Completion::Detail(request.fetch(catalog.as_ref()).await)
        });
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Flip the favorite state of a catalog key. Returns the new state.
    pub fn toggle_favorite(&mut self, key: &str) -> bool {
        self.favorites.toggle(key)
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    // ----- internal events -----

    /// Wait for the next timer fire or network completion and apply it.
    ///
    /// Returns `None` once nothing is pending.
    pub async fn step(&mut self) -> Option<Update> {
        let debouncing = self.debouncer.is_pending();
        let fetching = !self.tasks.is_empty();

        let event = tokio::select! {
            Some(query) = self.debouncer.fired(), if debouncing => Ok(query),
            Some(joined) = self.tasks.join_next(), if fetching => Err(joined),
            else => return None,
        };

        let update = match event {
            Ok(query) => {
                // Only non-blank queries are ever scheduled
                self.issue_search(&query);
                Update::SearchIssued(query.trim().to_string())
            }
            Err(Ok(Completion::Search(response))) => Update::SearchCompleted {
                applied: self.search.complete(response),
            },
            Err(Ok(Completion::Detail(response))) => Update::DetailCompleted {
                applied: self.detail.complete(response),
            },
            Err(Err(e)) => {
                tracing::error!("Catalog request task failed: {}", e);
                Update::TaskFailed
            }
        };
        Some(update)
    }

    /// Apply events until nothing is pending
    pub async fn settle(&mut self) {
        while self.step().await.is_some() {}
    }

    /// Cancel the pending debounce and abandon in-flight requests
    pub fn shutdown(&mut self) {
        self.debouncer.cancel();
        self.tasks.abort_all();
    }

    fn issue_search(&mut self, query: &str) {
        let Some(request) = self.search.begin(query) else {
            return;
        };
        let catalog = Arc::clone(&self.catalog);
        self.tasks.spawn(async move {
            Completion::Search(request.fetch(catalog.as_ref()).await)
        });
    }

    // ----- state -----

    /// The raw query as last typed
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn results(&self) -> &[BookSummary] {
        self.search.results()
    }

    /// Whether the latest search is in flight
    pub fn is_searching(&self) -> bool {
        self.search.is_loading()
    }

    /// Whether no timer or request is pending
    pub fn is_idle(&self) -> bool {
        !self.debouncer.is_pending() && self.tasks.is_empty()
    }

    /// Whether a search is waiting on the debounce interval
    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn detail(&self) -> &DetailController {
        &self.detail
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.is_favorite(key)
    }

    /// Favorited books among the current results
    pub fn favorites_view(&self) -> Vec<&BookSummary> {
        self.favorites.view(self.search.results())
    }

    /// Number of favorites, including ones absent from the results
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Books listed on the active tab
    pub fn visible(&self) -> Vec<&BookSummary> {
        match self.tab {
            Tab::Search => self.search.results().iter().collect(),
            Tab::Favorites => self.favorites_view(),
        }
    }

    /// Cards for the active tab
    pub fn cards(&self) -> Vec<BookCard> {
        self.visible()
            .into_iter()
            .map(|book| BookCard::new(book, &self.covers_url, self.is_favorite(&book.key)))
            .collect()
    }

    /// Contents of the detail modal, once loaded
    pub fn detail_panel(&self) -> Option<DetailPanel> {
        self.detail
            .selected()
            .map(|detail| DetailPanel::new(detail, &self.covers_url))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
