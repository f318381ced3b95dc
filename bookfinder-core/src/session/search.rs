//! Search controller

use crate::catalog::CatalogClient;
use crate::error::CatalogResult;
use crate::types::BookSummary;

/// A search the controller has issued and is waiting on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
    pub limit: u32,
}

impl SearchRequest {
    /// Run the request against a catalog
    pub async fn fetch(self, catalog: &dyn CatalogClient) -> SearchResponse {
        let result = catalog.search(&self.query, self.limit).await;
        SearchResponse {
            request: self,
            result,
        }
    }
}

/// Outcome of a [`SearchRequest`]
#[derive(Debug)]
pub struct SearchResponse {
    pub request: SearchRequest,
    pub result: CatalogResult<Vec<BookSummary>>,
}

/// Owns the result list.
///
/// Only the most recently issued request may change the list; responses
/// carrying an older generation are discarded.
#[derive(Debug)]
pub struct SearchController {
    limit: u32,
    generation: u64,
    loading: bool,
    results: Vec<BookSummary>,
}

impl SearchController {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            generation: 0,
            loading: false,
            results: Vec::new(),
        }
    }

    /// Current results in server order
    pub fn results(&self) -> &[BookSummary] {
        &self.results
    }

    /// Whether the latest search is still in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a search for `query`.
    ///
    /// A blank query clears the results and returns `None`; no request
    /// should be made in that case.
    pub fn begin(&mut self, query: &str) -> Option<SearchRequest> {
        let query = query.trim();
        if query.is_empty() {
            self.clear();
            return None;
        }

        self.generation += 1;
        self.loading = true;
        tracing::debug!("Search #{} issued for {:?}", self.generation, query);

        Some(SearchRequest {
            generation: self.generation,
            query: query.to_string(),
            limit: self.limit,
        })
    }

    /// Empty the result list and invalidate any in-flight search
    pub fn clear(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.results.clear();
    }

    /// Apply a response. Returns `false` if it was stale and discarded.
    pub fn complete(&mut self, response: SearchResponse) -> bool {
        let SearchResponse { request, result } = response;
        if request.generation != self.generation {
            tracing::debug!(
                "Discarding stale search #{} for {:?} (latest is #{})",
                request.generation,
                request.query,
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(books) => {
                tracing::info!("Search for {:?} returned {} results", request.query, books.len());
                self.results = books;
            }
            Err(e) => {
                tracing::warn!("Error searching books for {:?}: {}", request.query, e);
                self.results.clear();
            }
        }
        true
    }
}
