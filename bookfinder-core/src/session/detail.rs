//! Detail controller

use crate::catalog::CatalogClient;
use crate::error::CatalogResult;
use crate::types::BookDetail;

/// A detail fetch the controller has issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: u64,
    pub key: String,
}

impl DetailRequest {
    /// Run the request against a catalog
    pub async fn fetch(self, catalog: &dyn CatalogClient) -> DetailResponse {
        let result = catalog.work(&self.key).await;
        DetailResponse {
            request: self,
            result,
        }
    }
}

/// Outcome of a [`DetailRequest`]
#[derive(Debug)]
pub struct DetailResponse {
    pub request: DetailRequest,
    pub result: CatalogResult<BookDetail>,
}

/// Owns the modal state and the book shown in it
#[derive(Debug, Default)]
pub struct DetailController {
    generation: u64,
    open: bool,
    loading: bool,
    selected: Option<BookDetail>,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modal is shown
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the shown detail is still being fetched
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The loaded detail, if any
    pub fn selected(&self) -> Option<&BookDetail> {
        self.selected.as_ref()
    }

    /// Open the modal for `key` and return the request to run.
    ///
    /// Any previously shown detail is dropped, and an older in-flight
    /// request is superseded.
    pub fn open(&mut self, key: &str) -> DetailRequest {
        self.generation += 1;
        self.open = true;
        self.loading = true;
        self.selected = None;
        tracing::debug!("Detail #{} issued for {}", self.generation, key);

        DetailRequest {
            generation: self.generation,
            key: key.to_string(),
        }
    }

    /// Close the modal. Any in-flight response will be discarded.
    pub fn close(&mut self) {
        self.generation += 1;
        self.open = false;
        self.loading = false;
        self.selected = None;
    }

    /// Apply a response. Returns `false` if it was stale and discarded.
    pub fn complete(&mut self, response: DetailResponse) -> bool {
        let DetailResponse { request, result } = response;
        if !self.open || request.generation != self.generation {
            tracing::debug!("Discarding stale detail #{} for {}", request.generation, request.key);
            return false;
        }

        self.loading = false;
        match result {
            Ok(detail) => {
                tracing::info!("Loaded details for {}", request.key);
                self.selected = Some(detail);
            }
            Err(e) => {
                tracing::warn!("Error fetching book details for {}: {}", request.key, e);
            }
        }
        true
    }

    /// Open the modal for `key`, fetch, and apply in one step
    pub async fn show(&mut self, catalog: &dyn CatalogClient, key: &str) -> bool {
        let response = self.open(key).fetch(catalog).await;
        self.complete(response)
    }
}
