//! Remote catalog abstraction

mod open_library;

pub use open_library::OpenLibraryClient;

use crate::error::CatalogResult;
use crate::types::{BookDetail, BookSummary};
use async_trait::async_trait;

/// Bibliographic catalog reachable over the network
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search works by title, returning at most `limit` results in server order
    async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<BookSummary>>;

    /// Fetch the full record of one work by its catalog key
    async fn work(&self, key: &str) -> CatalogResult<BookDetail>;
}
