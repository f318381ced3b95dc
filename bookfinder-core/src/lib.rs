//! Bookfinder Core Library
//!
//! This crate provides the data model, the catalog client and the session
//! state machine behind the Bookfinder book search front-ends. A session
//! debounces title queries, keeps only the newest search result, loads
//! work details on demand and tracks favorites for its lifetime.

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod types;
pub mod view;

pub use catalog::{CatalogClient, OpenLibraryClient};
pub use config::Config;
pub use error::{CatalogError, CatalogResult, ConfigError};
pub use session::{
    DetailController, FavoritesStore, SearchController, Session, Tab, Update,
};
pub use types::{cover_url, BookDetail, BookSummary, CoverSize, Description};
pub use view::{BookCard, DetailPanel};
