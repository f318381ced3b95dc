//! Core types for the catalog data model

mod book;
mod cover;
mod description;

pub use book::{BookDetail, BookSummary};
pub use cover::{cover_url, CoverSize};
pub use description::Description;
