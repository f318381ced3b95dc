//! Framework-neutral view models
//!
//! These carry exactly what a result card or the detail modal displays.
//! Rendering them is left to the front-end.

use crate::types::{cover_url, BookDetail, BookSummary, CoverSize};
use serde::Serialize;

/// Subjects shown in the detail panel
pub const MAX_PANEL_SUBJECTS: usize = 6;

/// One entry of a result grid
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookCard {
    pub key: String,
    pub title: String,
    /// First listed author
    pub byline: Option<String>,
    pub published: Option<i32>,
    pub cover_url: Option<String>,
    pub favorite: bool,
}

impl BookCard {
    pub fn new(book: &BookSummary, covers_url: &str, favorite: bool) -> Self {
        Self {
            key: book.key.clone(),
            title: book.title.clone(),
            byline: book.primary_author().map(str::to_string),
            published: book.first_publish_year,
            cover_url: book
                .cover_id
                .map(|id| cover_url(covers_url, id, CoverSize::Medium)),
            favorite,
        }
    }
}

/// Contents of the detail modal
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DetailPanel {
    pub title: String,
    /// All authors, comma separated
    pub authors: Option<String>,
    pub published: Option<i32>,
    pub publisher: Option<String>,
    pub subjects: Vec<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

impl DetailPanel {
    pub fn new(detail: &BookDetail, covers_url: &str) -> Self {
        let summary = &detail.summary;
        Self {
            title: summary.title.clone(),
            authors: (!summary.authors.is_empty()).then(|| summary.authors.join(", ")),
            published: summary.first_publish_year,
            publisher: detail.publishers.first().cloned(),
            subjects: detail
                .subjects()
                .iter()
                .take(MAX_PANEL_SUBJECTS)
                .cloned()
                .collect(),
            description: detail.description_text().map(str::to_string),
            cover_url: detail
                .cover_id()
                .map(|id| cover_url(covers_url, id, CoverSize::Large)),
        }
    }
}
