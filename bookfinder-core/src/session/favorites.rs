//! Favorites store

use crate::types::BookSummary;
use std::collections::HashSet;

/// Set of favorited catalog keys, held for the session only.
///
/// Favorites are keys, not records: [`FavoritesStore::view`] can only show
/// a favorite while it is part of the result list it is given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FavoritesStore {
    keys: HashSet<String>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `key`. Returns whether it is now a favorite.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of favorited keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The favorited books among `results`, in result order
    pub fn view<'a>(&self, results: &'a [BookSummary]) -> Vec<&'a BookSummary> {
        results
            .iter()
            .filter(|book| self.is_favorite(&book.key))
            .collect()
    }
}
