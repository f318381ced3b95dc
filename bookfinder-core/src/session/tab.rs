//! Active view mode

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which list the user is looking at. Either is reachable from the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Search,
    Favorites,
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Search => f.write_str("search"),
            Tab::Favorites => f.write_str("favorites"),
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(Tab::Search),
            "favorites" | "favourites" | "fav" => Ok(Tab::Favorites),
            other => Err(format!("unknown tab '{}'", other)),
        }
    }
}
