//! Cover image URL construction

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cover image size offered by the covers CDN
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CoverSize {
    Small,

    /// Used for result cards
    #[default]
    Medium,

    /// Used for the detail panel
    Large,
}

impl CoverSize {
    /// Size token used in the CDN path
    pub fn token(self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

impl FromStr for CoverSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "small" => Ok(CoverSize::Small),
            "m" | "medium" => Ok(CoverSize::Medium),
            "l" | "large" => Ok(CoverSize::Large),
            other => Err(format!("unknown cover size '{}' (expected s, m or l)", other)),
        }
    }
}

/// Build the image URL for a cover id. No request is made.
pub fn cover_url(base: &str, cover_id: i64, size: CoverSize) -> String {
    format!(
        "{}/b/id/{}-{}.jpg",
        base.trim_end_matches('/'),
        cover_id,
        size.token()
    )
}
