//! Work descriptions

use serde::{Deserialize, Serialize};

/// A work description as delivered by the catalog.
///
/// The catalog sends either a bare string or a typed text record
/// (`{"type": "/type/text", "value": "..."}`). Both display the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Description {
    /// Plain string
    Text(String),

    /// Wrapped text record
    Value { value: String },
}

impl Description {
    /// The display text
    pub fn as_str(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::Value { value } => value,
        }
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
