//! Error types for Bookfinder Core

use thiserror::Error;

/// Result type for catalog requests
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors that occur while talking to the remote catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid catalog key: {0}")]
    InvalidKey(String),
}

/// Errors that occur while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
