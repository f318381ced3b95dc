//! Open Library HTTP client

use super::CatalogClient;
use crate::config::Config;
use crate::error::{CatalogError, CatalogResult};
use crate::types::{BookDetail, BookSummary};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Body of `search.json`
#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    docs: Vec<BookSummary>,
}

/// Catalog client for the Open Library JSON API
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// Create a client for the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &Config) -> CatalogResult<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// URL of the search endpoint for a title query
    pub fn search_url(&self, query: &str, limit: u32) -> String {
        format!(
            "{}/search.json?title={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        )
    }

    /// URL of the work record for a catalog key
    pub fn work_url(&self, key: &str) -> CatalogResult<String> {
        // Keys are catalog paths such as `/works/OL45883W`
        if !key.starts_with('/') || key.contains("..") || key.contains('?') {
            return Err(CatalogError::InvalidKey(key.to_string()));
        }
        Ok(format!("{}{}.json", self.base_url, key))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> CatalogResult<T> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<BookSummary>> {
        let page: SearchPage = self.get_json(&self.search_url(query, limit)).await?;

        let total = page.docs.len();
        let docs: Vec<BookSummary> = page
            .docs
            .into_iter()
            .filter(|doc| !doc.key.is_empty())
            .collect();
        if docs.len() < total {
            tracing::debug!("Dropped {} search results without a key", total - docs.len());
        }

        Ok(docs)
    }

    async fn work(&self, key: &str) -> CatalogResult<BookDetail> {
        let url = self.work_url(key)?;
        let mut detail: BookDetail = self.get_json(&url).await?;
        if detail.summary.key.is_empty() {
            detail.summary.key = key.to_string();
        }
        Ok(detail)
    }
}
