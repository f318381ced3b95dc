//! Search results and work details

use super::Description;
use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit `null` as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single search result.
///
/// Field names follow the catalog's wire format; any field other than the
/// key may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSummary {
    /// Catalog key, e.g. `/works/OL45883W`
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Authors in catalog order
    #[serde(
        rename = "author_name",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,

    #[serde(rename = "cover_i", default, skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<i64>,

    #[serde(
        rename = "subject",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub subjects: Vec<String>,

    #[serde(
        rename = "isbn",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub isbns: Vec<String>,
}

impl BookSummary {
    /// Create a summary with only a key and title
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            authors: Vec::new(),
            first_publish_year: None,
            cover_id: None,
            subjects: Vec::new(),
            isbns: Vec::new(),
        }
    }

    /// Add an author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    /// Set the first publish year
    pub fn with_year(mut self, year: i32) -> Self {
        self.first_publish_year = Some(year);
        self
    }

    /// Set the cover id
    pub fn with_cover(mut self, cover_id: i64) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    /// First listed author, if any
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

/// Expanded information about one work
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDetail {
    #[serde(flatten)]
    pub summary: BookSummary,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub publishers: Vec<String>,

    #[serde(
        rename = "publish_date",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub publish_dates: Vec<String>,

    /// Subjects in the work record's native `subjects` field
    #[serde(
        rename = "subjects",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub work_subjects: Vec<String>,

    /// Cover ids in the work record's native form
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub covers: Vec<i64>,
}

impl BookDetail {
    /// Create a detail record wrapping a summary
    pub fn new(summary: BookSummary) -> Self {
        Self {
            summary,
            description: None,
            publishers: Vec::new(),
            publish_dates: Vec::new(),
            work_subjects: Vec::new(),
            covers: Vec::new(),
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Description::Text(description.into()));
        self
    }

    /// Add a publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publishers.push(publisher.into());
        self
    }

    /// Normalized description text
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_ref().map(Description::as_str)
    }

    /// Subjects, preferring the search-style field over the work record's
    pub fn subjects(&self) -> &[String] {
        if self.summary.subjects.is_empty() {
            &self.work_subjects
        } else {
            &self.summary.subjects
        }
    }

    /// Cover id, preferring the search-style field over the `covers` list.
    /// The catalog uses non-positive ids as placeholders.
    pub fn cover_id(&self) -> Option<i64> {
        self.summary
            .cover_id
            .or_else(|| self.covers.iter().copied().find(|id| *id > 0))
    }
}
