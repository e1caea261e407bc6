//! Wire types for the Context7 API.

use crate::constants;
use crate::error::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A library search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub library_name: String,
    /// Free-text refinement. `None` when the user gave no query words.
    pub query: Option<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(library_name: impl Into<String>, query: Option<String>) -> Self {
        Self {
            library_name: library_name.into(),
            query: query.filter(|q| !q.is_empty()),
        }
    }
}

/// A documentation request for one library. Always answered as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsRequest {
    pub library_id: String,
    pub query: String,
}

impl DocsRequest {
    #[must_use]
    pub fn new(library_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            library_id: library_id.into(),
            query: query.into(),
        }
    }
}

/// One search hit. Every field is optional; see the accessor methods for the
/// placeholders used when the server leaves something out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LibraryRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub total_snippets: Option<Value>,
    pub trust_score: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub versions: Vec<Value>,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl LibraryRecord {
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or(constants::PLACEHOLDER_ID)
    }

    /// Title, then name, then a placeholder. An empty title counts as missing.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .or(self.name.as_deref())
            .unwrap_or(constants::PLACEHOLDER_NAME)
    }

    #[must_use]
    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(constants::PLACEHOLDER_DESCRIPTION)
    }

    #[must_use]
    pub fn display_snippets(&self) -> String {
        self.total_snippets
            .as_ref()
            .filter(|value| !value.is_null())
            .map_or_else(|| "0".to_string(), scalar_to_string)
    }

    #[must_use]
    pub fn display_trust_score(&self) -> String {
        self.trust_score
            .as_ref()
            .filter(|value| !value.is_null())
            .map_or_else(
                || constants::PLACEHOLDER_TRUST_SCORE.to_string(),
                scalar_to_string,
            )
    }

    /// Version strings in server order. Non-string entries are skipped.
    pub fn version_strings(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().filter_map(Value::as_str)
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The search endpoint answers either with a bare list or with `{"results": [...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Wrapped {
        #[serde(deserialize_with = "null_as_default")]
        results: Vec<LibraryRecord>,
    },
    Bare(Vec<LibraryRecord>),
}

impl SearchResponse {
    /// Decodes a search payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResponse`] if the body is not JSON or matches
    /// neither accepted shape.
    pub fn parse(body: &str) -> Result<Self, Error> {
        serde_json::from_str(body).map_err(|e| Error::InvalidResponse {
            reason: format!("search results are not a list of libraries ({e})"),
        })
    }

    #[must_use]
    pub fn into_records(self) -> Vec<LibraryRecord> {
        match self {
            Self::Wrapped { results } | Self::Bare(results) => results,
        }
    }
}
