//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result
    pub title: String,
    /// The URL of the result, as given by the provider
    pub url: String,
    /// Snippet/description, possibly empty
    pub description: String,
}

impl SearchResult {
    /// Create a result. Returns `None` unless both title and url are non-empty.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<Self> {
        let title = title.into();
        let url = url.into();
        if title.is_empty() || url.is_empty() {
            return None;
        }

        Some(Self {
            title,
            url,
            description: description.into(),
        })
    }
}
