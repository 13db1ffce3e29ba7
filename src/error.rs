//! Error taxonomy for the search pipeline

use thiserror::Error;

/// Failures that can occur while serving a search request.
///
/// Every variant is turned into an `{"error": ...}` payload at the tool
/// boundary; none of them ever crosses the RPC interface as a fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Caller supplied an empty or non-string query
    #[error("{0}")]
    Validation(String),

    /// Outbound request failed: connection, timeout or non-success status
    #[error("{0}")]
    Transport(String),

    /// Anything else that went wrong while building the response
    #[error("{0}")]
    Unexpected(String),
}

impl SearchError {
    /// Message placed in the `error` field of the response payload
    pub fn payload_message(&self) -> String {
        match self {
            SearchError::Validation(msg) => msg.clone(),
            SearchError::Transport(cause) => format!("Search request failed: {}", cause),
            SearchError::Unexpected(cause) => format!("Search failed: {}", cause),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_messages() {
        let err = SearchError::Validation("Query must be a non-empty string".to_string());
        assert_eq!(err.payload_message(), "Query must be a non-empty string");

        let err = SearchError::Transport("connection refused".to_string());
        assert_eq!(
            err.payload_message(),
            "Search request failed: connection refused"
        );

        let err = SearchError::Unexpected("boom".to_string());
        assert_eq!(err.payload_message(), "Search failed: boom");
    }
}
