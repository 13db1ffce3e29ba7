//! Search query model and input normalization

use crate::error::SearchError;
use serde_json::Value;

/// Number of results returned when the caller gives no usable limit
pub const DEFAULT_LIMIT: usize = 5;

/// Smallest accepted limit
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted limit
pub const MAX_LIMIT: i64 = 10;

pub const EMPTY_QUERY_MESSAGE: &str = "Query must be a non-empty string";

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The search query string, never empty
    pub query: String,
    /// Maximum number of results, always within [1, 10]
    pub limit: usize,
}

impl SearchQuery {
    /// Build a query from loosely-typed tool arguments.
    ///
    /// A missing, empty or non-string `query` is rejected. A `limit` that is
    /// missing, not an integer, or out of range silently becomes 5.
    pub fn from_arguments(query: Option<&Value>, limit: Option<&Value>) -> Result<Self, SearchError> {
        let query = match query {
            Some(Value::String(q)) if !q.is_empty() => q.clone(),
            _ => return Err(SearchError::Validation(EMPTY_QUERY_MESSAGE.to_string())),
        };

        Ok(Self {
            query,
            limit: normalize_limit(limit),
        })
    }

    /// Build a query from typed inputs, with the same rules as `from_arguments`
    pub fn new(query: &str, limit: Option<i64>) -> Result<Self, SearchError> {
        if query.is_empty() {
            return Err(SearchError::Validation(EMPTY_QUERY_MESSAGE.to_string()));
        }

        Ok(Self {
            query: query.to_string(),
            limit: clamp_limit(limit),
        })
    }
}

/// Coerce an arbitrary JSON value into a limit in [1, 10], defaulting to 5
pub fn normalize_limit(limit: Option<&Value>) -> usize {
    clamp_limit(limit.and_then(Value::as_i64))
}

fn clamp_limit(limit: Option<i64>) -> usize {
    match limit {
        Some(n) if (MIN_LIMIT..=MAX_LIMIT).contains(&n) => n as usize,
        _ => DEFAULT_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limit_in_range_is_kept() {
        for n in 1..=10 {
            assert_eq!(normalize_limit(Some(&json!(n))), n as usize);
        }
    }

    #[test]
    fn test_bad_limits_fall_back_to_default() {
        let bad = [
            json!(0),
            json!(-3),
            json!(11),
            json!(1000),
            json!(2.5),
            json!("3"),
            json!(null),
            json!(true),
            json!([3]),
        ];
        for value in bad.iter() {
            assert_eq!(normalize_limit(Some(value)), DEFAULT_LIMIT, "limit {}", value);
        }
        assert_eq!(normalize_limit(None), DEFAULT_LIMIT);
    }

    #[test]
    fn test_query_must_be_non_empty_string() {
        let expected = SearchError::Validation(EMPTY_QUERY_MESSAGE.to_string());

        assert_eq!(SearchQuery::from_arguments(None, None), Err(expected.clone()));
        assert_eq!(SearchQuery::from_arguments(Some(&json!("")), None), Err(expected.clone()));
        assert_eq!(SearchQuery::from_arguments(Some(&json!(42)), None), Err(expected.clone()));
        assert_eq!(SearchQuery::new("", Some(3)), Err(expected));
    }

    #[test]
    fn test_valid_query() {
        let query = SearchQuery::from_arguments(Some(&json!("rust")), Some(&json!(7))).unwrap();
        assert_eq!(query.query, "rust");
        assert_eq!(query.limit, 7);

        let query = SearchQuery::new("rust", Some(42)).unwrap();
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }
}
