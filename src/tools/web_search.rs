//! The `search` tool: validate, search, serialize

use crate::error::SearchError;
use crate::results::SearchResult;
use crate::search::{Search, SearchQuery};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

/// Successful search payload
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub count: usize,
}

impl SearchResponse {
    pub fn new(query: String, results: Vec<SearchResult>) -> Self {
        let count = results.len();
        Self {
            query,
            results,
            count,
        }
    }
}

/// `{"error": message}` as JSON text
pub fn error_payload(message: &str) -> String {
    json!({ "error": message }).to_string()
}

/// Run a search and render the outcome as JSON text.
///
/// Never fails: validation, transport and any other error all come back as
/// an `{"error": ...}` document.
pub async fn search(search: &Search, query: Option<&Value>, limit: Option<&Value>) -> String {
    match run(search, query, limit).await {
        Ok(body) => body,
        Err(err) => {
            warn!("Search tool error: {}", err.payload_message());
            error_payload(&err.payload_message())
        }
    }
}

async fn run(
    search: &Search,
    query: Option<&Value>,
    limit: Option<&Value>,
) -> Result<String, SearchError> {
    let query = SearchQuery::from_arguments(query, limit)?;
    let results = search.execute(&query).await?;

    let response = SearchResponse::new(query.query, results);
    Ok(serde_json::to_string_pretty(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::DuckDuckGo;
    use crate::network::HttpClient;
    use std::sync::Arc;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page(count: usize) -> String {
        let containers: String = (1..=count)
            .map(|i| {
                format!(
                    r#"<div class="result"><h2 class="result__title"><a href="https://{i}.example">Result {i}</a></h2>
                       <a class="result__snippet">Snippet {i}</a></div>"#
                )
            })
            .collect();
        format!("<html><body>{}</body></html>", containers)
    }

    async fn provider(body: String) -> (MockServer, Search) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        let engine = DuckDuckGo::new(&format!("{}/html/", server.uri())).unwrap();
        let searcher = Search::new(HttpClient::new().unwrap(), Arc::new(engine));
        (server, searcher)
    }

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_count_matches_results_and_respects_limit() {
        let (_server, searcher) = provider(page(12)).await;

        for limit in 1..=10 {
            let out = parse(&search(&searcher, Some(&json!("rust")), Some(&json!(limit))).await);
            let results = out["results"].as_array().unwrap();

            assert_eq!(out["query"], "rust");
            assert_eq!(out["count"].as_u64().unwrap() as usize, results.len());
            assert_eq!(results.len(), limit);
        }
    }

    #[tokio::test]
    async fn test_fewer_hits_than_limit() {
        let (_server, searcher) = provider(page(2)).await;

        let out = parse(&search(&searcher, Some(&json!("rust")), Some(&json!(10))).await);

        assert_eq!(out["count"], 2);
        assert_eq!(out["results"][1]["title"], "Result 2");
        assert_eq!(out["results"][1]["url"], "https://2.example");
        assert_eq!(out["results"][1]["description"], "Snippet 2");
    }

    #[tokio::test]
    async fn test_bad_limit_behaves_like_default() {
        let (_server, searcher) = provider(page(10)).await;

        for limit in [json!(0), json!(11), json!(-1), json!("7"), json!(3.5), json!(null)] {
            let out = parse(&search(&searcher, Some(&json!("rust")), Some(&limit)).await);
            assert!(out.get("error").is_none());
            assert_eq!(out["count"], 5, "limit {}", limit);
        }

        let out = parse(&search(&searcher, Some(&json!("rust")), None).await);
        assert_eq!(out["count"], 5);
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(3)))
            .expect(0)
            .mount(&server)
            .await;
        let engine = DuckDuckGo::new(&format!("{}/html/", server.uri())).unwrap();
        let searcher = Search::new(HttpClient::new().unwrap(), Arc::new(engine));

        for query in [Some(json!("")), Some(json!(17)), Some(json!(null)), None] {
            let out = parse(&search(&searcher, query.as_ref(), Some(&json!(3))).await);
            assert_eq!(out, json!({ "error": "Query must be a non-empty string" }));
        }
        // `expect(0)` is verified when the server drops
    }

    #[tokio::test]
    async fn test_transport_failure_payload() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let engine = DuckDuckGo::new(&format!("http://{}/html/", addr)).unwrap();
        let searcher = Search::new(HttpClient::new().unwrap(), Arc::new(engine));

        let out = parse(&search(&searcher, Some(&json!("rust")), None).await);
        let message = out["error"].as_str().unwrap();

        assert!(message.starts_with("Search request failed: "), "{}", message);
        assert!(out.get("results").is_none());
    }
}
