//! Search execution: dispatch a query to the provider and extract results

use super::models::SearchQuery;
use crate::engines::Engine;
use crate::error::SearchError;
use crate::network::HttpClient;
use crate::results::{extract, SearchResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Search executor bound to a single provider
#[derive(Clone)]
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Provider the query is sent to
    engine: Arc<dyn Engine>,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, engine: Arc<dyn Engine>) -> Self {
        Self { client, engine }
    }

    /// Send `query` to the provider and return the raw response body.
    ///
    /// Exactly one attempt is made. Connection failures, timeouts and
    /// non-2xx statuses are all reported as `SearchError::Transport`.
    pub async fn dispatch(&self, query: &str) -> Result<String, SearchError> {
        let request = self.engine.request(query);

        let response = self.client.execute(request).await.map_err(|e| {
            warn!("Request to {} failed: {:#}", self.engine.name(), e);
            SearchError::Transport(format!("{:#}", e))
        })?;

        debug!("Response status: {}", response.status);

        if !response.is_success() {
            warn!(
                "{} returned HTTP {} for {}",
                self.engine.name(),
                response.status,
                response.url
            );
            return Err(SearchError::Transport(format!(
                "HTTP status {} for url ({})",
                response.status, response.url
            )));
        }

        Ok(response.text)
    }

    /// Run the full pipeline for a validated query
    pub async fn execute(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchError> {
        info!(
            "Searching {} for '{}' with limit {}",
            self.engine.name(),
            query.query,
            query.limit
        );

        let markup = self.dispatch(&query.query).await?;
        let results = extract(&markup, self.engine.selectors(), query.limit);

        debug!("Total results returned: {}", results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutgoingSettings;
    use crate::engines::DuckDuckGo;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE: &str = r#"<html><body>
        <div class="result"><h2 class="result__title"><a href="https://a.example">A</a></h2>
            <a class="result__snippet">alpha</a></div>
        <div class="result"><h2 class="result__title"><a href="https://b.example">B</a></h2></div>
    </body></html>"#;

    fn search_against(endpoint: &str) -> Search {
        let engine = DuckDuckGo::new(endpoint).unwrap();
        Search::new(HttpClient::new().unwrap(), Arc::new(engine))
    }

    #[tokio::test]
    async fn test_dispatch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/html/"))
            .and(body_string("q=rust"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let search = search_against(&format!("{}/html/", server.uri()));
        let body = search.dispatch("rust").await.unwrap();

        assert_eq!(body, PAGE);
    }

    #[tokio::test]
    async fn test_execute_extracts_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let search = search_against(&format!("{}/html/", server.uri()));
        let query = SearchQuery::new("rust", Some(1)).unwrap();
        let results = search.execute(&query).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "A");
        assert_eq!(results[0].description, "alpha");
    }

    #[tokio::test]
    async fn test_http_error_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let search = search_against(&format!("{}/html/", server.uri()));
        let err = search.dispatch("rust").await.unwrap_err();

        match err {
            SearchError::Transport(cause) => assert!(cause.contains("503")),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let search = search_against(&format!("http://{}/html/", addr));
        let err = search.dispatch("rust").await.unwrap_err();

        assert!(matches!(err, SearchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let settings = OutgoingSettings {
            request_timeout: 0.05,
            ..Default::default()
        };
        let engine = DuckDuckGo::new(&format!("{}/html/", server.uri())).unwrap();
        let search = Search::new(HttpClient::with_settings(&settings).unwrap(), Arc::new(engine));

        let err = search.dispatch("rust").await.unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }
}
