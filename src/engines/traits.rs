//! Engine traits and types

use anyhow::{anyhow, Result};
use scraper::Selector;
use std::collections::HashMap;

/// HTTP POST to be made for the engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// POST body data
    pub data: Option<RequestBody>,
}

impl EngineRequest {
    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            data: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add form data (sets content-type to form-urlencoded)
    pub fn form(mut self, data: HashMap<String, String>) -> Self {
        self.data = Some(RequestBody::Form(data));
        self
    }
}

/// Request body types
#[derive(Debug, Clone)]
pub enum RequestBody {
    Form(HashMap<String, String>),
}

/// HTTP response from engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// CSS selectors locating result containers and their parts in provider markup
#[derive(Debug, Clone)]
pub struct ResultSelectors {
    /// One match per search hit
    pub container: Selector,
    /// Title anchor inside a container; its `href` is the result URL
    pub link: Selector,
    /// Optional snippet inside a container
    pub snippet: Selector,
}

impl ResultSelectors {
    /// Compile the three selectors
    pub fn new(container: &str, link: &str, snippet: &str) -> Result<Self> {
        Ok(Self {
            container: compile(container)?,
            link: compile(link)?,
            snippet: compile(snippet)?,
        })
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector '{}': {:?}", css, e))
}

/// A search provider: knows how to phrase a query and where results live in its markup
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Build the HTTP request for a search
    fn request(&self, query: &str) -> EngineRequest;

    /// Selectors for extracting results from the response body
    fn selectors(&self) -> &ResultSelectors;
}
