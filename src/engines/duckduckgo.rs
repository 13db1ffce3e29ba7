//! DuckDuckGo HTML search engine implementation

use super::traits::*;
use anyhow::{Context, Result};
use std::collections::HashMap;
use url::Url;

/// DuckDuckGo web search through its JavaScript-free HTML front-end
pub struct DuckDuckGo {
    html_url: String,
    selectors: ResultSelectors,
}

impl DuckDuckGo {
    /// Create an engine posting to `html_url`
    pub fn new(html_url: &str) -> Result<Self> {
        Url::parse(html_url).with_context(|| format!("invalid endpoint URL '{}'", html_url))?;

        Ok(Self {
            html_url: html_url.to_string(),
            selectors: ResultSelectors::new("div.result", ".result__title a", ".result__snippet")?,
        })
    }
}

impl Engine for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    fn request(&self, query: &str) -> EngineRequest {
        let mut form_data = HashMap::new();
        form_data.insert("q".to_string(), query.to_string());

        EngineRequest::post(&self.html_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(form_data)
    }

    fn selectors(&self) -> &ResultSelectors {
        &self.selectors
    }
}
