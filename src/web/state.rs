//! Application state shared across handlers

use crate::config::Settings;
use crate::engines::DuckDuckGo;
use crate::mcp::WebSearchServer;
use crate::network::HttpClient;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// MCP tool server, cloned into every session
    pub tools: WebSearchServer,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let engine = DuckDuckGo::new(&settings.outgoing.endpoint)?;
        let search = Search::new(client, Arc::new(engine));
        let tools = WebSearchServer::new(search, settings.general.instance_name.clone());

        Ok(Self {
            settings: Arc::new(settings),
            tools,
        })
    }
}
