//! Settings structures for websearch-mcp configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// DuckDuckGo's JavaScript-free HTML front-end
pub const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Browser identity sent with every outbound request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Main settings structure, mirrors settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<()> {
        let timeout = self.outgoing.request_timeout;
        if !timeout.is_finite() || timeout <= 0.0 {
            bail!(
                "outgoing.request_timeout must be a positive number of seconds, got {}",
                timeout
            );
        }

        let path = &self.server.rpc_path;
        if !path.starts_with('/') || path == "/" {
            bail!("server.rpc_path must be an absolute path below '/', got '{}'", path);
        }

        Ok(())
    }

    /// Merge with environment variables (WEBSEARCH_* prefix, plus MCP_SERVER_URL)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("WEBSEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = lookup("WEBSEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("WEBSEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = lookup("WEBSEARCH_ENDPOINT") {
            self.outgoing.endpoint = val;
        }
        if let Some(val) = lookup("WEBSEARCH_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
        if let Some(val) = lookup("MCP_SERVER_URL") {
            self.server.public_url = val;
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Name advertised to MCP clients
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Web Search".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Path the MCP tool surface is mounted on
    pub rpc_path: String,
    /// Address collaborating agents use to reach the tool surface
    pub public_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
            rpc_path: "/mcp".to_string(),
            public_url: "http://localhost:8080/mcp".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Search provider endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// User agent string
    pub user_agent: String,
    /// Generate a realistic user agent instead of `user_agent`
    pub random_user_agent: bool,
    /// Maximum number of redirects to follow
    pub max_redirects: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: 30.0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            random_user_agent: false,
            max_redirects: 10,
        }
    }
}
