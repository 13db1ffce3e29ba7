//! websearch-mcp: a web search tool server for LLM agents
//!
//! Posts queries to DuckDuckGo's HTML front-end, extracts structured results
//! from the returned markup and serves them as JSON tools over the Model
//! Context Protocol.

pub mod config;
pub mod engines;
pub mod error;
pub mod mcp;
pub mod network;
pub mod results;
pub mod search;
pub mod tools;
pub mod web;

pub use config::Settings;
pub use engines::Engine;
pub use error::SearchError;
pub use results::{extract, SearchResult};
pub use search::{Search, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
