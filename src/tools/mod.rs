//! Tool entry points
//!
//! Plain functions returning JSON text. The MCP layer in `crate::mcp`
//! describes them to agents and forwards calls here.

pub mod health;
pub mod web_search;

pub use health::health;
pub use web_search::{search, SearchResponse};
