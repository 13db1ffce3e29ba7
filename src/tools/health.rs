//! The `health` tool

use serde_json::json;

pub const SERVICE_NAME: &str = "web-search-api";

/// Liveness payload; constant, no side effects
pub fn health() -> String {
    json!({ "status": "healthy", "service": SERVICE_NAME }).to_string()
}
