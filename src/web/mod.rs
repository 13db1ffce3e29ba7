//! Web server module
//!
//! Hosts the MCP tool surface and a plain health endpoint.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
