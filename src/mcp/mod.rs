//! Model Context Protocol surface
//!
//! The tools are served by rmcp; this module only describes them and
//! builds the streamable-HTTP service the web layer mounts.

mod server;

pub use server::{SearchArgs, WebSearchServer};

use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, tower::StreamableHttpService,
};
use rmcp::transport::StreamableHttpServerConfig;

/// Streamable-HTTP transport serving `server`, one clone per session
pub fn streamable_http_service(
    server: WebSearchServer,
) -> StreamableHttpService<WebSearchServer, LocalSessionManager> {
    StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    )
}
