//! websearch-mcp: a web search tool server for LLM agents
//!
//! This is the main entry point for the application.

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;
use websearch_mcp::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so `debug` can pick the default level
    let settings_path = config::find_settings_file();
    let settings = config::load(settings_path.as_deref())?;

    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("Starting websearch-mcp v{}", websearch_mcp::VERSION);
    match settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    info!("Search endpoint: {}", settings.outgoing.endpoint);

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );
    let rpc_path = settings.server.rpc_path.clone();
    info!("Agents reach this server at {}", settings.server.public_url);

    // Create application state and router
    let state = AppState::new(settings, client)?;
    let app = create_router(state);

    info!("Starting server on http://{}{}", addr, rpc_path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
