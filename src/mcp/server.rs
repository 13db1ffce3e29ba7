//! rmcp server exposing the `search` and `health` tools

use crate::search::{Search, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
use crate::tools;
use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Arguments of the `search` tool.
///
/// Both fields stay loosely typed so that a wrong-typed `query` is reported
/// in the tool payload and a wrong-typed `limit` falls back to the default,
/// instead of failing the call at deserialization.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SearchArgs {
    #[serde(default)]
    #[schemars(schema_with = "query_schema")]
    pub query: Option<Value>,
    #[serde(default)]
    #[schemars(schema_with = "limit_schema")]
    pub limit: Option<Value>,
}

fn query_schema(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "description": "Search query string"
    })
}

fn limit_schema(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "integer",
        "description": "Maximum number of results to return (1-10, default: 5)",
        "minimum": MIN_LIMIT,
        "maximum": MAX_LIMIT,
        "default": DEFAULT_LIMIT
    })
}

/// Tool server handed to rmcp's transports
#[derive(Clone)]
pub struct WebSearchServer {
    tool_router: ToolRouter<Self>,
    search: Search,
    name: String,
}

#[tool_router]
impl WebSearchServer {
    pub fn new(search: Search, name: impl Into<String>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            search,
            name: name.into(),
        }
    }

    #[tool(description = "Search the web and return structured results (title, url, description) as JSON.")]
    async fn search(
        &self,
        Parameters(args): Parameters<SearchArgs>,
    ) -> Result<CallToolResult, McpError> {
        debug!("search called (query {:?}, limit {:?})", args.query, args.limit);
        let text = tools::search(&self.search, args.query.as_ref(), args.limit.as_ref()).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Health check endpoint. Returns the service status.")]
    async fn health(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(tools::health())]))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for WebSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Web search over DuckDuckGo. Call `search` with a query and an optional limit (1-10)."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: crate::VERSION.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
