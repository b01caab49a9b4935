//! MCP server providing mock Shanghai weather.
//!
//! Implements a single tool, `get_shanghai_weather`, that derives a
//! reproducible report from an optional `YYYY-MM-DD` date. No real weather
//! source is consulted: the same date always yields the same report.

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
pub mod advisory;
pub mod report;
pub mod rng;
pub mod tools;
pub mod validate;

/// MCP weather server.
#[derive(Debug, Clone)]
pub struct WeatherServer {
    pub(crate) tool_router: ToolRouter<Self>,
}

impl Default for WeatherServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wmcp-weather".into(),
                title: Some("Walrus MCP Weather Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Weather server providing deterministic mock weather for Shanghai by date.".into(),
            ),
        }
    }
}
