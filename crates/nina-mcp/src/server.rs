//! MCP protocol surface for the gateway.
//!
//! Implements `rmcp::ServerHandler` directly instead of the per-tool macro
//! router: the catalog is data, so `list_tools` and `call_tool` are two
//! small functions over the table.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool, ToolsCapability,
    },
    service::RequestContext,
    transport::stdio,
    ErrorData, RoleServer, ServerHandler, ServiceExt,
};
use thiserror::Error;
use tracing::info;

use nina_mcp_core::catalog;

use crate::gateway::NinaGateway;

/// Errors establishing or running the stdio transport.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Transport error: {0}")]
    Transport(String),
}

/// The MCP server: protocol handling on top of [`NinaGateway`].
#[derive(Clone)]
pub struct NinaMcpServer {
    gateway: Arc<NinaGateway>,
}

impl NinaMcpServer {
    pub fn new(gateway: NinaGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Serve over stdin/stdout, the standard MCP transport, until the client
    /// disconnects.
    pub async fn serve_stdio(self) -> Result<(), ServeError> {
        info!(tools = catalog::all().len(), "Starting MCP server on stdio");

        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServeError::Transport(e.to_string()))?;
        service
            .waiting()
            .await
            .map_err(|e| ServeError::Transport(e.to_string()))?;
        Ok(())
    }
}

/// Convert one catalog entry into the wire-format tool descriptor.
fn to_mcp_tool(spec: &'static catalog::ToolSpec) -> Tool {
    Tool {
        name: Cow::Borrowed(spec.name),
        title: None,
        description: Some(Cow::Borrowed(spec.description)),
        input_schema: Arc::new(spec.input_schema()),
        output_schema: None,
        annotations: None,
        icons: None,
    }
}

impl ServerHandler for NinaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "nina-advanced-api-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Control NINA (Nighttime Imaging 'N' Astronomy) through its Advanced API: \
                 cameras, mounts, focusers, filter wheels, rotators, flat panels, switches, \
                 weather stations, safety monitors, guiders, domes, sequences, plate solving \
                 and framing. Each tool issues one HTTP request against the local NINA \
                 instance and returns its JSON response as text."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools: Vec<Tool> = catalog::all().iter().map(to_mcp_tool).collect();
        info!(count = tools.len(), "Listing tools");
        Ok(ListToolsResult {
            next_cursor: None,
            tools,
        })
    }

    /// Tool failures are reported inline as the call's text result, exactly
    /// like the original server: the protocol call itself always succeeds.
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request.arguments.unwrap_or_default();
        let text = self.gateway.invoke(&request.name, &args).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_conversion_keeps_name_description_and_schema() {
        let spec = catalog::find("nina_capture_image").unwrap();
        let tool = to_mcp_tool(spec);

        assert_eq!(tool.name, "nina_capture_image");
        assert_eq!(tool.description.as_deref(), Some(spec.description));
        assert_eq!(tool.input_schema["type"], "object");
        assert!(tool.input_schema["properties"]
            .as_object()
            .unwrap()
            .contains_key("exposure_time"));
    }

    #[test]
    fn every_catalog_entry_converts() {
        let tools: Vec<Tool> = catalog::all().iter().map(to_mcp_tool).collect();
        assert_eq!(tools.len(), catalog::all().len());
        for tool in &tools {
            assert!(tool.name.starts_with("nina_"));
            assert!(serde_json::to_value(&tool.input_schema).unwrap().is_object());
        }
    }
}
