//! MCP server implementation using rmcp.
//!
//! Exposes the Linear tools over stdio or Streamable HTTP. Tool calls are
//! routed through a shared [`HandlerFactory`].

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::tools::{HandlerFactory, ToolInvocation};

/// MCP server that delegates every tool call to the handler factory.
#[derive(Clone)]
pub struct LinearMcpServer {
    factory: Arc<HandlerFactory>,
}

impl LinearMcpServer {
    pub fn new(factory: Arc<HandlerFactory>) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &Arc<HandlerFactory> {
        &self.factory
    }
}

impl ServerHandler for LinearMcpServer {
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let result = ListToolsResult {
            tools: self.factory.list_tools(),
            next_cursor: None,
            ..Default::default()
        };
        std::future::ready(Ok(result))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        let invocation = ToolInvocation::new(request.name.to_string(), request.arguments);
        let factory = self.factory.clone();

        async move {
            factory
                .dispatch(invocation)
                .await
                .map(CallToolResult::from)
                .map_err(|failure| failure.to_mcp_error())
        }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Linear issue tracker tools: issues, projects, teams, users and comments. \
                 Authenticate with an API key or run linear_auth / linear_auth_callback first."
                    .to_string(),
            ),
        }
    }
}

/// Serve MCP over Streamable HTTP at `/mcp` on `bind`, e.g. `127.0.0.1:3943`.
pub async fn start_mcp_http(factory: Arc<HandlerFactory>, bind: &str) -> Result<()> {
    let service = StreamableHttpService::new(
        move || Ok(LinearMcpServer::new(factory.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = Router::new()
        .nest_service("/mcp", service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    let listener = tokio::net::TcpListener::bind(bind).await?;

    tracing::info!("MCP HTTP server listening on http://{}/mcp", bind);
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockAuth;

    #[test]
    fn test_server_info_enables_tools() {
        let server = LinearMcpServer::new(Arc::new(HandlerFactory::new(
            MockAuth::authenticated(),
            None,
        )));
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(server.factory().list_tools().len(), 17);
    }
}
