//! MCP server exposing the Linear issue tracker as tools.
//!
//! Tool calls flow from the MCP [`server`] through the [`tools::HandlerFactory`]
//! to a feature handler in [`handlers`], which talks to Linear through the
//! [`graphql::RemoteClient`] obtained from the [`auth::AuthProvider`].

pub mod auth;
pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod server;
pub mod tools;
pub mod types;

#[cfg(test)]
mod test_support;

pub use auth::{AuthError, AuthProvider, Credential, LinearAuth, OAuthConfig};
pub use config::LinearConfig;
pub use error::{AUTH_REQUIRED_ERROR_CODE, ToolError, ToolFailure, ToolResult};
pub use graphql::{ClientError, LinearGraphQLClient, RemoteClient};
pub use handlers::{ContentItem, ContentType, ToolResponse};
pub use server::{LinearMcpServer, start_mcp_http};
pub use tools::{HandlerFactory, ToolInvocation, ToolName};
