//! Error types for tool execution.
//!
//! Handler methods return [`ToolError`]; the dispatch boundary pairs it with
//! the operation label into a [`ToolFailure`], which is what callers see.
//! MCP error codes used:
//! - `-32001`: authentication required
//! - `-32602`: invalid params (validation, unknown tool)
//! - `-32603`: internal error (remote failures)

use std::fmt;

use rmcp::model::ErrorCode;

use crate::auth::AuthError;
use crate::graphql::ClientError;

/// MCP error code returned when no valid Linear session exists.
pub const AUTH_REQUIRED_ERROR_CODE: i32 = -32001;

/// Why a tool invocation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// No valid session is present.
    Unauthenticated,

    /// The OAuth flow itself failed.
    Auth(AuthError),

    /// Required arguments were missing or null, in declaration order.
    MissingParams(Vec<String>),

    /// Arguments were present but could not be read as the expected types.
    InvalidArguments(String),

    /// The remote service reported `success: false` or omitted the payload.
    ///
    /// Carries the fixed, action-specific message (e.g. "Failed to create comment").
    RemoteFailure(String),

    /// The request to the remote service failed.
    Client(ClientError),

    /// No registration exists for this tool name.
    UnknownTool(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "Not authenticated"),
            Self::Auth(err) => write!(f, "{}", err),
            Self::MissingParams(names) => {
                write!(f, "Missing required parameters: {}", names.join(", "))
            }
            Self::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            Self::RemoteFailure(msg) => write!(f, "{}", msg),
            Self::Client(err) => write!(f, "{}", err),
            Self::UnknownTool(name) => write!(f, "No handler found for tool: {}", name),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<ClientError> for ToolError {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}

impl From<AuthError> for ToolError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAuthenticated => Self::Unauthenticated,
            other => Self::Auth(other),
        }
    }
}

impl ToolError {
    /// Build a remote failure with its fixed message.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteFailure(message.into())
    }
}

/// Result type of every handler method.
pub type ToolResult<T> = Result<T, ToolError>;

/// A failed tool invocation, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFailure {
    /// Human label of the attempted operation, e.g. "create comment"
    pub operation: String,
    pub error: ToolError,
}

impl ToolFailure {
    pub fn new(operation: impl Into<String>, error: ToolError) -> Self {
        Self {
            operation: operation.into(),
            error,
        }
    }

    /// Convert this failure to an MCP ErrorData for protocol responses.
    pub fn to_mcp_error(&self) -> rmcp::ErrorData {
        let message = self.to_string();
        match &self.error {
            ToolError::Unauthenticated | ToolError::Auth(_) => {
                rmcp::ErrorData::new(ErrorCode(AUTH_REQUIRED_ERROR_CODE), message, None)
            }
            ToolError::MissingParams(names) => rmcp::ErrorData::invalid_params(
                message,
                Some(serde_json::json!({ "missing": names })),
            ),
            ToolError::InvalidArguments(_) | ToolError::UnknownTool(_) => {
                rmcp::ErrorData::invalid_params(message, None)
            }
            ToolError::RemoteFailure(_) | ToolError::Client(_) => {
                rmcp::ErrorData::internal_error(message, None)
            }
        }
    }
}

impl fmt::Display for ToolFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            ToolError::RemoteFailure(msg) => write!(f, "{}", msg),
            ToolError::UnknownTool(_) => write!(f, "{}", self.error),
            other => write!(f, "Failed to {}: {}", self.operation, other),
        }
    }
}

impl std::error::Error for ToolFailure {}
