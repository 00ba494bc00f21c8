//! Behaviour shared by all feature handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rmcp::model::JsonObject;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::response::ToolResponse;
use crate::auth::AuthProvider;
use crate::error::{ToolError, ToolFailure, ToolResult};
use crate::graphql::{ClientError, RemoteClient};

/// Page size used when a list tool is called without `first`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Required argument names, checked and reported in this order.
pub type ValidationSpec<'a> = &'a [&'a str];

/// Number of body characters echoed back in create/update summaries.
const BODY_PREVIEW_CHARS: usize = 50;

/// Capabilities every handler is built with.
///
/// `client` overrides the provider's own client; the factory passes the same
/// references to every handler.
#[derive(Clone)]
pub struct HandlerDeps {
    auth: Arc<dyn AuthProvider>,
    client: Option<Arc<dyn RemoteClient>>,
}

impl HandlerDeps {
    pub fn new(auth: Arc<dyn AuthProvider>, client: Option<Arc<dyn RemoteClient>>) -> Self {
        Self { auth, client }
    }

    pub fn auth(&self) -> &Arc<dyn AuthProvider> {
        &self.auth
    }
}

/// The auth -> validate -> respond contract shared by handlers.
pub trait BaseHandler {
    fn deps(&self) -> &HandlerDeps;

    /// Fail with [`ToolError::Unauthenticated`] unless a session exists;
    /// otherwise return the client to use for this call.
    fn verify_auth(&self) -> ToolResult<Arc<dyn RemoteClient>> {
        let deps = self.deps();
        if !deps.auth.is_authenticated() {
            return Err(ToolError::Unauthenticated);
        }
        match &deps.client {
            Some(client) => Ok(client.clone()),
            None => deps.auth.client().map_err(ToolError::from),
        }
    }

    fn validate_required_params(&self, args: &JsonObject, required: ValidationSpec<'_>) -> ToolResult<()> {
        validate_required_params(args, required)
    }

    /// Read validated arguments into their typed input.
    fn parse_arguments<T: DeserializeOwned>(&self, args: &JsonObject) -> ToolResult<T> {
        serde_json::from_value(Value::Object(args.clone()))
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))
    }

    fn create_response(&self, text: impl Into<String>) -> ToolResponse {
        ToolResponse::text(text)
    }

    fn create_json_response<T: Serialize + ?Sized>(&self, value: &T) -> ToolResult<ToolResponse> {
        ToolResponse::json(value).map_err(|e| ToolError::Client(ClientError::Decode(e.to_string())))
    }
}

/// Check that every name in `required` is present and non-null.
///
/// Reports all missing names, in the order given.
pub fn validate_required_params(args: &JsonObject, required: ValidationSpec<'_>) -> ToolResult<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| args.get(**name).is_none_or(Value::is_null))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ToolError::MissingParams(missing))
    }
}

/// Check required fields on each object of the array argument `field`.
///
/// Missing entries are reported as `field[index].name`. A non-array value is
/// reported as the array itself being missing.
pub fn validate_required_item_params(
    args: &JsonObject,
    field: &str,
    required: ValidationSpec<'_>,
) -> ToolResult<()> {
    let Some(items) = args.get(field).and_then(Value::as_array) else {
        return Err(ToolError::MissingParams(vec![field.to_string()]));
    };

    let mut missing = Vec::new();
    for (index, item) in items.iter().enumerate() {
        for name in required {
            if item.get(*name).is_none_or(Value::is_null) {
                missing.push(format!("{}[{}].{}", field, index, name));
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ToolError::MissingParams(missing))
    }
}

/// The single error normalization point: pair an error with its operation.
pub fn handle_error(error: ToolError, operation: &str) -> ToolFailure {
    let failure = ToolFailure::new(operation, error);
    warn!(operation, error = %failure, "tool invocation failed");
    failure
}

/// First 50 characters of `body`, with `...` appended only when cut.
pub fn truncate_body(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Render an RFC 3339 timestamp for humans; unparseable input is returned as is.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Resolve the requested page size. Absent or zero means the default.
pub fn page_size(first: Option<u32>) -> u32 {
    first.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE_SIZE)
}
