//! Typed request and response shapes for the Linear API.
//!
//! Response types round-trip through serde unchanged: fields that Linear may
//! omit are `Option` and skipped on serialization, so a value handed back to
//! the caller as JSON matches what the remote service returned.

mod comment;
mod issue;
mod project;
mod team;
mod user;

pub use comment::*;
pub use issue::*;
pub use project::*;
pub use team::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Relay-style pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// A page of nodes, optionally with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    pub nodes: Vec<T>,
}

/// Minimal `{id, name}` reference to another entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

/// Payload shared by mutations that only report success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessPayload {
    pub success: bool,
}
