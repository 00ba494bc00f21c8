//! The uniform response envelope returned by every tool.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};

/// MIME type of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "text/plain")]
    Text,
    #[serde(rename = "application/json")]
    Json,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub text: String,
}

/// Successful tool output. Always holds at least one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<ContentItem>,
}

impl ToolResponse {
    /// A response with a single `text/plain` item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                content_type: ContentType::Text,
                text: text.into(),
            }],
        }
    }

    /// A response with a single `application/json` item holding `value`.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        Ok(Self {
            content: vec![ContentItem {
                content_type: ContentType::Json,
                text: serde_json::to_string(value)?,
            }],
        })
    }
}

impl From<ToolResponse> for CallToolResult {
    fn from(response: ToolResponse) -> Self {
        CallToolResult {
            content: response
                .content
                .into_iter()
                .map(|item| Content::text(item.text))
                .collect(),
            structured_content: None,
            is_error: Some(false),
            meta: None,
        }
    }
}
