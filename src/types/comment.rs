use serde::{Deserialize, Serialize};

use super::Connection;

/// Arguments for `linear_create_comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    pub body: String,
    pub issue_id: String,
}

/// Arguments for `linear_update_comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentInput {
    pub id: String,
    pub body: String,
}

/// The `input` object of the `commentUpdate` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentUpdateInput {
    pub body: String,
}

/// Arguments for `linear_delete_comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCommentInput {
    pub id: String,
}

/// Arguments for `linear_get_comments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsInput {
    pub issue_id: String,
    #[serde(default)]
    pub first: Option<u32>,
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentIssue {
    pub id: String,
    pub identifier: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub body: String,
    /// Null for comments posted by integrations.
    #[serde(default)]
    pub user: Option<CommentUser>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<CommentIssue>,
}

/// Payload of `commentCreate` / `commentUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentResponse {
    pub comment_create: CommentPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentResponse {
    pub comment_update: CommentPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentResponse {
    pub comment_delete: super::SuccessPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueComments {
    #[serde(default)]
    pub comments: Option<Connection<Comment>>,
}

/// Result of the issue comments query. `issue` is absent when the issue
/// does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCommentsResponse {
    #[serde(default)]
    pub issue: Option<IssueComments>,
}
