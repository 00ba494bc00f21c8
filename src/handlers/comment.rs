//! Creating, updating, deleting and listing comments.

use rmcp::model::JsonObject;
use tracing::debug;

use super::base::{BaseHandler, HandlerDeps, format_timestamp, page_size, truncate_body};
use super::response::ToolResponse;
use crate::error::{ToolError, ToolResult};
use crate::tools::ToolName;
use crate::types::{
    Comment, CommentPayload, CommentUpdateInput, CreateCommentInput, DeleteCommentInput,
    GetCommentsInput, UpdateCommentInput,
};

/// Handler for the `linear_*_comment(s)` tools.
pub struct CommentHandler {
    deps: HandlerDeps,
}

impl BaseHandler for CommentHandler {
    fn deps(&self) -> &HandlerDeps {
        &self.deps
    }
}

/// The comment carried by a successful create/update payload.
fn successful_comment(payload: CommentPayload, failure: &str) -> ToolResult<Comment> {
    match payload {
        CommentPayload {
            success: true,
            comment: Some(comment),
        } => Ok(comment),
        _ => Err(ToolError::remote(failure)),
    }
}

fn author_name(comment: &Comment) -> &str {
    comment
        .user
        .as_ref()
        .map(|user| user.name.as_str())
        .unwrap_or("Unknown")
}

impl CommentHandler {
    pub fn new(deps: HandlerDeps) -> Self {
        Self { deps }
    }

    /// Creates a comment on an issue.
    pub async fn handle_create_comment(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::CreateComment.required_params())?;
        let input: CreateCommentInput = self.parse_arguments(args)?;

        let result = client.create_comment(input).await?;
        let comment = successful_comment(result.comment_create, "Failed to create comment")?;

        let issue_identifier = comment
            .issue
            .as_ref()
            .map(|issue| issue.identifier.as_str())
            .unwrap_or("Unknown");

        Ok(self.create_response(format!(
            "Successfully created comment on issue {}\n\
             Comment ID: {}\n\
             Created: {}\n\
             By: {}\n\
             Body: {}",
            issue_identifier,
            comment.id,
            format_timestamp(&comment.created_at),
            author_name(&comment),
            truncate_body(&comment.body),
        )))
    }

    /// Updates the body of an existing comment.
    pub async fn handle_update_comment(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::UpdateComment.required_params())?;
        let input: UpdateCommentInput = self.parse_arguments(args)?;

        let result = client
            .update_comment(input.id, CommentUpdateInput { body: input.body })
            .await?;
        let comment = successful_comment(result.comment_update, "Failed to update comment")?;

        Ok(self.create_response(format!(
            "Successfully updated comment\n\
             Comment ID: {}\n\
             Updated: {}\n\
             By: {}\n\
             Body: {}",
            comment.id,
            format_timestamp(&comment.updated_at),
            author_name(&comment),
            truncate_body(&comment.body),
        )))
    }

    pub async fn handle_delete_comment(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::DeleteComment.required_params())?;
        let input: DeleteCommentInput = self.parse_arguments(args)?;

        let result = client.delete_comment(input.id.clone()).await?;
        if !result.comment_delete.success {
            return Err(ToolError::remote("Failed to delete comment"));
        }

        Ok(self.create_response(format!("Successfully deleted comment {}", input.id)))
    }

    /// Gets one page of an issue's comments.
    ///
    /// The remote result is returned whole, pagination metadata included;
    /// walking further pages is up to the caller.
    pub async fn handle_get_comments(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::GetComments.required_params())?;
        let input: GetCommentsInput = self.parse_arguments(args)?;

        let first = page_size(input.first);
        debug!(issue_id = %input.issue_id, first, after = ?input.after, "fetching comments");

        let result = client
            .get_issue_comments(input.issue_id, first, input.after)
            .await?;

        let found = result
            .issue
            .as_ref()
            .is_some_and(|issue| issue.comments.is_some());
        if !found {
            return Err(ToolError::remote("Failed to get comments or issue not found"));
        }

        self.create_json_response(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolFailure;
    use crate::handlers::{ContentType, handle_error};
    use crate::test_support::{RecordedCall, args, mock_deps, response_text};
    use serde_json::{Value, json};

    fn created_comment(body: &str, issue: Option<Value>) -> Value {
        let mut comment = json!({
            "id": "comment-123",
            "body": body,
            "user": { "id": "user-123", "name": "Test User" },
            "createdAt": "2024-05-01T09:30:00.000Z",
            "updatedAt": "2024-05-01T09:45:00.000Z"
        });
        if let Some(issue) = issue {
            comment["issue"] = issue;
        }
        comment
    }

    #[tokio::test]
    async fn test_create_comment_success() {
        let (deps, client, _) = mock_deps();
        client.respond(
            "create_comment",
            json!({
                "commentCreate": {
                    "success": true,
                    "comment": created_comment(
                        "Test comment",
                        Some(json!({ "id": "issue-123", "identifier": "TEST-123", "title": "Test Issue" }))
                    )
                }
            }),
        );
        let handler = CommentHandler::new(deps);

        let result = handler
            .handle_create_comment(&args(json!({ "body": "Test comment", "issueId": "issue-123" })))
            .await
            .unwrap();

        assert_eq!(result.content[0].content_type, ContentType::Text);
        let text = response_text(&result);
        assert!(text.contains("Successfully created comment"));
        assert!(text.contains("TEST-123"));
        assert!(text.contains("Comment ID: comment-123"));
        assert!(text.contains("Created: 2024-05-01 09:30:00 UTC"));
        assert!(text.contains("By: Test User"));
        assert!(text.ends_with("Body: Test comment"));

        assert_eq!(
            client.calls(),
            vec![RecordedCall {
                operation: "create_comment",
                args: json!({ "body": "Test comment", "issueId": "issue-123" }),
            }]
        );
    }

    #[tokio::test]
    async fn test_create_comment_passes_only_validated_arguments() {
        let (deps, client, _) = mock_deps();
        client.respond(
            "create_comment",
            json!({ "commentCreate": { "success": true, "comment": created_comment("x", None) } }),
        );
        let handler = CommentHandler::new(deps);

        handler
            .handle_create_comment(&args(json!({ "body": "x", "issueId": "i", "extra": true })))
            .await
            .unwrap();

        assert_eq!(client.calls()[0].args, json!({ "body": "x", "issueId": "i" }));
    }

    #[tokio::test]
    async fn test_create_comment_unknown_issue_and_truncation() {
        let long_body = "x".repeat(80);
        let (deps, client, _) = mock_deps();
        client.respond(
            "create_comment",
            json!({ "commentCreate": { "success": true, "comment": created_comment(&long_body, None) } }),
        );
        let handler = CommentHandler::new(deps);

        let result = handler
            .handle_create_comment(&args(json!({ "body": long_body, "issueId": "issue-123" })))
            .await
            .unwrap();

        let text = response_text(&result);
        assert!(text.contains("on issue Unknown"));
        assert!(text.ends_with(&format!("Body: {}...", "x".repeat(50))));
    }

    #[tokio::test]
    async fn test_create_comment_failure() {
        let (deps, client, _) = mock_deps();
        client.respond("create_comment", json!({ "commentCreate": { "success": false } }));
        let handler = CommentHandler::new(deps);

        let err = handler
            .handle_create_comment(&args(json!({ "body": "Test comment", "issueId": "issue-123" })))
            .await
            .unwrap_err();

        assert_eq!(err, ToolError::remote("Failed to create comment"));
        assert_eq!(handle_error(err, "create comment").to_string(), "Failed to create comment");
    }

    #[tokio::test]
    async fn test_create_comment_success_without_payload_fails() {
        let (deps, client, _) = mock_deps();
        client.respond("create_comment", json!({ "commentCreate": { "success": true } }));
        let handler = CommentHandler::new(deps);

        let err = handler
            .handle_create_comment(&args(json!({ "body": "b", "issueId": "i" })))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::remote("Failed to create comment"));
    }

    #[tokio::test]
    async fn test_create_comment_missing_params_skips_remote() {
        let (deps, client, _) = mock_deps();
        let handler = CommentHandler::new(deps);

        let err = handler
            .handle_create_comment(&args(json!({ "body": "only body" })))
            .await
            .unwrap_err();

        assert_eq!(err, ToolError::MissingParams(vec!["issueId".to_string()]));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unauthenticated_fails_before_validation() {
        let (deps, client, auth) = mock_deps();
        auth.set_authenticated(false);
        let handler = CommentHandler::new(deps);

        let err = handler.handle_create_comment(&args(json!({}))).await.unwrap_err();
        assert_eq!(err, ToolError::Unauthenticated);

        let failure: ToolFailure = handle_error(err, "create comment");
        assert!(failure.to_string().contains("Not authenticated"));

        for result in [
            handler.handle_update_comment(&args(json!({}))).await,
            handler.handle_delete_comment(&args(json!({}))).await,
            handler.handle_get_comments(&args(json!({}))).await,
        ] {
            assert_eq!(result.unwrap_err(), ToolError::Unauthenticated);
        }
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_comment_success() {
        let (deps, client, _) = mock_deps();
        client.respond(
            "update_comment",
            json!({ "commentUpdate": { "success": true, "comment": created_comment("Updated comment", None) } }),
        );
        let handler = CommentHandler::new(deps);

        let result = handler
            .handle_update_comment(&args(json!({ "id": "comment-123", "body": "Updated comment" })))
            .await
            .unwrap();

        let text = response_text(&result);
        assert!(text.contains("Successfully updated comment"));
        assert!(text.contains("Updated: 2024-05-01 09:45:00 UTC"));
        assert_eq!(
            client.calls()[0].args,
            json!(["comment-123", { "body": "Updated comment" }])
        );
    }

    #[tokio::test]
    async fn test_update_comment_failure_and_validation() {
        let (deps, client, _) = mock_deps();
        client.respond("update_comment", json!({ "commentUpdate": { "success": false } }));
        let handler = CommentHandler::new(deps);

        let err = handler
            .handle_update_comment(&args(json!({ "id": "comment-123", "body": "b" })))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::remote("Failed to update comment"));

        let err = handler.handle_update_comment(&args(json!({}))).await.unwrap_err();
        assert_eq!(
            err,
            ToolError::MissingParams(vec!["id".to_string(), "body".to_string()])
        );
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_comment() {
        let (deps, client, _) = mock_deps();
        client
            .respond("delete_comment", json!({ "commentDelete": { "success": true } }))
            .respond("delete_comment", json!({ "commentDelete": { "success": false } }));
        let handler = CommentHandler::new(deps);

        let result = handler
            .handle_delete_comment(&args(json!({ "id": "comment-123" })))
            .await
            .unwrap();
        assert_eq!(response_text(&result), "Successfully deleted comment comment-123");
        assert_eq!(client.calls()[0].args, json!(["comment-123"]));

        let err = handler
            .handle_delete_comment(&args(json!({ "id": "comment-456" })))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::remote("Failed to delete comment"));
    }

    #[tokio::test]
    async fn test_get_comments_passes_result_through() {
        let remote = json!({
            "issue": {
                "comments": {
                    "pageInfo": { "hasNextPage": true, "endCursor": "cursor-abc" },
                    "nodes": [{
                        "id": "comment-123",
                        "body": "Test comment",
                        "user": { "id": "user-123", "name": "Test User", "email": null },
                        "createdAt": "2024-05-01T09:30:00.000Z",
                        "updatedAt": "2024-05-01T09:30:00.000Z"
                    }]
                }
            }
        });
        let (deps, client, _) = mock_deps();
        client.respond("get_issue_comments", remote.clone());
        let handler = CommentHandler::new(deps);

        let result = handler
            .handle_get_comments(&args(json!({ "issueId": "issue-123", "first": 10 })))
            .await
            .unwrap();

        assert_eq!(result.content[0].content_type, ContentType::Json);
        let payload: Value = serde_json::from_str(response_text(&result)).unwrap();
        assert_eq!(payload, remote);
        assert_eq!(payload["issue"]["comments"]["pageInfo"]["hasNextPage"], true);
        assert_eq!(payload["issue"]["comments"]["pageInfo"]["endCursor"], "cursor-abc");

        assert_eq!(
            client.calls(),
            vec![RecordedCall {
                operation: "get_issue_comments",
                args: json!(["issue-123", 10, null]),
            }]
        );
    }

    #[tokio::test]
    async fn test_get_comments_keeps_comments_without_author() {
        let remote = json!({
            "issue": {
                "comments": {
                    "pageInfo": { "hasNextPage": false, "endCursor": null },
                    "nodes": [{
                        "id": "comment-bot",
                        "body": "Linked pull request",
                        "user": null,
                        "createdAt": "2024-05-01T09:30:00.000Z",
                        "updatedAt": "2024-05-01T09:30:00.000Z"
                    }]
                }
            }
        });
        let (deps, client, _) = mock_deps();
        client.respond("get_issue_comments", remote.clone());
        let handler = CommentHandler::new(deps);

        let result = handler
            .handle_get_comments(&args(json!({ "issueId": "issue-123" })))
            .await
            .unwrap();

        let payload: Value = serde_json::from_str(response_text(&result)).unwrap();
        assert_eq!(payload, remote);
    }

    #[tokio::test]
    async fn test_update_comment_without_author() {
        let mut comment = created_comment("From a bot", None);
        comment["user"] = Value::Null;
        let (deps, client, _) = mock_deps();
        client.respond(
            "update_comment",
            json!({ "commentUpdate": { "success": true, "comment": comment } }),
        );
        let handler = CommentHandler::new(deps);

        let result = handler
            .handle_update_comment(&args(json!({ "id": "comment-123", "body": "From a bot" })))
            .await
            .unwrap();
        assert!(response_text(&result).contains("By: Unknown"));
    }

    #[tokio::test]
    async fn test_get_comments_default_page_and_cursor() {
        let (deps, client, _) = mock_deps();
        client.respond(
            "get_issue_comments",
            json!({ "issue": { "comments": { "pageInfo": { "hasNextPage": false, "endCursor": null }, "nodes": [] } } }),
        );
        let handler = CommentHandler::new(deps);

        handler
            .handle_get_comments(&args(json!({ "issueId": "issue-123", "after": "cursor-1" })))
            .await
            .unwrap();

        assert_eq!(client.calls()[0].args, json!(["issue-123", 50, "cursor-1"]));
    }

    #[tokio::test]
    async fn test_get_comments_issue_not_found() {
        let (deps, client, _) = mock_deps();
        client.respond("get_issue_comments", json!({}));
        let handler = CommentHandler::new(deps);

        let err = handler
            .handle_get_comments(&args(json!({ "issueId": "invalid-issue" })))
            .await
            .unwrap_err();

        let failure = handle_error(err, "get comments");
        assert!(failure.to_string().contains("Failed to get comments or issue not found"));
    }

    #[tokio::test]
    async fn test_transport_error_is_reported_with_operation() {
        let (deps, _client, _) = mock_deps();
        let handler = CommentHandler::new(deps);

        // No queued response: the mock fails like an unreachable server.
        let err = handler
            .handle_delete_comment(&args(json!({ "id": "comment-1" })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Client(_)));
        assert!(
            handle_error(err, "delete comment")
                .to_string()
                .starts_with("Failed to delete comment: ")
        );
    }
}
