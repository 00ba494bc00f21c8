//! Issue tools: single and batch creation, bulk updates, search and deletion.

use rmcp::model::JsonObject;
use tracing::{debug, info};

use super::base::{
    BaseHandler, HandlerDeps, ValidationSpec, page_size, validate_required_item_params,
};
use super::response::ToolResponse;
use crate::error::{ToolError, ToolResult};
use crate::tools::ToolName;
use crate::types::{
    BulkUpdateIssuesInput, CreateIssuesInput, DeleteIssueInput, DeleteIssuesInput,
    IssueBatchPayload, IssueCreateInput, IssuePayload, IssueSummary, SearchIssuesInput,
};

/// Fields every issue in a create request must carry.
pub const ISSUE_REQUIRED_FIELDS: ValidationSpec<'static> = &["title", "teamId"];

pub struct IssueHandler {
    deps: HandlerDeps,
}

impl BaseHandler for IssueHandler {
    fn deps(&self) -> &HandlerDeps {
        &self.deps
    }
}

pub(crate) fn created_issue(payload: IssuePayload, failure: &str) -> ToolResult<IssueSummary> {
    match payload {
        IssuePayload {
            success: true,
            issue: Some(issue),
        } => Ok(issue),
        _ => Err(ToolError::remote(failure)),
    }
}

pub(crate) fn created_issues(
    payload: IssueBatchPayload,
    failure: &str,
) -> ToolResult<Vec<IssueSummary>> {
    match payload {
        IssueBatchPayload {
            success: true,
            issues: Some(issues),
        } => Ok(issues),
        _ => Err(ToolError::remote(failure)),
    }
}

/// One `- IDENT: title` line per issue, followed by its URL.
pub(crate) fn issue_lines(issues: &[IssueSummary]) -> String {
    issues
        .iter()
        .map(|issue| format!("- {}: {}\n  URL: {}", issue.identifier, issue.title, issue.url))
        .collect::<Vec<_>>()
        .join("\n")
}

fn reject_empty<T>(items: &[T], field: &str) -> ToolResult<()> {
    if items.is_empty() {
        return Err(ToolError::InvalidArguments(format!("{} must not be empty", field)));
    }
    Ok(())
}

impl IssueHandler {
    pub fn new(deps: HandlerDeps) -> Self {
        Self { deps }
    }

    pub async fn handle_create_issue(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::CreateIssue.required_params())?;
        let input: IssueCreateInput = self.parse_arguments(args)?;

        let result = client.create_issue(input).await?;
        let issue = created_issue(result.issue_create, "Failed to create issue")?;

        let mut text = format!(
            "Successfully created issue\nIssue: {}\nTitle: {}\nURL: {}",
            issue.identifier, issue.title, issue.url
        );
        if let Some(project) = &issue.project {
            text.push_str(&format!("\nProject: {}", project.name));
        }
        Ok(self.create_response(text))
    }

    /// Creates several issues in one batch mutation.
    pub async fn handle_create_issues(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::CreateIssues.required_params())?;
        validate_required_item_params(args, "issues", ISSUE_REQUIRED_FIELDS)?;
        let input: CreateIssuesInput = self.parse_arguments(args)?;
        reject_empty(&input.issues, "issues")?;

        let result = client.create_issues(input.issues).await?;
        let issues = created_issues(result.issue_batch_create, "Failed to create issues")?;

        info!(count = issues.len(), "created issues");
        Ok(self.create_response(format!(
            "Successfully created {} issues:\n{}",
            issues.len(),
            issue_lines(&issues)
        )))
    }

    /// Applies the same update to each issue, one at a time.
    ///
    /// Stops at the first issue that fails; issues updated before it stay updated.
    pub async fn handle_bulk_update_issues(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::BulkUpdateIssues.required_params())?;
        let input: BulkUpdateIssuesInput = self.parse_arguments(args)?;
        reject_empty(&input.issue_ids, "issueIds")?;

        let mut updated = Vec::with_capacity(input.issue_ids.len());
        for id in &input.issue_ids {
            let failure = format!("Failed to update issue {}", id);
            let result = client
                .update_issue(id.clone(), input.update.clone())
                .await
                .map_err(|e| ToolError::remote(format!("{}: {}", failure, e)))?;
            updated.push(created_issue(result.issue_update, &failure)?);
        }

        Ok(self.create_response(format!(
            "Successfully updated {} issues:\n{}",
            updated.len(),
            issue_lines(&updated)
        )))
    }

    /// Searches issues and returns one page of results as JSON.
    pub async fn handle_search_issues(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        let input: SearchIssuesInput = self.parse_arguments(args)?;

        let filter = input.to_filter();
        let first = page_size(input.first);
        debug!(filters = filter.len(), first, "searching issues");

        let result = client.search_issues(filter, first, input.after).await?;
        if result.issues.is_none() {
            return Err(ToolError::remote("Failed to search issues"));
        }
        self.create_json_response(&result)
    }

    pub async fn handle_delete_issue(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::DeleteIssue.required_params())?;
        let input: DeleteIssueInput = self.parse_arguments(args)?;

        let result = client.delete_issue(input.id.clone()).await?;
        if !result.issue_delete.success {
            return Err(ToolError::remote("Failed to delete issue"));
        }
        Ok(self.create_response(format!("Successfully deleted issue {}", input.id)))
    }

    /// Deletes issues one at a time, stopping at the first failure.
    pub async fn handle_delete_issues(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::DeleteIssues.required_params())?;
        let input: DeleteIssuesInput = self.parse_arguments(args)?;
        reject_empty(&input.ids, "ids")?;

        for id in &input.ids {
            let failure = format!("Failed to delete issue {}", id);
            let result = client
                .delete_issue(id.clone())
                .await
                .map_err(|e| ToolError::remote(format!("{}: {}", failure, e)))?;
            if !result.issue_delete.success {
                return Err(ToolError::remote(failure));
            }
        }

        Ok(self.create_response(format!(
            "Successfully deleted {} issues: {}",
            input.ids.len(),
            input.ids.join(", ")
        )))
    }
}
