//! The fixed set of Linear tool names.

use std::fmt;
use std::str::FromStr;

use rmcp::model::JsonObject;
use serde_json::{Value, json};

use crate::error::ToolError;
use crate::handlers::{ISSUE_REQUIRED_FIELDS, PROJECT_REQUIRED_FIELDS, ValidationSpec};

/// Every tool the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    Auth,
    AuthCallback,
    CreateIssue,
    CreateIssues,
    BulkUpdateIssues,
    SearchIssues,
    DeleteIssue,
    DeleteIssues,
    CreateProjectWithIssues,
    GetProject,
    SearchProjects,
    GetTeams,
    GetUser,
    CreateComment,
    UpdateComment,
    DeleteComment,
    GetComments,
}

impl ToolName {
    pub const ALL: [ToolName; 17] = [
        Self::Auth,
        Self::AuthCallback,
        Self::CreateIssue,
        Self::CreateIssues,
        Self::BulkUpdateIssues,
        Self::SearchIssues,
        Self::DeleteIssue,
        Self::DeleteIssues,
        Self::CreateProjectWithIssues,
        Self::GetProject,
        Self::SearchProjects,
        Self::GetTeams,
        Self::GetUser,
        Self::CreateComment,
        Self::UpdateComment,
        Self::DeleteComment,
        Self::GetComments,
    ];

    /// The wire name, e.g. `linear_create_comment`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "linear_auth",
            Self::AuthCallback => "linear_auth_callback",
            Self::CreateIssue => "linear_create_issue",
            Self::CreateIssues => "linear_create_issues",
            Self::BulkUpdateIssues => "linear_bulk_update_issues",
            Self::SearchIssues => "linear_search_issues",
            Self::DeleteIssue => "linear_delete_issue",
            Self::DeleteIssues => "linear_delete_issues",
            Self::CreateProjectWithIssues => "linear_create_project_with_issues",
            Self::GetProject => "linear_get_project",
            Self::SearchProjects => "linear_search_projects",
            Self::GetTeams => "linear_get_teams",
            Self::GetUser => "linear_get_user",
            Self::CreateComment => "linear_create_comment",
            Self::UpdateComment => "linear_update_comment",
            Self::DeleteComment => "linear_delete_comment",
            Self::GetComments => "linear_get_comments",
        }
    }

    /// Name of the handler method that serves this tool.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Auth => "handle_auth",
            Self::AuthCallback => "handle_auth_callback",
            Self::CreateIssue => "handle_create_issue",
            Self::CreateIssues => "handle_create_issues",
            Self::BulkUpdateIssues => "handle_bulk_update_issues",
            Self::SearchIssues => "handle_search_issues",
            Self::DeleteIssue => "handle_delete_issue",
            Self::DeleteIssues => "handle_delete_issues",
            Self::CreateProjectWithIssues => "handle_create_project_with_issues",
            Self::GetProject => "handle_get_project",
            Self::SearchProjects => "handle_search_projects",
            Self::GetTeams => "handle_get_teams",
            Self::GetUser => "handle_get_user",
            Self::CreateComment => "handle_create_comment",
            Self::UpdateComment => "handle_update_comment",
            Self::DeleteComment => "handle_delete_comment",
            Self::GetComments => "handle_get_comments",
        }
    }

    /// Human label used in failure messages: "Failed to <label>: ...".
    pub fn operation_label(&self) -> &'static str {
        match self {
            Self::Auth => "start authentication",
            Self::AuthCallback => "complete authentication",
            Self::CreateIssue => "create issue",
            Self::CreateIssues => "create issues",
            Self::BulkUpdateIssues => "update issues",
            Self::SearchIssues => "search issues",
            Self::DeleteIssue => "delete issue",
            Self::DeleteIssues => "delete issues",
            Self::CreateProjectWithIssues => "create project with issues",
            Self::GetProject => "get project",
            Self::SearchProjects => "search projects",
            Self::GetTeams => "get teams",
            Self::GetUser => "get user",
            Self::CreateComment => "create comment",
            Self::UpdateComment => "update comment",
            Self::DeleteComment => "delete comment",
            Self::GetComments => "get comments",
        }
    }

    /// Whether the tool may run without a session.
    pub fn is_auth_tool(&self) -> bool {
        matches!(self, Self::Auth | Self::AuthCallback)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Auth => "Start the OAuth flow with Linear. Returns the URL to visit.",
            Self::AuthCallback => "Complete the OAuth flow with the authorization code.",
            Self::CreateIssue => "Create a new issue in Linear.",
            Self::CreateIssues => "Create multiple issues in one request.",
            Self::BulkUpdateIssues => "Apply the same update to multiple issues.",
            Self::SearchIssues => {
                "Search issues by text, team, assignee, status or priority. \
                 Returns one page; pass the returned endCursor as `after` for the next."
            }
            Self::DeleteIssue => "Delete an issue.",
            Self::DeleteIssues => "Delete multiple issues.",
            Self::CreateProjectWithIssues => "Create a project and the given issues inside it.",
            Self::GetProject => "Get a project with its teams and issues.",
            Self::SearchProjects => "Search projects by name.",
            Self::GetTeams => "List teams with their workflow states.",
            Self::GetUser => "Get the authenticated user and their teams.",
            Self::CreateComment => "Create a comment on an issue.",
            Self::UpdateComment => "Update the body of a comment.",
            Self::DeleteComment => "Delete a comment.",
            Self::GetComments => {
                "Get one page of comments on an issue. \
                 Pass the returned endCursor as `after` for the next page."
            }
        }
    }

    /// Top-level arguments that must be present and non-null.
    ///
    /// Shared by the advertised schema and the handler's validation.
    pub fn required_params(&self) -> ValidationSpec<'static> {
        match self {
            Self::Auth => &["clientId", "clientSecret", "redirectUri"],
            Self::AuthCallback => &["code"],
            Self::CreateIssue => ISSUE_REQUIRED_FIELDS,
            Self::CreateIssues => &["issues"],
            Self::BulkUpdateIssues => &["issueIds", "update"],
            Self::SearchIssues | Self::GetTeams | Self::GetUser => &[],
            Self::DeleteIssue | Self::GetProject | Self::DeleteComment => &["id"],
            Self::DeleteIssues => &["ids"],
            Self::CreateProjectWithIssues => &["project", "issues"],
            Self::SearchProjects => &["name"],
            Self::CreateComment => &["body", "issueId"],
            Self::UpdateComment => &["id", "body"],
            Self::GetComments => &["issueId"],
        }
    }

    /// JSON Schema of the tool's arguments, as advertised in `tools/list`.
    pub fn input_schema(&self) -> JsonObject {
        object_schema(self.properties(), self.required_params())
    }

    fn properties(&self) -> Value {
        match self {
            Self::Auth => json!({
                "clientId": string("OAuth application client ID"),
                "clientSecret": string("OAuth application client secret"),
                "redirectUri": string("Redirect URI registered with the application")
            }),
            Self::AuthCallback => json!({
                "code": string("Authorization code from the redirect"),
                "state": string("State value from the redirect; must match the one issued by linear_auth")
            }),
            Self::CreateIssue => issue_properties(),
            Self::CreateIssues => json!({ "issues": issue_array() }),
            Self::BulkUpdateIssues => json!({
                "issueIds": string_array("IDs of the issues to update"),
                "update": Value::Object(object_schema(update_properties(), &[]))
            }),
            Self::SearchIssues => json!({
                "query": string("Text matched against title and description"),
                "teamId": string("Only issues of this team"),
                "assigneeId": string("Only issues assigned to this user"),
                "status": string("Workflow state name, e.g. \"In Progress\""),
                "priority": integer("Priority from 0 (none) to 4 (low)"),
                "first": page_size(),
                "after": cursor()
            }),
            Self::DeleteIssue => json!({ "id": string("Issue ID") }),
            Self::DeleteIssues => json!({ "ids": string_array("IDs of the issues to delete") }),
            Self::CreateProjectWithIssues => json!({
                "project": Value::Object(object_schema(
                    json!({
                        "name": string("Project name"),
                        "teamIds": string_array("Teams the project belongs to"),
                        "description": string("Project description"),
                        "leadId": string("Project lead user ID"),
                        "startDate": string("Start date (YYYY-MM-DD)"),
                        "targetDate": string("Target date (YYYY-MM-DD)")
                    }),
                    PROJECT_REQUIRED_FIELDS,
                )),
                "issues": issue_array()
            }),
            Self::GetProject => json!({ "id": string("Project ID") }),
            Self::SearchProjects => json!({
                "name": string("Text matched against the project name"),
                "first": page_size(),
                "after": cursor()
            }),
            Self::GetTeams | Self::GetUser => json!({}),
            Self::CreateComment => json!({
                "body": string("Comment text (markdown)"),
                "issueId": string("Issue to comment on")
            }),
            Self::UpdateComment => json!({
                "id": string("Comment ID"),
                "body": string("New comment text")
            }),
            Self::DeleteComment => json!({ "id": string("Comment ID") }),
            Self::GetComments => json!({
                "issueId": string("Issue whose comments to list"),
                "first": page_size(),
                "after": cursor()
            }),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

fn object_schema(properties: Value, required: &[&str]) -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), properties);
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }
    schema
}

fn string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn integer(description: &str) -> Value {
    json!({ "type": "integer", "description": description })
}

fn string_array(description: &str) -> Value {
    json!({ "type": "array", "items": { "type": "string" }, "description": description })
}

fn page_size() -> Value {
    json!({ "type": "integer", "minimum": 0, "description": "Page size (default 50)" })
}

fn cursor() -> Value {
    string("Cursor from a previous page's endCursor")
}

fn issue_array() -> Value {
    json!({
        "type": "array",
        "items": Value::Object(object_schema(issue_properties(), ISSUE_REQUIRED_FIELDS))
    })
}

fn issue_properties() -> Value {
    json!({
        "title": string("Issue title"),
        "teamId": string("Team the issue belongs to"),
        "description": string("Issue description (markdown)"),
        "projectId": string("Project to add the issue to"),
        "assigneeId": string("User to assign"),
        "stateId": string("Workflow state ID"),
        "parentId": string("Parent issue ID"),
        "priority": integer("Priority from 0 (none) to 4 (low)"),
        "estimate": integer("Estimate points"),
        "labelIds": string_array("Label IDs")
    })
}

fn update_properties() -> Value {
    json!({
        "title": string("New title"),
        "description": string("New description"),
        "stateId": string("New workflow state ID"),
        "assigneeId": string("New assignee"),
        "projectId": string("New project"),
        "priority": integer("New priority"),
        "estimate": integer("New estimate"),
        "labelIds": string_array("Replacement label IDs")
    })
}
