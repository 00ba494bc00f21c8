use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{Connection, IssueCreateInput, IssueSummary, NamedRef};

/// The `input` of the `projectCreate` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateInput {
    pub name: String,
    pub team_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
}

/// Arguments for `linear_create_project_with_issues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectWithIssuesInput {
    pub project: ProjectCreateInput,
    pub issues: Vec<IssueCreateInput>,
}

/// Arguments for `linear_get_project`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProjectInput {
    pub id: String,
}

/// Arguments for `linear_search_projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchProjectsInput {
    pub name: String,
    #[serde(default)]
    pub first: Option<u32>,
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectResponse {
    pub project_create: ProjectPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub progress: Option<Number>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub lead: Option<NamedRef>,
    #[serde(default)]
    pub teams: Option<Connection<NamedRef>>,
    /// Only requested when fetching a single project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Connection<IssueSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProjectResponse {
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchProjectsResponse {
    #[serde(default)]
    pub projects: Option<Connection<Project>>,
}
