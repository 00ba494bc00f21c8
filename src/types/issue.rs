use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value, json};

use super::{Connection, NamedRef, SuccessPayload};

/// GraphQL `IssueFilter` object, built from search arguments.
pub type IssueFilter = Map<String, Value>;

/// One issue to create. Also the `input` of the `issueCreate` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateInput {
    pub title: String,
    pub team_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
}

/// Arguments for `linear_create_issues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIssuesInput {
    pub issues: Vec<IssueCreateInput>,
}

/// Fields to change on an issue. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
}

/// Arguments for `linear_bulk_update_issues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateIssuesInput {
    pub issue_ids: Vec<String>,
    pub update: IssueUpdateInput,
}

/// Arguments for `linear_search_issues`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIssuesInput {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub first: Option<u32>,
    #[serde(default)]
    pub after: Option<String>,
}

impl SearchIssuesInput {
    /// Translate the search arguments into a GraphQL `IssueFilter`.
    ///
    /// Free text matches title or description, case-insensitively.
    pub fn to_filter(&self) -> IssueFilter {
        let mut filter = IssueFilter::new();

        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            filter.insert(
                "or".to_string(),
                json!([
                    { "title": { "containsIgnoreCase": query } },
                    { "description": { "containsIgnoreCase": query } }
                ]),
            );
        }
        if let Some(team_id) = &self.team_id {
            filter.insert("team".to_string(), json!({ "id": { "eq": team_id } }));
        }
        if let Some(assignee_id) = &self.assignee_id {
            filter.insert("assignee".to_string(), json!({ "id": { "eq": assignee_id } }));
        }
        if let Some(status) = &self.status {
            filter.insert("state".to_string(), json!({ "name": { "eq": status } }));
        }
        if let Some(priority) = self.priority {
            filter.insert("priority".to_string(), json!({ "eq": priority }));
        }

        filter
    }
}

/// Arguments for `linear_delete_issue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteIssueInput {
    pub id: String,
}

/// Arguments for `linear_delete_issues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteIssuesInput {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRef {
    pub name: String,
}

/// Issue fields returned by create and update mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuePayload {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueBatchPayload {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<IssueSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueResponse {
    pub issue_create: IssuePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssuesResponse {
    pub issue_batch_create: IssueBatchPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueResponse {
    pub issue_update: IssuePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteIssueResponse {
    pub issue_delete: SuccessPayload,
}

/// Issue node returned by searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub priority: Option<Number>,
    #[serde(default)]
    pub estimate: Option<Number>,
    #[serde(default)]
    pub state: Option<NamedRef>,
    #[serde(default)]
    pub assignee: Option<NamedRef>,
    #[serde(default)]
    pub team: Option<NamedRef>,
    #[serde(default)]
    pub project: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Connection<NamedRef>>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIssuesResponse {
    #[serde(default)]
    pub issues: Option<Connection<Issue>>,
}
