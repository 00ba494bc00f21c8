//! HTTP transport for the Linear GraphQL API.

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use super::error::{ClientError, ClientResult};
use super::{BoxFuture, RemoteClient, mutations, queries};
use crate::types::{
    CommentUpdateInput, CreateCommentInput, CreateCommentResponse, CreateIssueResponse,
    CreateIssuesResponse, CreateProjectResponse, DeleteCommentResponse, DeleteIssueResponse,
    GetCommentsResponse, GetProjectResponse, IssueCreateInput, IssueFilter, IssueUpdateInput,
    ProjectCreateInput, SearchIssuesResponse, SearchProjectsResponse, TeamsResponse,
    UpdateCommentResponse, UpdateIssueResponse, ViewerResponse,
};

/// Body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQLEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQLErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorMessage {
    message: String,
}

/// Decode a GraphQL response body into `T`.
///
/// GraphQL errors win over `data`, even when both are present.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ClientResult<T> {
    let success = (200..300).contains(&status);

    let envelope: GraphQLEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !success => {
            return Err(ClientError::Status {
                status,
                body: body.to_string(),
            });
        }
        Err(e) => return Err(ClientError::Decode(e.to_string())),
    };

    if !envelope.errors.is_empty() {
        return Err(ClientError::GraphQL(
            envelope.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    if !success {
        return Err(ClientError::Status {
            status,
            body: body.to_string(),
        });
    }

    let data = envelope
        .data
        .filter(|d| !d.is_null())
        .ok_or(ClientError::EmptyResponse)?;

    serde_json::from_value(data).map_err(|e| ClientError::Decode(e.to_string()))
}

/// [`RemoteClient`] that talks to Linear over HTTPS.
#[derive(Clone)]
pub struct LinearGraphQLClient {
    http: reqwest::Client,
    endpoint: String,
    /// Full `Authorization` header value (API key or `Bearer <token>`).
    authorization: String,
}

impl LinearGraphQLClient {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        authorization: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            authorization: authorization.into(),
        }
    }

    /// The GraphQL endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> ClientResult<T> {
        debug!(operation, endpoint = %self.endpoint, "sending GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .json(&GraphQLRequest { query, variables })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(operation, status, "received GraphQL response");
        decode_response(status, &body)
    }
}

impl RemoteClient for LinearGraphQLClient {
    fn create_comment(
        &self,
        input: CreateCommentInput,
    ) -> BoxFuture<'_, ClientResult<CreateCommentResponse>> {
        Box::pin(async move {
            self.execute("createComment", mutations::CREATE_COMMENT, json!({ "input": input }))
                .await
        })
    }

    fn update_comment(
        &self,
        id: String,
        input: CommentUpdateInput,
    ) -> BoxFuture<'_, ClientResult<UpdateCommentResponse>> {
        Box::pin(async move {
            self.execute(
                "updateComment",
                mutations::UPDATE_COMMENT,
                json!({ "id": id, "input": input }),
            )
            .await
        })
    }

    fn delete_comment(&self, id: String) -> BoxFuture<'_, ClientResult<DeleteCommentResponse>> {
        Box::pin(async move {
            self.execute("deleteComment", mutations::DELETE_COMMENT, json!({ "id": id }))
                .await
        })
    }

    fn get_issue_comments(
        &self,
        issue_id: String,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<GetCommentsResponse>> {
        Box::pin(async move {
            self.execute(
                "getIssueComments",
                queries::GET_ISSUE_COMMENTS,
                json!({ "issueId": issue_id, "first": first, "after": after }),
            )
            .await
        })
    }

    fn create_issue(
        &self,
        input: IssueCreateInput,
    ) -> BoxFuture<'_, ClientResult<CreateIssueResponse>> {
        Box::pin(async move {
            self.execute("createIssue", mutations::CREATE_ISSUE, json!({ "input": input }))
                .await
        })
    }

    fn create_issues(
        &self,
        inputs: Vec<IssueCreateInput>,
    ) -> BoxFuture<'_, ClientResult<CreateIssuesResponse>> {
        Box::pin(async move {
            self.execute(
                "createIssuesBatch",
                mutations::CREATE_ISSUES_BATCH,
                json!({ "input": { "issues": inputs } }),
            )
            .await
        })
    }

    fn update_issue(
        &self,
        id: String,
        input: IssueUpdateInput,
    ) -> BoxFuture<'_, ClientResult<UpdateIssueResponse>> {
        Box::pin(async move {
            self.execute(
                "updateIssue",
                mutations::UPDATE_ISSUE,
                json!({ "id": id, "input": input }),
            )
            .await
        })
    }

    fn search_issues(
        &self,
        filter: IssueFilter,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<SearchIssuesResponse>> {
        Box::pin(async move {
            self.execute(
                "searchIssues",
                queries::SEARCH_ISSUES,
                json!({ "filter": filter, "first": first, "after": after }),
            )
            .await
        })
    }

    fn delete_issue(&self, id: String) -> BoxFuture<'_, ClientResult<DeleteIssueResponse>> {
        Box::pin(async move {
            self.execute("deleteIssue", mutations::DELETE_ISSUE, json!({ "id": id }))
                .await
        })
    }

    fn create_project(
        &self,
        input: ProjectCreateInput,
    ) -> BoxFuture<'_, ClientResult<CreateProjectResponse>> {
        Box::pin(async move {
            self.execute("createProject", mutations::CREATE_PROJECT, json!({ "input": input }))
                .await
        })
    }

    fn get_project(&self, id: String) -> BoxFuture<'_, ClientResult<GetProjectResponse>> {
        Box::pin(async move {
            self.execute("getProject", queries::GET_PROJECT, json!({ "id": id }))
                .await
        })
    }

    fn search_projects(
        &self,
        name: String,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<SearchProjectsResponse>> {
        Box::pin(async move {
            self.execute(
                "searchProjects",
                queries::SEARCH_PROJECTS,
                json!({
                    "filter": { "name": { "containsIgnoreCase": name } },
                    "first": first,
                    "after": after,
                }),
            )
            .await
        })
    }

    fn get_teams(&self) -> BoxFuture<'_, ClientResult<TeamsResponse>> {
        Box::pin(async move { self.execute("getTeams", queries::GET_TEAMS, json!({})).await })
    }

    fn get_viewer(&self) -> BoxFuture<'_, ClientResult<ViewerResponse>> {
        Box::pin(async move { self.execute("getViewer", queries::GET_VIEWER, json!({})).await })
    }
}
