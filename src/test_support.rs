//! Shared test doubles.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::auth::{AuthError, AuthProvider, OAuthConfig};
use crate::graphql::{BoxFuture, ClientError, ClientResult, RemoteClient};
use crate::handlers::HandlerDeps;
use crate::types::{
    CommentUpdateInput, CreateCommentInput, CreateCommentResponse, CreateIssueResponse,
    CreateIssuesResponse, CreateProjectResponse, DeleteCommentResponse, DeleteIssueResponse,
    GetCommentsResponse, GetProjectResponse, IssueCreateInput, IssueFilter, IssueUpdateInput,
    ProjectCreateInput, SearchIssuesResponse, SearchProjectsResponse, TeamsResponse,
    UpdateCommentResponse, UpdateIssueResponse, ViewerResponse,
};

/// One call received by [`MockRemoteClient`]: operation name and its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub args: Value,
}

/// [`RemoteClient`] that replays canned JSON responses and records every call.
///
/// Responses are queued per operation; an operation with an empty queue fails
/// with a transport error.
#[derive(Default)]
pub struct MockRemoteClient {
    responses: Mutex<HashMap<&'static str, Vec<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRemoteClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response for `operation`.
    pub fn respond(&self, operation: &'static str, response: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(operation)
            .or_default()
            .push(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn reply<T: DeserializeOwned + Send + 'static>(
        &self,
        operation: &'static str,
        args: Value,
    ) -> BoxFuture<'_, ClientResult<T>> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { operation, args });

        let next = {
            let mut responses = self.responses.lock().unwrap();
            responses.get_mut(operation).and_then(|queue| {
                if queue.is_empty() {
                    None
                } else {
                    Some(queue.remove(0))
                }
            })
        };

        Box::pin(async move {
            let value = next.ok_or_else(|| {
                ClientError::Transport(format!("no mock response for {}", operation))
            })?;
            serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
        })
    }
}

impl RemoteClient for MockRemoteClient {
    fn create_comment(
        &self,
        input: CreateCommentInput,
    ) -> BoxFuture<'_, ClientResult<CreateCommentResponse>> {
        self.reply("create_comment", json!(input))
    }

    fn update_comment(
        &self,
        id: String,
        input: CommentUpdateInput,
    ) -> BoxFuture<'_, ClientResult<UpdateCommentResponse>> {
        self.reply("update_comment", json!([id, input]))
    }

    fn delete_comment(&self, id: String) -> BoxFuture<'_, ClientResult<DeleteCommentResponse>> {
        self.reply("delete_comment", json!([id]))
    }

    fn get_issue_comments(
        &self,
        issue_id: String,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<GetCommentsResponse>> {
        self.reply("get_issue_comments", json!([issue_id, first, after]))
    }

    fn create_issue(
        &self,
        input: IssueCreateInput,
    ) -> BoxFuture<'_, ClientResult<CreateIssueResponse>> {
        self.reply("create_issue", json!(input))
    }

    fn create_issues(
        &self,
        inputs: Vec<IssueCreateInput>,
    ) -> BoxFuture<'_, ClientResult<CreateIssuesResponse>> {
        self.reply("create_issues", json!(inputs))
    }

    fn update_issue(
        &self,
        id: String,
        input: IssueUpdateInput,
    ) -> BoxFuture<'_, ClientResult<UpdateIssueResponse>> {
        self.reply("update_issue", json!([id, input]))
    }

    fn search_issues(
        &self,
        filter: IssueFilter,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<SearchIssuesResponse>> {
        self.reply("search_issues", json!([filter, first, after]))
    }

    fn delete_issue(&self, id: String) -> BoxFuture<'_, ClientResult<DeleteIssueResponse>> {
        self.reply("delete_issue", json!([id]))
    }

    fn create_project(
        &self,
        input: ProjectCreateInput,
    ) -> BoxFuture<'_, ClientResult<CreateProjectResponse>> {
        self.reply("create_project", json!(input))
    }

    fn get_project(&self, id: String) -> BoxFuture<'_, ClientResult<GetProjectResponse>> {
        self.reply("get_project", json!([id]))
    }

    fn search_projects(
        &self,
        name: String,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<SearchProjectsResponse>> {
        self.reply("search_projects", json!([name, first, after]))
    }

    fn get_teams(&self) -> BoxFuture<'_, ClientResult<TeamsResponse>> {
        self.reply("get_teams", json!([]))
    }

    fn get_viewer(&self) -> BoxFuture<'_, ClientResult<ViewerResponse>> {
        self.reply("get_viewer", json!([]))
    }
}

/// [`AuthProvider`] whose session state is toggled by the test.
pub struct MockAuth {
    authenticated: AtomicBool,
    client: Option<Arc<dyn RemoteClient>>,
    oauth_calls: Mutex<Vec<String>>,
}

impl MockAuth {
    /// An authenticated provider that hands out no client of its own.
    pub fn authenticated() -> Arc<Self> {
        Arc::new(Self {
            authenticated: AtomicBool::new(true),
            client: None,
            oauth_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn unauthenticated() -> Arc<Self> {
        let auth = Self::authenticated();
        auth.set_authenticated(false);
        auth
    }

    /// An authenticated provider whose `client()` returns `client`.
    pub fn with_client(client: Arc<dyn RemoteClient>) -> Arc<Self> {
        Arc::new(Self {
            authenticated: AtomicBool::new(true),
            client: Some(client),
            oauth_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_authenticated(&self, value: bool) {
        self.authenticated.store(value, Ordering::SeqCst);
    }

    /// OAuth methods invoked so far, e.g. `begin:client-1`, `complete:code`.
    pub fn oauth_calls(&self) -> Vec<String> {
        self.oauth_calls.lock().unwrap().clone()
    }
}

impl AuthProvider for MockAuth {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    fn client(&self) -> Result<Arc<dyn RemoteClient>, AuthError> {
        self.client.clone().ok_or(AuthError::NotAuthenticated)
    }

    fn begin_oauth(&self, config: OAuthConfig) -> Result<String, AuthError> {
        self.oauth_calls
            .lock()
            .unwrap()
            .push(format!("begin:{}", config.client_id));
        Ok(format!(
            "https://linear.app/oauth/authorize?client_id={}",
            config.client_id
        ))
    }

    fn complete_oauth(
        &self,
        code: String,
        _state: Option<String>,
    ) -> BoxFuture<'_, Result<(), AuthError>> {
        self.oauth_calls
            .lock()
            .unwrap()
            .push(format!("complete:{}", code));
        self.set_authenticated(true);
        Box::pin(async { Ok(()) })
    }
}

/// Handler dependencies over an authenticated [`MockAuth`] and an injected mock client.
pub fn mock_deps() -> (HandlerDeps, Arc<MockRemoteClient>, Arc<MockAuth>) {
    let client = MockRemoteClient::new();
    let auth = MockAuth::authenticated();
    let deps = HandlerDeps::new(auth.clone(), Some(client.clone() as Arc<dyn RemoteClient>));
    (deps, client, auth)
}

/// Build an argument map from a JSON object literal.
pub fn args(value: Value) -> rmcp::model::JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("arguments must be an object, got {}", other),
    }
}

/// Text of the single content item of a response.
pub fn response_text(response: &crate::handlers::ToolResponse) -> &str {
    assert_eq!(response.content.len(), 1);
    &response.content[0].text
}

/// A request captured by [`StubServer`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// Local HTTP server that answers every request with one canned JSON body.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn spawn_stub_server(response: Value) -> StubServer {
    spawn_stub_server_with_status(200, response).await
}

pub async fn spawn_stub_server_with_status(status: u16, response: Value) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let status = StatusCode::from_u16(status).unwrap();

    let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap, body: String| {
        let recorded = recorded.clone();
        let response = response.clone();
        async move {
            let header = |name: &str| {
                headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_string())
            };
            recorded.lock().unwrap().push(RecordedRequest {
                path: uri.path().to_string(),
                authorization: header("authorization"),
                content_type: header("content-type"),
                body,
            });
            (status, axum::Json(response)).into_response()
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{}", addr),
        requests,
    }
}
