//! Remote access to the Linear GraphQL API.
//!
//! Handlers only see the [`RemoteClient`] trait: one async operation per
//! remote action, each returning a typed result. [`LinearGraphQLClient`] is
//! the production implementation over HTTP.

mod client;
mod error;
pub mod mutations;
pub mod queries;

pub use client::{GraphQLRequest, LinearGraphQLClient, decode_response};
pub use error::{ClientError, ClientResult};

use std::future::Future;
use std::pin::Pin;

use crate::types::{
    CommentUpdateInput, CreateCommentInput, CreateCommentResponse, CreateIssueResponse,
    CreateIssuesResponse, CreateProjectResponse, DeleteCommentResponse, DeleteIssueResponse,
    GetCommentsResponse, GetProjectResponse, IssueCreateInput, IssueFilter, IssueUpdateInput,
    ProjectCreateInput, SearchIssuesResponse, SearchProjectsResponse, TeamsResponse,
    UpdateCommentResponse, UpdateIssueResponse, ViewerResponse,
};

/// Boxed future returned by [`RemoteClient`] operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Typed operations against the remote issue tracker.
///
/// Implementations perform exactly one request per call and never retry.
pub trait RemoteClient: Send + Sync {
    fn create_comment(
        &self,
        input: CreateCommentInput,
    ) -> BoxFuture<'_, ClientResult<CreateCommentResponse>>;

    fn update_comment(
        &self,
        id: String,
        input: CommentUpdateInput,
    ) -> BoxFuture<'_, ClientResult<UpdateCommentResponse>>;

    fn delete_comment(&self, id: String) -> BoxFuture<'_, ClientResult<DeleteCommentResponse>>;

    /// Fetch one page of an issue's comments. `after` is an opaque cursor.
    fn get_issue_comments(
        &self,
        issue_id: String,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<GetCommentsResponse>>;

    fn create_issue(
        &self,
        input: IssueCreateInput,
    ) -> BoxFuture<'_, ClientResult<CreateIssueResponse>>;

    /// Create several issues in one batch mutation.
    fn create_issues(
        &self,
        inputs: Vec<IssueCreateInput>,
    ) -> BoxFuture<'_, ClientResult<CreateIssuesResponse>>;

    fn update_issue(
        &self,
        id: String,
        input: IssueUpdateInput,
    ) -> BoxFuture<'_, ClientResult<UpdateIssueResponse>>;

    fn search_issues(
        &self,
        filter: IssueFilter,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<SearchIssuesResponse>>;

    fn delete_issue(&self, id: String) -> BoxFuture<'_, ClientResult<DeleteIssueResponse>>;

    fn create_project(
        &self,
        input: ProjectCreateInput,
    ) -> BoxFuture<'_, ClientResult<CreateProjectResponse>>;

    fn get_project(&self, id: String) -> BoxFuture<'_, ClientResult<GetProjectResponse>>;

    fn search_projects(
        &self,
        name: String,
        first: u32,
        after: Option<String>,
    ) -> BoxFuture<'_, ClientResult<SearchProjectsResponse>>;

    fn get_teams(&self) -> BoxFuture<'_, ClientResult<TeamsResponse>>;

    /// Fetch the user the current credentials belong to.
    fn get_viewer(&self) -> BoxFuture<'_, ClientResult<ViewerResponse>>;
}
