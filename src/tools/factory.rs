//! Maps tool names to the handler method that serves them.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

use rmcp::model::{JsonObject, Tool as McpTool};
use tracing::{debug, info};

use super::name::ToolName;
use crate::auth::AuthProvider;
use crate::error::{ToolError, ToolFailure, ToolResult};
use crate::graphql::RemoteClient;
use crate::handlers::{
    AuthHandler, CommentHandler, HandlerDeps, IssueHandler, ProjectHandler, TeamHandler,
    ToolResponse, UserHandler, handle_error,
};

/// A tool call as received from a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub name: String,
    pub arguments: Option<JsonObject>,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, arguments: Option<JsonObject>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// The feature handler a tool belongs to.
#[derive(Clone, Copy)]
pub enum FeatureHandler<'a> {
    Auth(&'a AuthHandler),
    Issue(&'a IssueHandler),
    Project(&'a ProjectHandler),
    Team(&'a TeamHandler),
    User(&'a UserHandler),
    Comment(&'a CommentHandler),
}

/// A resolved tool: the handler instance plus which of its methods to call.
#[derive(Clone, Copy)]
pub struct HandlerRegistration<'a> {
    handler: FeatureHandler<'a>,
    tool: ToolName,
}

impl<'a> HandlerRegistration<'a> {
    pub fn handler(&self) -> FeatureHandler<'a> {
        self.handler
    }

    pub fn tool(&self) -> ToolName {
        self.tool
    }

    pub fn method_name(&self) -> &'static str {
        self.tool.method_name()
    }

    /// Call the resolved handler method.
    pub async fn invoke(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        use FeatureHandler as H;
        use ToolName as T;

        match (self.handler, self.tool) {
            (H::Auth(h), T::Auth) => h.handle_auth(args).await,
            (H::Auth(h), T::AuthCallback) => h.handle_auth_callback(args).await,
            (H::Issue(h), T::CreateIssue) => h.handle_create_issue(args).await,
            (H::Issue(h), T::CreateIssues) => h.handle_create_issues(args).await,
            (H::Issue(h), T::BulkUpdateIssues) => h.handle_bulk_update_issues(args).await,
            (H::Issue(h), T::SearchIssues) => h.handle_search_issues(args).await,
            (H::Issue(h), T::DeleteIssue) => h.handle_delete_issue(args).await,
            (H::Issue(h), T::DeleteIssues) => h.handle_delete_issues(args).await,
            (H::Project(h), T::CreateProjectWithIssues) => {
                h.handle_create_project_with_issues(args).await
            }
            (H::Project(h), T::GetProject) => h.handle_get_project(args).await,
            (H::Project(h), T::SearchProjects) => h.handle_search_projects(args).await,
            (H::Team(h), T::GetTeams) => h.handle_get_teams(args).await,
            (H::User(h), T::GetUser) => h.handle_get_user(args).await,
            (H::Comment(h), T::CreateComment) => h.handle_create_comment(args).await,
            (H::Comment(h), T::UpdateComment) => h.handle_update_comment(args).await,
            (H::Comment(h), T::DeleteComment) => h.handle_delete_comment(args).await,
            (H::Comment(h), T::GetComments) => h.handle_get_comments(args).await,
            // Registrations are only built by `HandlerFactory::resolve`.
            _ => Err(ToolError::UnknownTool(self.tool.to_string())),
        }
    }
}

/// Owns one instance of every feature handler, all sharing the same deps.
pub struct HandlerFactory {
    auth: AuthHandler,
    issue: IssueHandler,
    project: ProjectHandler,
    team: TeamHandler,
    user: UserHandler,
    comment: CommentHandler,
}

impl HandlerFactory {
    /// Build every handler over the shared auth capability.
    ///
    /// `client` overrides the client the auth provider would hand out.
    pub fn new(auth: Arc<dyn AuthProvider>, client: Option<Arc<dyn RemoteClient>>) -> Self {
        let deps = HandlerDeps::new(auth, client);
        Self {
            auth: AuthHandler::new(deps.clone()),
            issue: IssueHandler::new(deps.clone()),
            project: ProjectHandler::new(deps.clone()),
            team: TeamHandler::new(deps.clone()),
            user: UserHandler::new(deps.clone()),
            comment: CommentHandler::new(deps),
        }
    }

    /// Find the handler method for `name`.
    pub fn resolve(&self, name: &str) -> ToolResult<HandlerRegistration<'_>> {
        let tool: ToolName = name.parse()?;
        let handler = match tool {
            ToolName::Auth | ToolName::AuthCallback => FeatureHandler::Auth(&self.auth),
            ToolName::CreateIssue
            | ToolName::CreateIssues
            | ToolName::BulkUpdateIssues
            | ToolName::SearchIssues
            | ToolName::DeleteIssue
            | ToolName::DeleteIssues => FeatureHandler::Issue(&self.issue),
            ToolName::CreateProjectWithIssues | ToolName::GetProject | ToolName::SearchProjects => {
                FeatureHandler::Project(&self.project)
            }
            ToolName::GetTeams => FeatureHandler::Team(&self.team),
            ToolName::GetUser => FeatureHandler::User(&self.user),
            ToolName::CreateComment
            | ToolName::UpdateComment
            | ToolName::DeleteComment
            | ToolName::GetComments => FeatureHandler::Comment(&self.comment),
        };
        Ok(HandlerRegistration { handler, tool })
    }

    /// Resolve and run a tool call, normalizing any error.
    pub async fn dispatch(&self, invocation: ToolInvocation) -> Result<ToolResponse, ToolFailure> {
        let registration = self
            .resolve(&invocation.name)
            .map_err(|e| handle_error(e, &invocation.name))?;
        let tool = registration.tool();
        let args = invocation.arguments.unwrap_or_default();

        debug!(tool = %tool, method = tool.method_name(), "dispatching tool call");
        let started = Instant::now();
        let result = registration.invoke(&args).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(response) => {
                info!(tool = %tool, elapsed_ms, "tool call succeeded");
                Ok(response)
            }
            Err(e) => Err(handle_error(e, tool.operation_label())),
        }
    }

    /// Every tool, in a stable order, for `tools/list`.
    pub fn list_tools(&self) -> Vec<McpTool> {
        ToolName::ALL.iter().map(to_mcp_tool).collect()
    }
}

fn to_mcp_tool(tool: &ToolName) -> McpTool {
    McpTool {
        name: Cow::Borrowed(tool.as_str()),
        title: None,
        description: Some(Cow::Borrowed(tool.description())),
        input_schema: Arc::new(tool.input_schema()),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    }
}
