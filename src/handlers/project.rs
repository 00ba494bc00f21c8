//! Project tools.

use rmcp::model::JsonObject;
use tracing::info;

use super::base::{
    BaseHandler, HandlerDeps, ValidationSpec, page_size, validate_required_item_params,
};
use super::issue::{ISSUE_REQUIRED_FIELDS, created_issues, issue_lines};
use super::response::ToolResponse;
use crate::error::{ToolError, ToolResult};
use crate::tools::ToolName;
use crate::types::{
    CreateProjectWithIssuesInput, GetProjectInput, ProjectPayload, ProjectSummary,
    SearchProjectsInput,
};

/// Fields the `project` argument must carry.
pub const PROJECT_REQUIRED_FIELDS: ValidationSpec<'static> = &["name", "teamIds"];

pub struct ProjectHandler {
    deps: HandlerDeps,
}

impl BaseHandler for ProjectHandler {
    fn deps(&self) -> &HandlerDeps {
        &self.deps
    }
}

fn created_project(payload: ProjectPayload) -> ToolResult<ProjectSummary> {
    match payload {
        ProjectPayload {
            success: true,
            project: Some(project),
        } => Ok(project),
        _ => Err(ToolError::remote("Failed to create project")),
    }
}

impl ProjectHandler {
    pub fn new(deps: HandlerDeps) -> Self {
        Self { deps }
    }

    /// Creates a project, then creates the given issues inside it.
    ///
    /// The project is not rolled back when issue creation fails.
    pub async fn handle_create_project_with_issues(
        &self,
        args: &JsonObject,
    ) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::CreateProjectWithIssues.required_params())?;
        if let Some(project) = args.get("project").and_then(|v| v.as_object()) {
            self.validate_required_params(project, PROJECT_REQUIRED_FIELDS)
                .map_err(|e| match e {
                    ToolError::MissingParams(names) => ToolError::MissingParams(
                        names.into_iter().map(|n| format!("project.{}", n)).collect(),
                    ),
                    other => other,
                })?;
        }
        validate_required_item_params(args, "issues", ISSUE_REQUIRED_FIELDS)?;
        let input: CreateProjectWithIssuesInput = self.parse_arguments(args)?;

        let result = client.create_project(input.project).await?;
        let project = created_project(result.project_create)?;
        info!(project_id = %project.id, issues = input.issues.len(), "created project");

        let issues: Vec<_> = input
            .issues
            .into_iter()
            .map(|mut issue| {
                issue.project_id = Some(project.id.clone());
                issue
            })
            .collect();

        let created = if issues.is_empty() {
            Vec::new()
        } else {
            let result = client.create_issues(issues).await?;
            created_issues(result.issue_batch_create, "Failed to create issues")?
        };

        let mut text = format!(
            "Successfully created project with issues\nProject: {}\nURL: {}",
            project.name, project.url
        );
        if !created.is_empty() {
            text.push_str(&format!(
                "\n\nIssues ({}):\n{}",
                created.len(),
                issue_lines(&created)
            ));
        }
        Ok(self.create_response(text))
    }

    pub async fn handle_get_project(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::GetProject.required_params())?;
        let input: GetProjectInput = self.parse_arguments(args)?;

        let result = client.get_project(input.id).await?;
        if result.project.is_none() {
            return Err(ToolError::remote("Failed to get project or project not found"));
        }
        self.create_json_response(&result)
    }

    pub async fn handle_search_projects(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;
        self.validate_required_params(args, ToolName::SearchProjects.required_params())?;
        let input: SearchProjectsInput = self.parse_arguments(args)?;

        let result = client
            .search_projects(input.name, page_size(input.first), input.after)
            .await?;
        if result.projects.is_none() {
            return Err(ToolError::remote("Failed to search projects"));
        }
        self.create_json_response(&result)
    }
}
