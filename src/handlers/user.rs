use rmcp::model::JsonObject;

use super::base::{BaseHandler, HandlerDeps};
use super::response::ToolResponse;
use crate::error::{ToolError, ToolResult};

pub struct UserHandler {
    deps: HandlerDeps,
}

impl BaseHandler for UserHandler {
    fn deps(&self) -> &HandlerDeps {
        &self.deps
    }
}

impl UserHandler {
    pub fn new(deps: HandlerDeps) -> Self {
        Self { deps }
    }

    /// Returns the authenticated user and their teams.
    pub async fn handle_get_user(&self, _args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;

        let result = client.get_viewer().await?;
        if result.viewer.is_none() {
            return Err(ToolError::remote("Failed to get user"));
        }
        self.create_json_response(&result)
    }
}
