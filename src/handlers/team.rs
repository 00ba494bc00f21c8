use rmcp::model::JsonObject;

use super::base::{BaseHandler, HandlerDeps};
use super::response::ToolResponse;
use crate::error::{ToolError, ToolResult};

pub struct TeamHandler {
    deps: HandlerDeps,
}

impl BaseHandler for TeamHandler {
    fn deps(&self) -> &HandlerDeps {
        &self.deps
    }
}

impl TeamHandler {
    pub fn new(deps: HandlerDeps) -> Self {
        Self { deps }
    }

    /// Lists every team with its workflow states.
    pub async fn handle_get_teams(&self, _args: &JsonObject) -> ToolResult<ToolResponse> {
        let client = self.verify_auth()?;

        let result = client.get_teams().await?;
        if result.teams.is_none() {
            return Err(ToolError::remote("Failed to get teams"));
        }
        self.create_json_response(&result)
    }
}
