//! OAuth tools. These run without an existing session.

use rmcp::model::JsonObject;
use serde::Deserialize;
use tracing::info;

use super::base::{BaseHandler, HandlerDeps};
use super::response::ToolResponse;
use crate::auth::OAuthConfig;
use crate::error::ToolResult;
use crate::tools::ToolName;

#[derive(Debug, Deserialize)]
struct AuthCallbackInput {
    code: String,
    #[serde(default)]
    state: Option<String>,
}

pub struct AuthHandler {
    deps: HandlerDeps,
}

impl BaseHandler for AuthHandler {
    fn deps(&self) -> &HandlerDeps {
        &self.deps
    }
}

impl AuthHandler {
    pub fn new(deps: HandlerDeps) -> Self {
        Self { deps }
    }

    /// Starts the OAuth flow and returns the URL the user must visit.
    pub async fn handle_auth(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        self.validate_required_params(args, ToolName::Auth.required_params())?;
        let config: OAuthConfig = self.parse_arguments(args)?;

        let url = self.deps().auth().begin_oauth(config)?;
        Ok(self.create_response(format!(
            "Please visit the following URL to authorize the application:\n{}",
            url
        )))
    }

    /// Exchanges the authorization code returned to the redirect URI.
    pub async fn handle_auth_callback(&self, args: &JsonObject) -> ToolResult<ToolResponse> {
        self.validate_required_params(args, ToolName::AuthCallback.required_params())?;
        let input: AuthCallbackInput = self.parse_arguments(args)?;

        self.deps()
            .auth()
            .complete_oauth(input.code, input.state)
            .await?;
        info!("linear oauth session established");
        Ok(self.create_response("Successfully authenticated with Linear"))
    }
}
