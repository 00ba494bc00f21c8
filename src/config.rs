use std::env;

/// Default Linear GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";

/// Default Linear OAuth authorization page.
pub const DEFAULT_AUTHORIZE_URL: &str = "https://linear.app/oauth/authorize";

/// Default Linear OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://api.linear.app/oauth/token";

/// Connection settings for the Linear API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearConfig {
    /// GraphQL endpoint all queries and mutations are POSTed to
    pub api_url: String,
    /// OAuth authorization page users are sent to
    pub authorize_url: String,
    /// OAuth token endpoint used to exchange authorization codes
    pub token_url: String,
    /// Personal API key; when present the server starts authenticated
    pub api_key: Option<String>,
    /// Per-request timeout for the HTTP transport (None = no timeout)
    pub request_timeout_secs: Option<u64>,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

impl LinearConfig {
    /// Build a config from the process environment.
    ///
    /// Reads `LINEAR_API_URL`, `LINEAR_API_KEY` and `LINEAR_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            api_url: get("LINEAR_API_URL").unwrap_or(defaults.api_url),
            authorize_url: get("LINEAR_AUTHORIZE_URL").unwrap_or(defaults.authorize_url),
            token_url: get("LINEAR_TOKEN_URL").unwrap_or(defaults.token_url),
            api_key: get("LINEAR_API_KEY"),
            request_timeout_secs: get("LINEAR_REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()),
        }
    }

    /// Override the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the GraphQL endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
