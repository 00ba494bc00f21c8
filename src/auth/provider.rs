//! The authentication capability consumed by tool handlers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::graphql::{BoxFuture, RemoteClient};

/// OAuth application credentials supplied by `linear_auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No valid session is present
    NotAuthenticated,
    /// The callback arrived before the flow was started
    OAuthNotConfigured,
    /// The callback's `state` does not match the one issued
    StateMismatch,
    /// OAuth configuration could not be turned into a URL
    InvalidConfig(String),
    /// The token endpoint rejected the code or could not be reached
    TokenExchange(String),
    /// The HTTP client could not be built
    Http(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "Not authenticated"),
            Self::OAuthNotConfigured => {
                write!(f, "OAuth flow not started; call linear_auth first")
            }
            Self::StateMismatch => write!(f, "OAuth state does not match the pending request"),
            Self::InvalidConfig(msg) => write!(f, "Invalid OAuth configuration: {}", msg),
            Self::TokenExchange(msg) => write!(f, "Token exchange failed: {}", msg),
            Self::Http(msg) => write!(f, "HTTP client error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Session state and client access for the remote service.
pub trait AuthProvider: Send + Sync {
    /// Whether a usable credential is currently held.
    fn is_authenticated(&self) -> bool;

    /// A client bound to the current credential.
    ///
    /// Fails with [`AuthError::NotAuthenticated`] when there is no session.
    fn client(&self) -> Result<Arc<dyn RemoteClient>, AuthError>;

    /// Start the OAuth flow and return the authorization URL.
    fn begin_oauth(&self, config: OAuthConfig) -> Result<String, AuthError>;

    /// Exchange an authorization code for an access token.
    ///
    /// `state` must echo the value issued by [`AuthProvider::begin_oauth`].
    fn complete_oauth(
        &self,
        code: String,
        state: Option<String>,
    ) -> BoxFuture<'_, Result<(), AuthError>>;
}
