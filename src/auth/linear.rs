//! Session store for Linear credentials.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use super::provider::{AuthError, AuthProvider, OAuthConfig};
use crate::config::LinearConfig;
use crate::graphql::{BoxFuture, LinearGraphQLClient, RemoteClient};

/// Scopes requested during the OAuth flow.
pub const OAUTH_SCOPES: &str = "read,write";

/// A credential accepted by the Linear API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Personal API key
    ApiKey(String),
    /// OAuth access token with its optional expiry
    OAuth {
        access_token: String,
        expires_at: Option<DateTime<Utc>>,
    },
}

impl Credential {
    /// Value of the `Authorization` header for this credential.
    pub fn authorization_header(&self) -> String {
        match self {
            Self::ApiKey(key) => key.clone(),
            Self::OAuth { access_token, .. } => format!("Bearer {}", access_token),
        }
    }

    /// Whether the credential can still be used at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::ApiKey(key) => !key.is_empty(),
            Self::OAuth {
                access_token,
                expires_at,
            } => !access_token.is_empty() && expires_at.is_none_or(|exp| exp > now),
        }
    }
}

#[derive(Debug, Clone)]
struct PendingOAuth {
    config: OAuthConfig,
    state: String,
}

#[derive(Debug, Default)]
struct Session {
    credential: Option<Credential>,
    pending: Option<PendingOAuth>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// [`AuthProvider`] backed by an in-memory Linear session.
pub struct LinearAuth {
    config: LinearConfig,
    http: reqwest::Client,
    session: RwLock<Session>,
}

impl LinearAuth {
    /// Create the provider. Starts authenticated when the config carries an API key.
    pub fn new(config: LinearConfig) -> Result<Self, AuthError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| AuthError::Http(e.to_string()))?;

        let session = Session {
            credential: config.api_key.clone().map(Credential::ApiKey),
            pending: None,
        };

        Ok(Self {
            config,
            http,
            session: RwLock::new(session),
        })
    }

    /// Replace the current credential.
    pub fn set_credential(&self, credential: Credential) {
        self.write_session().credential = Some(credential);
    }

    /// Drop the current credential and any pending OAuth flow.
    pub fn logout(&self) {
        *self.write_session() = Session::default();
    }

    /// The credential currently held, if any.
    pub fn credential(&self) -> Option<Credential> {
        self.read_session().credential.clone()
    }

    fn read_session(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_session(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn valid_credential(&self) -> Option<Credential> {
        self.read_session()
            .credential
            .clone()
            .filter(|c| c.is_valid_at(Utc::now()))
    }

    async fn exchange_code(&self, pending: &PendingOAuth, code: &str) -> Result<TokenResponse, AuthError> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", "authorization_code")
            .append_pair("code", code)
            .append_pair("redirect_uri", &pending.config.redirect_uri)
            .append_pair("client_id", &pending.config.client_id)
            .append_pair("client_secret", &pending.config.client_secret)
            .finish();

        let response = self
            .http
            .post(&self.config.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::TokenExchange(format!("HTTP {}: {}", status.as_u16(), text)));
        }

        serde_json::from_str(&text).map_err(|e| AuthError::TokenExchange(e.to_string()))
    }
}

impl AuthProvider for LinearAuth {
    fn is_authenticated(&self) -> bool {
        self.valid_credential().is_some()
    }

    fn client(&self) -> Result<Arc<dyn RemoteClient>, AuthError> {
        let credential = self.valid_credential().ok_or(AuthError::NotAuthenticated)?;
        Ok(Arc::new(LinearGraphQLClient::new(
            self.http.clone(),
            self.config.api_url.clone(),
            credential.authorization_header(),
        )))
    }

    fn begin_oauth(&self, config: OAuthConfig) -> Result<String, AuthError> {
        let state = uuid::Uuid::new_v4().to_string();

        let url = Url::parse_with_params(
            &self.config.authorize_url,
            &[
                ("client_id", config.client_id.as_str()),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", OAUTH_SCOPES),
                ("state", state.as_str()),
            ],
        )
        .map_err(|e| AuthError::InvalidConfig(e.to_string()))?;

        debug!(client_id = %config.client_id, "starting Linear OAuth flow");
        self.write_session().pending = Some(PendingOAuth { config, state });

        Ok(url.to_string())
    }

    fn complete_oauth(
        &self,
        code: String,
        state: Option<String>,
    ) -> BoxFuture<'_, Result<(), AuthError>> {
        Box::pin(async move {
            let pending = self
                .read_session()
                .pending
                .clone()
                .ok_or(AuthError::OAuthNotConfigured)?;

            // A pending flow always issued a state, so a callback without one is rejected.
            if state.as_deref() != Some(pending.state.as_str()) {
                return Err(AuthError::StateMismatch);
            }

            let token = self.exchange_code(&pending, &code).await?;
            let expires_at = token
                .expires_in
                .map(|secs| Utc::now() + chrono::Duration::seconds(secs));

            {
                let mut session = self.write_session();
                session.credential = Some(Credential::OAuth {
                    access_token: token.access_token,
                    expires_at,
                });
                session.pending = None;
            }

            info!("Linear OAuth session established");
            Ok(())
        })
    }
}
