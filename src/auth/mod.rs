//! Authentication against Linear.
//!
//! Handlers depend only on the [`AuthProvider`] trait. [`LinearAuth`] is the
//! concrete provider, supporting two credential kinds:
//!
//! - **API key**: a personal key, sent verbatim in the `Authorization` header
//! - **OAuth**: an access token from the authorization-code flow, sent as
//!   `Bearer <token>`
//!
//! ## OAuth flow
//!
//! 1. `linear_auth` calls [`AuthProvider::begin_oauth`], which returns the
//!    authorization URL the user must open.
//! 2. Linear redirects back with a `code`; `linear_auth_callback` calls
//!    [`AuthProvider::complete_oauth`] to exchange it for a token.

mod linear;
mod provider;

pub use linear::{Credential, LinearAuth};
pub use provider::{AuthError, AuthProvider, OAuthConfig};
