//! Errors raised by the remote transport.

use std::fmt;

/// Failure talking to the Linear API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response (connect, TLS, timeout).
    Transport(String),
    /// Non-success HTTP status whose body was not a GraphQL envelope.
    Status { status: u16, body: String },
    /// The GraphQL envelope carried one or more errors.
    GraphQL(Vec<String>),
    /// The envelope had neither `data` nor `errors`.
    EmptyResponse,
    /// `data` did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Request failed: {}", msg),
            Self::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            Self::GraphQL(messages) => write!(f, "GraphQL error: {}", messages.join("; ")),
            Self::EmptyResponse => write!(f, "Empty response from Linear API"),
            Self::Decode(msg) => write!(f, "Unexpected response shape: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type for remote operations.
pub type ClientResult<T> = Result<T, ClientError>;
