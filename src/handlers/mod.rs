//! Feature handlers for the Linear tools.
//!
//! Every handler implements [`BaseHandler`] over a shared [`HandlerDeps`] and
//! exposes one `handle_*` method per tool. Each method runs the same steps in
//! order: verify auth, validate required arguments, call the remote service,
//! format the response.

mod auth;
mod base;
mod comment;
mod issue;
mod project;
mod response;
mod team;
mod user;

pub use auth::AuthHandler;
pub use base::{
    BaseHandler, DEFAULT_PAGE_SIZE, HandlerDeps, format_timestamp, handle_error, page_size,
    ValidationSpec, truncate_body, validate_required_item_params, validate_required_params,
};
pub use comment::CommentHandler;
pub use issue::{ISSUE_REQUIRED_FIELDS, IssueHandler};
pub use project::{PROJECT_REQUIRED_FIELDS, ProjectHandler};
pub use response::{ContentItem, ContentType, ToolResponse};
pub use team::TeamHandler;
pub use user::UserHandler;
