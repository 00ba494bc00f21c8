//! Tool names and dispatch.
//!
//! [`ToolName`] is the closed set of tools the server exposes;
//! [`HandlerFactory`] maps each one to the handler method that serves it.

mod factory;
mod name;

pub use factory::{FeatureHandler, HandlerFactory, HandlerRegistration, ToolInvocation};
pub use name::ToolName;
