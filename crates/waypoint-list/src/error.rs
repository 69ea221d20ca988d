//! Error types
//!
//! Rendering only fails when the surface is handed a node it does not know
//! about. Empty lists, exhausted pages and unrelated keys are regular branches.

use thiserror::Error;

use crate::session::SessionId;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failures raised by a [`Surface`](crate::surface::Surface) or the presenter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("node {child} is not a child of {container}")]
    NotAChild { container: String, child: String },
    #[error("node {0} is not attached to a parent")]
    Detached(String),
    #[error("markup produced no element: {0}")]
    EmptyMarkup(String),
    #[error("unknown session: {0}")]
    UnknownSession(SessionId),
    #[error("dom error: {0}")]
    Dom(String),
}

/// Failures while loading a [`ListConfig`](crate::config::ListConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse list config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid list config: {0}")]
    Invalid(String),
}
