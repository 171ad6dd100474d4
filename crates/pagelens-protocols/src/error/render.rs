//! Render query errors raised by the host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The host no longer knows the node (e.g. it was removed from the live page).
    #[error("Unknown node: {0}")]
    UnknownNode(usize),

    /// The host could not answer the query.
    #[error("Render query failed: {0}")]
    QueryFailed(String),
}
