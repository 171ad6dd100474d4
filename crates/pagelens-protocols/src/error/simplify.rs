//! Simplification pipeline errors.

use thiserror::Error;

use super::{DomError, RenderError};

/// Errors raised inside the pipeline.
///
/// Every pass propagates these with `?`; only the outermost entry point
/// catches them and degrades to an empty result.
#[derive(Debug, Error)]
pub enum SimplifyError {
    /// Viewport restriction needs recorded geometry.
    #[error("Need id to bbox map to restrict output to the viewport")]
    MissingGeometry,

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
