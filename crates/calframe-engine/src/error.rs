//! Engine-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::event::FetchError;
use calframe_canvas::CanvasError;

/// Errors that can abort a frame render.
///
/// A render either fully succeeds and returns all color planes or fails
/// before producing any output; there is no partial-output mode.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Canvas allocation or composition failed.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// An event source failed during preload.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl From<core::convert::Infallible> for RenderError {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}
