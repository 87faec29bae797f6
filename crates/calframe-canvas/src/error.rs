//! Canvas and rasterization errors.

use thiserror::Error;

/// Errors raised by canvas construction, composition and stroke drawing.
///
/// Construction errors (`InvalidDimensions`, `InvalidColorSet`) and geometry
/// errors (`InvalidGeometry`) indicate misconfiguration or programmer error;
/// none of them is retryable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// A canvas dimension was zero.
    #[error("invalid canvas dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The supported-color list was empty.
    #[error("invalid color list, define at least one color")]
    InvalidColorSet,

    /// Two canvases with differing plane counts cannot be composited.
    #[error("plane count mismatch: expected {expected} planes, found {found}")]
    PlaneCountMismatch {
        /// Plane count of the destination canvas.
        expected: usize,
        /// Plane count of the source canvas.
        found: usize,
    },

    /// A dashed stroke was given fewer than two points.
    #[error("dashed stroke needs at least two points")]
    InvalidGeometry,
}

impl From<core::convert::Infallible> for CanvasError {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}
