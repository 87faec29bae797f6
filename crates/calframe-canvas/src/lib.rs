//! Multi-plane canvas for limited-color e-paper displays.
//!
//! E-paper panels with more than one ink color expose each color as an
//! independent 1-bit plane. This crate models that as a [`PlaneCanvas`]:
//! a stack of identically sized [`PlaneSurface`] framebuffers, one per
//! supported color (or a single plane when the target is one full-color
//! raster). Each plane implements `embedded_graphics::DrawTarget`, so the
//! usual primitives, text and images draw straight onto it.
//!
//! Canvases compose: a sub-frame is drawn on its own canvas and then pasted
//! into a parent with [`PlaneCanvas::composite_into`], plane by plane.
//!
//! The crate also carries the dashed-stroke rasterizer used for "past date"
//! borders; see [`dashed`].

pub mod canvas;
pub mod dashed;
pub mod error;
pub mod surface;

pub use canvas::{Plane, PlaneCanvas};
pub use dashed::{draw_dashed_polyline, draw_dashed_rectangle};
pub use error::CanvasError;
pub use surface::PlaneSurface;
