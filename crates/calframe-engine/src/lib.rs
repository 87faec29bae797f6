//! Layout and rendering engine for an e-paper calendar frame.
//!
//! Produces one composite multi-plane raster per render pass: a calendar
//! grid over a configurable window of weeks, a today panel with a
//! sunrise/sunset readout, and an upcoming-tasks list. Events come in
//! through the [`EventSource`] capability; the finished [`Plane`]s go out to
//! whatever display transfer layer the caller provides.
//!
//! ```no_run
//! use calframe_engine::{FrameComposer, RenderConfig, StaticSource};
//! use chrono::Local;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = StaticSource::new(Vec::new());
//! let mut composer = FrameComposer::new(RenderConfig::default(), source)?;
//! let planes = composer.render(Local::now())?;
//! assert!(!planes.is_empty());
//! # Ok(()) }
//! ```

pub mod composer;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod icon;
pub mod sun;
pub mod tasklist;
pub mod text;
pub mod today;

pub use calframe_canvas::{Plane, PlaneCanvas, PlaneSurface};

pub use composer::FrameComposer;
pub use config::{CalendarConfig, ConfigError, Edges, RenderConfig, TaskListConfig, TodayConfig};
pub use error::RenderError;
pub use event::{AggregateSource, Event, EventSource, FetchError, StaticSource};
pub use icon::{Icon, IconKind};
pub use sun::{SunCalculator, SunTimes};
pub use tasklist::{task_rows, SpanGlyph, TaskRow};
pub use text::{MonoTypesetter, Typesetter};
