//! Top-level frame composition.

use std::cmp;

use chrono::{DateTime, Datelike, Duration, Local};
use embedded_graphics::prelude::Size;
use tracing::{debug, info};

use calframe_canvas::{Plane, PlaneCanvas};

use crate::config::{ConfigError, RenderConfig};
use crate::error::RenderError;
use crate::event::EventSource;
use crate::grid::CalendarGrid;
use crate::tasklist::TaskListPanel;
use crate::text::{MonoTypesetter, Typesetter};
use crate::today::TodayPanel;

/// Orchestrates one full frame render.
///
/// Computes the shared date range, preloads it through the event source,
/// renders the calendar grid, today panel and task list each into its own
/// canvas, and composites them into the root canvas at the configured
/// offsets. Sub-layouts never touch the root canvas directly.
pub struct FrameComposer<S: EventSource> {
    config: RenderConfig,
    source: S,
    typesetter: Box<dyn Typesetter>,
}

impl<S: EventSource> FrameComposer<S> {
    /// Create a composer, validating the configuration.
    ///
    /// # Errors
    ///
    /// Propagates the [`ConfigError`] of [`RenderConfig::validate`].
    pub fn new(config: RenderConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            typesetter: Box::new(MonoTypesetter),
        })
    }

    /// Replace the default monospace typesetter.
    #[must_use]
    pub fn with_typesetter(mut self, typesetter: Box<dyn Typesetter>) -> Self {
        self.typesetter = typesetter;
        self
    }

    /// Render one frame for `reference`.
    ///
    /// Returns one finished [`Plane`] per supported color in monochrome
    /// mode, or a single plane otherwise. The output is deterministic for
    /// identical configuration, event data and reference instant.
    ///
    /// # Errors
    ///
    /// A failed event preload or canvas mismatch aborts the render before
    /// any output is produced.
    pub fn render(&mut self, reference: DateTime<Local>) -> Result<Vec<Plane>, RenderError> {
        let cal = &self.config.calendar;
        let today = reference.date_naive();
        let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        let date_from = monday - Duration::weeks(i64::from(cal.weeks_past));
        let date_to = cmp::max(
            monday + Duration::weeks(i64::from(cal.weeks_future)),
            today + Duration::days(i64::from(self.config.tasklist.task_days)),
        );
        info!(%date_from, %date_to, "preloading events");
        debug!(%today, %monday, "reference anchors");
        self.source.preload(date_from, date_to)?;

        let mut root =
            PlaneCanvas::new(self.config.size, &self.config.colors, self.config.monochrome)?;

        info!("drawing calendar grid");
        let mut panel = self.panel_canvas(self.config.calendar.size)?;
        CalendarGrid::new(&self.config, &self.source, self.typesetter.as_ref(), today)
            .render(&mut panel)?;
        panel.composite_into(&mut root, self.config.calendar.position)?;

        info!("drawing today panel");
        let mut panel = self.panel_canvas(self.config.today.size)?;
        TodayPanel::new(&self.config, &self.source, self.typesetter.as_ref(), reference)
            .render(&mut panel)?;
        panel.composite_into(&mut root, self.config.today.position)?;

        info!("drawing task list");
        let mut panel = self.panel_canvas(self.config.tasklist.size)?;
        TaskListPanel::new(&self.config, &self.source, self.typesetter.as_ref(), today)
            .render(&mut panel)?;
        panel.composite_into(&mut root, self.config.tasklist.position)?;

        info!("frame finished");
        Ok(root.into_planes())
    }

    fn panel_canvas(&self, size: Size) -> Result<PlaneCanvas, RenderError> {
        Ok(PlaneCanvas::new(
            size,
            &self.config.colors,
            self.config.monochrome,
        )?)
    }
}
