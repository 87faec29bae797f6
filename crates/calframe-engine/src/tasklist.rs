//! Upcoming tasks panel.
//!
//! Lists events chronologically for the next `task_days` days. Dates without
//! events consume no vertical space at all; dates with events get a header
//! and one row per event, all-day events first. Multi-day events carry a
//! span glyph telling whether this date starts, continues or ends them.

use chrono::{Datelike, Duration, NaiveDate};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Alignment;

use calframe_canvas::PlaneCanvas;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::event::{Event, EventSource};
use crate::text::Typesetter;

/// Position of a date within a multi-day event's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanGlyph {
    /// The event starts on this date.
    From,
    /// The event continues through this date.
    Through,
    /// The event ends on this date.
    To,
}

/// One laid-out task list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Span glyph for multi-day events, `None` for single-day rows.
    pub glyph: Option<SpanGlyph>,
    /// Row text, time prefix included where applicable.
    pub text: String,
}

/// Build the rows for `date`, all-day events before timed ones.
///
/// Single-day timed events carry an `HH:MM` prefix. Multi-day events show
/// their start time on the first day, their end time on the last day, and
/// only the summary on interior days.
pub fn task_rows(all_day: &[Event], timed: &[Event], date: NaiveDate) -> Vec<TaskRow> {
    all_day
        .iter()
        .chain(timed)
        .map(|event| {
            if event.all_day {
                TaskRow {
                    glyph: None,
                    text: event.summary.clone(),
                }
            } else if event.start.date_naive() == event.end.date_naive() {
                TaskRow {
                    glyph: None,
                    text: format!("{} {}", event.start.format("%H:%M"), event.summary),
                }
            } else if event.start.date_naive() == date {
                TaskRow {
                    glyph: Some(SpanGlyph::From),
                    text: format!("{} {}", event.start.format("%H:%M"), event.summary),
                }
            } else if event.end.date_naive() == date {
                TaskRow {
                    glyph: Some(SpanGlyph::To),
                    text: format!("{} {}", event.end.format("%H:%M"), event.summary),
                }
            } else {
                TaskRow {
                    glyph: Some(SpanGlyph::Through),
                    text: event.summary.clone(),
                }
            }
        })
        .collect()
}

/// Task list layout for one render pass.
pub struct TaskListPanel<'a> {
    config: &'a RenderConfig,
    source: &'a dyn EventSource,
    typesetter: &'a dyn Typesetter,
    reference: NaiveDate,
}

impl<'a> TaskListPanel<'a> {
    /// Panel listing events from `reference` onward.
    pub fn new(
        config: &'a RenderConfig,
        source: &'a dyn EventSource,
        typesetter: &'a dyn Typesetter,
        reference: NaiveDate,
    ) -> Self {
        Self {
            config,
            source,
            typesetter,
            reference,
        }
    }

    /// Render the panel into `canvas`.
    pub fn render(&self, canvas: &mut PlaneCanvas) -> Result<(), RenderError> {
        let cfg = &self.config.tasklist;
        let date_to = self.reference + Duration::days(i64::from(cfg.task_days));

        let mut y = cfg.padding.top as i32;
        let mut date = self.reference;
        while date < date_to {
            y = self.render_day(canvas, date, y)?;
            date = date + Duration::days(1);
        }

        let h = canvas.size().height as i32;
        Line::new(Point::new(0, 0), Point::new(0, h - 1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(canvas.plane_mut(0))?;
        Ok(())
    }

    /// Render one date, returning the advanced cursor.
    ///
    /// A date without events returns the cursor unchanged.
    fn render_day(
        &self,
        canvas: &mut PlaneCanvas,
        date: NaiveDate,
        y: i32,
    ) -> Result<i32, RenderError> {
        let cfg = &self.config.tasklist;
        let timed = self.source.events_on(date);
        let all_day = self.source.all_day_events_on(date);
        if timed.is_empty() && all_day.is_empty() {
            return Ok(y);
        }

        let mut y = y;
        let plane_index = usize::from(self.source.is_holiday(date));

        // Header with optional highlight marker.
        let header = format!("{:02}-{:02}", date.month(), date.day());
        let header_size = self.typesetter.measure(&header, cfg.font_header);
        self.typesetter.draw(
            canvas.plane_mut(plane_index),
            Point::new(cfg.padding.left as i32, y),
            &header,
            cfg.font_header,
            Alignment::Left,
        )?;

        if (date - self.reference).num_days() < i64::from(cfg.highlight_days) {
            let icon = if date == self.reference {
                cfg.icon_today
            } else {
                cfg.icon_upcoming
            };
            icon.render(
                canvas.plane_mut(0),
                Point::new(
                    cfg.padding.left as i32 + 4 + header_size.width as i32,
                    y + header_size.height as i32 - icon.height() as i32,
                ),
            )?;
        }
        y += header_size.height as i32 + 8;

        for row in task_rows(&all_day, &timed, date) {
            let mut x = cfg.padding.left as i32 + cfg.task_offset;
            if let Some(glyph) = row.glyph {
                let icon = match glyph {
                    SpanGlyph::From => cfg.icon_from,
                    SpanGlyph::Through => cfg.icon_through,
                    SpanGlyph::To => cfg.icon_to,
                };
                icon.render(canvas.plane_mut(0), Point::new(x, y))?;
                x += icon.width() as i32 + if glyph == SpanGlyph::Through { 4 } else { 2 };
            }

            let row_size = self.typesetter.measure(&row.text, cfg.font_event);
            self.typesetter.draw(
                canvas.plane_mut(0),
                Point::new(x, y),
                &row.text,
                cfg.font_event,
                Alignment::Left,
            )?;
            y += row_size.height as i32 + 4;
        }
        Ok(y)
    }
}
