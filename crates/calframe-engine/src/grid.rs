//! Calendar grid panel.
//!
//! Lays out one cell per day over a window of whole weeks around the
//! reference date. Each cell is rendered into its own small canvas first and
//! then composited at its grid position, so nothing a cell draws can bleed
//! into its neighbours.

use chrono::{Datelike, Duration, NaiveDate};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::Alignment;
use tracing::debug;

use calframe_canvas::{draw_dashed_rectangle, PlaneCanvas, PlaneSurface};

use crate::config::{CalendarConfig, RenderConfig};
use crate::error::RenderError;
use crate::event::EventSource;
use crate::icon::Icon;
use crate::text::Typesetter;

// Dash pattern for past-date borders.
const PAST_DASH: u32 = 3;
const PAST_GAP: u32 = 6;

/// Calendar grid layout for one render pass.
pub struct CalendarGrid<'a> {
    config: &'a RenderConfig,
    source: &'a dyn EventSource,
    typesetter: &'a dyn Typesetter,
    reference: NaiveDate,
}

impl<'a> CalendarGrid<'a> {
    /// Grid around `reference`, reading events from `source`.
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

    /// Render the full grid into `canvas`.
    pub fn render(&self, canvas: &mut PlaneCanvas) -> Result<(), RenderError> {
        let cal = &self.config.calendar;
        let week_span = cal.weeks_past + cal.weeks_future;
        let monday = self.reference
            - Duration::days(i64::from(self.reference.weekday().num_days_from_monday()));
        let date_from = monday - Duration::weeks(i64::from(cal.weeks_past));
        let date_to = monday + Duration::weeks(i64::from(cal.weeks_future));
        debug!(%date_from, %date_to, weeks = week_span, "laying out calendar grid");

        let size = canvas.size();
        let cell = Size::new(
            (size.width - cal.padding.horizontal()) / 7 - cal.day_margin,
            (size.height - cal.padding.vertical()) / week_span - cal.day_margin,
        );

        // One cell canvas, cleared and reused for every date.
        let mut day_canvas =
            PlaneCanvas::new(cell, &self.config.colors, self.config.monochrome)?;

        let mut date = date_from;
        while date < date_to {
            day_canvas.clear();
            self.render_day(&mut day_canvas, date)?;
            day_canvas.composite_into(canvas, cell_origin(cal, cell, date, date_from))?;
            date = date + Duration::days(1);
        }
        Ok(())
    }

    fn render_day(&self, canvas: &mut PlaneCanvas, date: NaiveDate) -> Result<(), RenderError> {
        let cal = &self.config.calendar;
        let (border_width, font) = self.day_style(date);
        let plane_index = usize::from(self.source.is_holiday(date));

        let timed = self.source.events_on(date);
        let all_day = self.source.all_day_events_on(date);

        let size = canvas.size();
        let frame = Rectangle::with_corners(
            Point::zero(),
            Point::new(size.width as i32 - 2, size.height as i32 - 1),
        );

        let plane = canvas.plane_mut(plane_index);
        if date < self.reference {
            draw_dashed_rectangle(plane, frame, border_width, PAST_DASH, PAST_GAP, 0.0)?;
        } else {
            frame
                .into_styled(
                    PrimitiveStyleBuilder::new()
                        .stroke_color(embedded_graphics::pixelcolor::BinaryColor::On)
                        .stroke_width(border_width)
                        .stroke_alignment(StrokeAlignment::Inside)
                        .build(),
                )
                .draw(plane)?;
        }

        // Date number, pushed right of the border.
        let label = date.day().to_string();
        let label_size = self.typesetter.measure(&label, font);
        self.typesetter.draw(
            plane,
            cal.date_position + Point::new(border_width as i32, 0),
            &label,
            font,
            Alignment::Left,
        )?;

        // Event counters, all-day before timed.
        let mut y = cal.date_position.y + label_size.height as i32 + 2;
        if !all_day.is_empty() {
            y = self.draw_count(plane, cal, cal.icon_all_day, all_day.len(), y)?;
        }
        if !timed.is_empty() {
            self.draw_count(plane, cal, cal.icon_event, timed.len(), y)?;
        }
        Ok(())
    }

    fn draw_count(
        &self,
        plane: &mut PlaneSurface,
        cal: &CalendarConfig,
        icon: Icon,
        count: usize,
        y: i32,
    ) -> Result<i32, RenderError> {
        let label = count.to_string();
        let label_size = self.typesetter.measure(&label, cal.font_event_count);
        icon.render(
            plane,
            Point::new(
                cal.events_margin_left,
                y + label_size.height as i32 - icon.height() as i32,
            ),
        )?;
        self.typesetter.draw(
            plane,
            Point::new(cal.events_margin_left + icon.width() as i32, y),
            &label,
            cal.font_event_count,
            Alignment::Left,
        )?;
        Ok(y + label_size.height as i32)
    }

    fn day_style(&self, date: NaiveDate) -> (u32, &'static MonoFont<'static>) {
        let cal = &self.config.calendar;
        if date == self.reference {
            (4, cal.font_date_bold)
        } else if date > self.reference && date.month() == self.reference.month() {
            (2, cal.font_date_bold)
        } else {
            (1, cal.font_date_thin)
        }
    }
}

/// Top-left corner of the cell for `date` within the panel.
///
/// Weekday columns 0..=4 are packed contiguously; the weekend columns get an
/// extra `weekend_margin` gap. Cells advance by one pixel less than their
/// width so adjacent borders share a column.
pub(crate) fn cell_origin(
    cal: &CalendarConfig,
    cell: Size,
    date: NaiveDate,
    date_from: NaiveDate,
) -> Point {
    let weekday = date.weekday().num_days_from_monday() as i32;
    let weekend = if weekday >= 5 { cal.weekend_margin } else { 0 };
    let row = ((date - date_from).num_days() / 7) as i32;
    Point::new(
        cal.padding.left as i32
            + weekday * (cell.width as i32 - 1 + cal.day_margin as i32)
            + weekend,
        cal.padding.top as i32 + row * (cell.height as i32 + cal.day_margin as i32),
    )
}
