//! Render configuration.
//!
//! All layout decisions are driven by one immutable [`RenderConfig`] value:
//! the overall canvas, the three panel regions and their fonts, icons and
//! margins. Construction of a [`crate::FrameComposer`] validates the
//! configuration; violations are fatal and never silently clamped.

use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_6X10, FONT_7X13_BOLD, FONT_9X15, FONT_9X18, FONT_9X18_BOLD,
};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use thiserror::Error;

use crate::icon::{Icon, IconKind};

/// Panel insets in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    /// Top inset in pixels.
    pub top: u32,
    /// Right inset in pixels.
    pub right: u32,
    /// Bottom inset in pixels.
    pub bottom: u32,
    /// Left inset in pixels.
    pub left: u32,
}

impl Edges {
    /// Insets in CSS order: top, right, bottom, left.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Combined left and right inset.
    pub const fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Combined top and bottom inset.
    pub const fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// Calendar grid panel configuration.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Panel size in pixels.
    pub size: Size,
    /// Panel offset within the root canvas.
    pub position: Point,
    /// Inner padding.
    pub padding: Edges,
    /// Date glyph for today and current-month future days.
    pub font_date_bold: &'static MonoFont<'static>,
    /// Date glyph for past and other-month days.
    pub font_date_thin: &'static MonoFont<'static>,
    /// Font for the per-day event counters.
    pub font_event_count: &'static MonoFont<'static>,
    /// Icon next to the timed-event counter.
    pub icon_event: Icon,
    /// Icon next to the all-day-event counter.
    pub icon_all_day: Icon,
    /// Offset of the date number within a day cell.
    pub date_position: Point,
    /// Left margin of the event counter stack within a day cell.
    pub events_margin_left: i32,
    /// Weeks before the current week to draw.
    pub weeks_past: u32,
    /// Weeks from the current week on to draw.
    pub weeks_future: u32,
    /// Gap between adjacent day cells.
    pub day_margin: u32,
    /// Extra gap before the weekend columns.
    pub weekend_margin: i32,
}

/// Today summary panel configuration.
#[derive(Debug, Clone)]
pub struct TodayConfig {
    /// Panel size in pixels.
    pub size: Size,
    /// Panel offset within the root canvas.
    pub position: Point,
    /// Inner padding.
    pub padding: Edges,
    /// Font for the large date readout.
    pub font_date: &'static MonoFont<'static>,
    /// Font for the sunrise/sunset times.
    pub font_sun: &'static MonoFont<'static>,
    /// Sun icon next to each time.
    pub icon_sun: Icon,
    /// Geographic coordinates (latitude, longitude) for sun times.
    pub coordinates: (f64, f64),
}

/// Task list panel configuration.
#[derive(Debug, Clone)]
pub struct TaskListConfig {
    /// Panel size in pixels.
    pub size: Size,
    /// Panel offset within the root canvas.
    pub position: Point,
    /// Inner padding.
    pub padding: Edges,
    /// Font for the per-date headers.
    pub font_header: &'static MonoFont<'static>,
    /// Font for the event rows.
    pub font_event: &'static MonoFont<'static>,
    /// Indentation of event rows relative to the header.
    pub task_offset: i32,
    /// How many days ahead to list events for.
    pub task_days: u32,
    /// Days within which a date gets a highlight icon.
    pub highlight_days: u32,
    /// Highlight icon for the reference date itself.
    pub icon_today: Icon,
    /// Highlight icon for upcoming dates.
    pub icon_upcoming: Icon,
    /// Glyph for the first day of a multi-day event.
    pub icon_from: Icon,
    /// Glyph for interior days of a multi-day event.
    pub icon_through: Icon,
    /// Glyph for the last day of a multi-day event.
    pub icon_to: Icon,
}

/// Complete engine configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Overall canvas size.
    pub size: Size,
    /// Supported display colors; the first is primary, the rest accent.
    pub colors: Vec<Rgb888>,
    /// Allocate one 1-bit plane per color instead of a single raster.
    pub monochrome: bool,
    /// Calendar grid panel.
    pub calendar: CalendarConfig,
    /// Today summary panel.
    pub today: TodayConfig,
    /// Task list panel.
    pub tasklist: TaskListConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let size = Size::new(880, 528);
        Self {
            size,
            colors: vec![Rgb888::new(0, 0, 0), Rgb888::new(255, 0, 0)],
            monochrome: false,
            calendar: CalendarConfig {
                size: Size::new(size.width * 3 / 4, size.height),
                position: Point::zero(),
                padding: Edges::new(1, 1, 4, 1),
                font_date_bold: &FONT_9X18_BOLD,
                font_date_thin: &FONT_9X18,
                font_event_count: &FONT_6X10,
                icon_event: Icon::new(IconKind::Event, Size::new(12, 12)),
                icon_all_day: Icon::new(IconKind::AllDayEvent, Size::new(12, 12)),
                date_position: Point::new(6, 4),
                events_margin_left: 24,
                weeks_past: 2,
                weeks_future: 4,
                day_margin: 1,
                weekend_margin: 7,
            },
            today: TodayConfig {
                size: Size::new(size.width / 4, size.height / 3),
                position: Point::new(size.width as i32 * 3 / 4, 0),
                padding: Edges::new(16, 16, 8, 8),
                font_date: &FONT_10X20,
                font_sun: &FONT_9X15,
                icon_sun: Icon::new(IconKind::Sun, Size::new(16, 16)),
                coordinates: (50.054_328, 19.938_452),
            },
            tasklist: TaskListConfig {
                size: Size::new(size.width / 4, size.height * 2 / 3),
                position: Point::new(size.width as i32 * 3 / 4, size.height as i32 / 3),
                padding: Edges::new(4, 0, 0, 8),
                font_header: &FONT_7X13_BOLD,
                font_event: &FONT_6X10,
                task_offset: 8,
                task_days: 7,
                highlight_days: 3,
                icon_today: Icon::new(IconKind::HighlightToday, Size::new(10, 10)),
                icon_upcoming: Icon::new(IconKind::HighlightUpcoming, Size::new(10, 10)),
                icon_from: Icon::new(IconKind::SpanFrom, Size::new(9, 9)),
                icon_through: Icon::new(IconKind::SpanThrough, Size::new(9, 9)),
                icon_to: Icon::new(IconKind::SpanTo, Size::new(9, 9)),
            },
        }
    }
}

impl RenderConfig {
    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Fails if fewer than two colors are configured, the canvas or a panel
    /// has a zero dimension, the calendar week window is empty, or the
    /// calendar panel cannot hold one pixel of cell after padding and
    /// margins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.len() < 2 {
            return Err(ConfigError::TooFewColors {
                found: self.colors.len(),
            });
        }
        if self.size.width < 1 || self.size.height < 1 {
            return Err(ConfigError::InvalidCanvasSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if self.calendar.weeks_past + self.calendar.weeks_future == 0 {
            return Err(ConfigError::EmptyWeekWindow);
        }
        for (panel, size) in [
            ("calendar", self.calendar.size),
            ("today", self.today.size),
            ("tasklist", self.tasklist.size),
        ] {
            if size.width < 1 || size.height < 1 {
                return Err(ConfigError::UndersizedPanel {
                    panel,
                    width: size.width,
                    height: size.height,
                });
            }
        }

        // The grid must be left at least a 1x1 day cell once padding and
        // margins are taken out.
        let cal = &self.calendar;
        let week_span = cal.weeks_past + cal.weeks_future;
        let cell_width = cal
            .size
            .width
            .checked_sub(cal.padding.horizontal())
            .map(|w| w / 7)
            .and_then(|w| w.checked_sub(cal.day_margin));
        let cell_height = cal
            .size
            .height
            .checked_sub(cal.padding.vertical())
            .map(|h| h / week_span)
            .and_then(|h| h.checked_sub(cal.day_margin));
        match (cell_width, cell_height) {
            (Some(w), Some(h)) if w >= 1 && h >= 1 => Ok(()),
            _ => Err(ConfigError::UndersizedPanel {
                panel: "calendar",
                width: cal.size.width,
                height: cal.size.height,
            }),
        }
    }
}

/// Fatal configuration errors, raised at composer construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The display needs a primary and at least one accent color.
    #[error("at least two display colors are required, found {found}")]
    TooFewColors {
        /// Configured color count.
        found: usize,
    },

    /// The overall canvas had a zero dimension.
    #[error("invalid canvas size {width}x{height}, both must be at least 1")]
    InvalidCanvasSize {
        /// Configured width in pixels.
        width: u32,
        /// Configured height in pixels.
        height: u32,
    },

    /// Both week counts were zero, leaving no grid rows to lay out.
    #[error("calendar week window is empty, weeks_past + weeks_future must be at least 1")]
    EmptyWeekWindow,

    /// A panel region cannot hold its layout at the configured size.
    #[error("{panel} panel of {width}x{height} is too small for its padding and margins")]
    UndersizedPanel {
        /// Name of the offending panel.
        panel: &'static str,
        /// Configured width in pixels.
        width: u32,
        /// Configured height in pixels.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn too_few_colors_is_fatal() {
        let mut config = RenderConfig::default();
        config.colors.truncate(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooFewColors { found: 1 })
        );
    }

    #[test]
    fn empty_week_window_is_fatal() {
        let mut config = RenderConfig::default();
        config.calendar.weeks_past = 0;
        config.calendar.weeks_future = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyWeekWindow));
    }

    #[test]
    fn zero_canvas_size_is_fatal() {
        let mut config = RenderConfig::default();
        config.size = Size::new(880, 0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCanvasSize {
                width: 880,
                height: 0
            })
        );
    }

    #[test]
    fn undersized_calendar_panel_is_fatal() {
        // 8px of width cannot hold seven day cells; the cell computation
        // must not underflow, it must fail validation.
        let mut config = RenderConfig::default();
        config.calendar.size = Size::new(8, 528);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UndersizedPanel {
                panel: "calendar",
                width: 8,
                height: 528
            })
        );
    }

    #[test]
    fn padding_exceeding_the_panel_is_fatal() {
        let mut config = RenderConfig::default();
        config.calendar.padding = Edges::new(300, 400, 300, 400);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UndersizedPanel {
                panel: "calendar",
                width: 660,
                height: 528
            })
        );
    }

    #[test]
    fn zero_size_side_panel_is_fatal() {
        let mut config = RenderConfig::default();
        config.today.size = Size::new(0, 176);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UndersizedPanel {
                panel: "today",
                width: 0,
                height: 176
            })
        );
    }

    #[test]
    fn panels_tile_the_default_canvas() {
        let config = RenderConfig::default();
        assert_eq!(
            config.calendar.size.width + config.today.size.width,
            config.size.width
        );
        assert_eq!(
            config.today.size.height + config.tasklist.size.height,
            config.size.height
        );
    }
}
