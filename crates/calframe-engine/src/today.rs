//! Today summary panel.
//!
//! Shows the reference date in large type plus the next sunrise and sunset.
//! Whichever sun event has already passed is listed first on the left; the
//! other is right-aligned. Each sun icon is nudged vertically by the trend
//! to hint whether the time drifts earlier or later over the coming days.

use chrono::{DateTime, Local};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Alignment;
use tracing::debug;

use calframe_canvas::PlaneCanvas;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::event::EventSource;
use crate::sun::SunCalculator;
use crate::text::Typesetter;

/// Pixels of icon travel per unit of trend magnitude.
const TREND_NUDGE: f32 = 4.0;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SunEvent {
    Sunrise,
    Sunset,
}

/// Today panel layout for one render pass.
pub struct TodayPanel<'a> {
    config: &'a RenderConfig,
    source: &'a dyn EventSource,
    typesetter: &'a dyn Typesetter,
    reference: DateTime<Local>,
}

impl<'a> TodayPanel<'a> {
    /// Panel for `reference`, reading holidays from `source`.
    pub fn new(
        config: &'a RenderConfig,
        source: &'a dyn EventSource,
        typesetter: &'a dyn Typesetter,
        reference: DateTime<Local>,
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
        self.draw_date(canvas)?;
        self.draw_sun(canvas)?;
        self.draw_border(canvas)?;
        Ok(())
    }

    fn draw_date(&self, canvas: &mut PlaneCanvas) -> Result<(), RenderError> {
        let cfg = &self.config.today;
        let size = canvas.size();
        let today = self.reference.date_naive();

        let text = today.format("%b. %d\n%a").to_string();
        let plane_index = usize::from(self.source.is_holiday(today));
        let anchor = Point::new(
            size.width as i32 - cfg.padding.right as i32,
            cfg.padding.top as i32,
        );
        self.typesetter.draw(
            canvas.plane_mut(plane_index),
            anchor,
            &text,
            cfg.font_date,
            Alignment::Right,
        )?;
        Ok(())
    }

    fn draw_sun(&self, canvas: &mut PlaneCanvas) -> Result<(), RenderError> {
        let cfg = &self.config.today;
        let size = canvas.size();

        let (latitude, longitude) = cfg.coordinates;
        let Some(times) = SunCalculator::new(latitude, longitude).observe(self.reference) else {
            debug!("sun does not rise or set today, skipping readout");
            return Ok(());
        };
        debug!(
            sunrise = %times.sunrise,
            sunset = %times.sunset,
            "next sun events"
        );

        // Both times render as HH:MM, so one measurement covers both.
        let time_size = self.typesetter.measure("00:00", cfg.font_sun);
        let mut x = cfg.padding.left as i32;
        let y = size.height as i32 - time_size.height as i32 - cfg.padding.bottom as i32;

        let order = if times.sunset_first {
            [SunEvent::Sunset, SunEvent::Sunrise]
        } else {
            [SunEvent::Sunrise, SunEvent::Sunset]
        };

        for event in order {
            // The sunrise icon lives on the accent plane, everything else on
            // the primary plane.
            let (instant, trend, icon_plane) = match event {
                SunEvent::Sunrise => (times.sunrise, times.sunrise_trend, 1),
                SunEvent::Sunset => (times.sunset, times.sunset_trend, 0),
            };
            let nudge = (trend * TREND_NUDGE) as i32;
            cfg.icon_sun.render(
                canvas.plane_mut(icon_plane),
                Point::new(
                    x,
                    y + time_size.height as i32 - cfg.icon_sun.height() as i32 - nudge,
                ),
            )?;
            x += cfg.icon_sun.width() as i32;

            self.typesetter.draw(
                canvas.plane_mut(0),
                Point::new(x, y),
                &instant.format("%H:%M").to_string(),
                cfg.font_sun,
                Alignment::Left,
            )?;

            // The second entry is pushed against the right edge.
            x = size.width as i32
                - cfg.icon_sun.width() as i32
                - time_size.width as i32
                - cfg.padding.right as i32;
        }
        Ok(())
    }

    fn draw_border(&self, canvas: &mut PlaneCanvas) -> Result<(), RenderError> {
        let size = canvas.size();
        let w = size.width as i32;
        let h = size.height as i32;
        let style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

        let plane = canvas.plane_mut(0);
        Line::new(Point::new(0, 0), Point::new(0, h - 1))
            .into_styled(style)
            .draw(plane)?;
        Line::new(Point::new(0, h - 1), Point::new(w, h - 1))
            .into_styled(style)
            .draw(plane)?;
        Ok(())
    }
}
