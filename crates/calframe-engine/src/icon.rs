//! Procedural icons.
//!
//! Icons are drawn from embedded-graphics primitives instead of bundled
//! bitmap assets, so they scale with the configured size and need no
//! resource files next to the binary.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

/// The icon shapes the panels use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Timed-event marker: a filled dot.
    Event,
    /// All-day-event marker: a calendar page.
    AllDayEvent,
    /// Sun disc with rays, for the sunrise/sunset readout.
    Sun,
    /// Filled marker for the reference date in the task list.
    HighlightToday,
    /// Outlined marker for upcoming dates in the task list.
    HighlightUpcoming,
    /// Multi-day event starts on this date.
    SpanFrom,
    /// Multi-day event continues through this date.
    SpanThrough,
    /// Multi-day event ends on this date.
    SpanTo,
}

/// An icon with its drawing size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Shape to draw.
    pub kind: IconKind,
    /// Bounding box of the icon.
    pub size: Size,
}

impl Icon {
    /// Icon of `kind` fitted into `size`.
    pub const fn new(kind: IconKind, size: Size) -> Self {
        Self { kind, size }
    }

    /// Icon width in pixels.
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    /// Icon height in pixels.
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    /// Draw the icon with its top-left corner at `position`.
    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        target: &mut D,
        position: Point,
    ) -> Result<(), D::Error> {
        let fill = PrimitiveStyle::with_fill(BinaryColor::On);
        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        let w = self.size.width as i32;
        let h = self.size.height as i32;
        let diameter = self.size.width.min(self.size.height);

        match self.kind {
            IconKind::Event => {
                Circle::new(position, diameter)
                    .into_styled(fill)
                    .draw(target)?;
            }
            IconKind::AllDayEvent => {
                Rectangle::new(position, self.size)
                    .into_styled(stroke)
                    .draw(target)?;
                // Binder bar along the top of the page.
                Rectangle::new(position, Size::new(self.size.width, self.size.height / 3))
                    .into_styled(fill)
                    .draw(target)?;
            }
            IconKind::Sun => {
                // Disc in the middle, rays along both axes.
                let disc = diameter / 2;
                let inset = (diameter - disc) as i32 / 2;
                Circle::new(position + Point::new(inset, inset), disc)
                    .into_styled(fill)
                    .draw(target)?;
                let center = position + Point::new(w / 2, h / 2);
                for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                    let reach = disc as i32 / 2 + 1;
                    let near = center + Point::new(dx * reach, dy * reach);
                    let far = Point::new(
                        match dx {
                            1 => position.x + w - 1,
                            -1 => position.x,
                            _ => center.x,
                        },
                        match dy {
                            1 => position.y + h - 1,
                            -1 => position.y,
                            _ => center.y,
                        },
                    );
                    Line::new(near, far).into_styled(stroke).draw(target)?;
                }
            }
            IconKind::HighlightToday => {
                Circle::new(position, diameter)
                    .into_styled(fill)
                    .draw(target)?;
            }
            IconKind::HighlightUpcoming => {
                Circle::new(position, diameter)
                    .into_styled(stroke)
                    .draw(target)?;
            }
            IconKind::SpanFrom => {
                // Bar on the left, arrow head pointing right.
                Line::new(position, position + Point::new(0, h - 1))
                    .into_styled(stroke)
                    .draw(target)?;
                Triangle::new(
                    position + Point::new(2, 0),
                    position + Point::new(2, h - 1),
                    position + Point::new(w - 1, h / 2),
                )
                .into_styled(fill)
                .draw(target)?;
            }
            IconKind::SpanTo => {
                // Arrow head pointing right into a bar.
                Triangle::new(
                    position,
                    position + Point::new(0, h - 1),
                    position + Point::new(w - 3, h / 2),
                )
                .into_styled(fill)
                .draw(target)?;
                Line::new(
                    position + Point::new(w - 1, 0),
                    position + Point::new(w - 1, h - 1),
                )
                .into_styled(stroke)
                .draw(target)?;
            }
            IconKind::SpanThrough => {
                Line::new(
                    position + Point::new(0, h / 2),
                    position + Point::new(w - 1, h / 2),
                )
                .into_styled(stroke)
                .draw(target)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use calframe_canvas::PlaneSurface;

    fn ink_count(surface: &PlaneSurface) -> usize {
        (0..surface.height())
            .flat_map(|y| (0..surface.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.is_ink(x, y))
            .count()
    }

    #[test]
    fn every_icon_kind_draws_something() {
        for kind in [
            IconKind::Event,
            IconKind::AllDayEvent,
            IconKind::Sun,
            IconKind::HighlightToday,
            IconKind::HighlightUpcoming,
            IconKind::SpanFrom,
            IconKind::SpanThrough,
            IconKind::SpanTo,
        ] {
            let mut surface = PlaneSurface::new(16, 16);
            Icon::new(kind, Size::new(12, 12))
                .render(&mut surface, Point::new(2, 2))
                .unwrap();
            assert!(ink_count(&surface) > 0, "{kind:?} drew nothing");
        }
    }

    #[test]
    fn icons_stay_inside_their_box() {
        for kind in [
            IconKind::Event,
            IconKind::AllDayEvent,
            IconKind::Sun,
            IconKind::HighlightToday,
            IconKind::HighlightUpcoming,
            IconKind::SpanFrom,
            IconKind::SpanThrough,
            IconKind::SpanTo,
        ] {
            let mut surface = PlaneSurface::new(20, 20);
            Icon::new(kind, Size::new(10, 10))
                .render(&mut surface, Point::new(5, 5))
                .unwrap();
            for y in 0..20 {
                for x in 0..20 {
                    if surface.is_ink(x, y) {
                        assert!(
                            (5..15).contains(&x) && (5..15).contains(&y),
                            "{kind:?} leaked ink to {x},{y}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn outline_highlight_is_hollow() {
        let mut filled = PlaneSurface::new(16, 16);
        let mut hollow = PlaneSurface::new(16, 16);
        Icon::new(IconKind::HighlightToday, Size::new(10, 10))
            .render(&mut filled, Point::zero())
            .unwrap();
        Icon::new(IconKind::HighlightUpcoming, Size::new(10, 10))
            .render(&mut hollow, Point::zero())
            .unwrap();
        assert!(ink_count(&hollow) < ink_count(&filled));
        assert!(filled.is_ink(5, 5));
        assert!(!hollow.is_ink(5, 5));
    }
}
