//! Text measurement and drawing capability.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use calframe_canvas::{CanvasError, PlaneSurface};

/// Text rendering service used by the panel layouts.
///
/// Layouts only need to know how big a string will be and how to put it on a
/// plane; the glyph rasterization itself stays behind this trait.
pub trait Typesetter {
    /// Pixel size of `text`, accounting for embedded newlines.
    fn measure(&self, text: &str, font: &MonoFont<'_>) -> Size;

    /// Draw `text` onto `surface` with its top edge at `position.y`.
    ///
    /// `position.x` is interpreted according to `align`: the left edge,
    /// center, or right edge of each line.
    fn draw(
        &self,
        surface: &mut PlaneSurface,
        position: Point,
        text: &str,
        font: &'static MonoFont<'static>,
        align: Alignment,
    ) -> Result<(), CanvasError>;
}

/// Default typesetter over the embedded-graphics monospace fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoTypesetter;

impl Typesetter for MonoTypesetter {
    fn measure(&self, text: &str, font: &MonoFont<'_>) -> Size {
        let advance = font.character_size.width + font.character_spacing;
        let mut width = 0;
        let mut lines = 0;
        for line in text.split('\n') {
            lines += 1;
            let chars = line.chars().count() as u32;
            if chars > 0 {
                width = width.max(chars * advance - font.character_spacing);
            }
        }
        Size::new(width, lines * font.character_size.height)
    }

    fn draw(
        &self,
        surface: &mut PlaneSurface,
        position: Point,
        text: &str,
        font: &'static MonoFont<'static>,
        align: Alignment,
    ) -> Result<(), CanvasError> {
        let character_style = MonoTextStyle::new(font, BinaryColor::On);
        let text_style = TextStyleBuilder::new()
            .baseline(Baseline::Top)
            .alignment(align)
            .build();
        Text::with_text_style(text, position, character_style, text_style).draw(surface)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    #[test]
    fn measure_single_line() {
        let size = MonoTypesetter.measure("12:30", &FONT_6X10);
        assert_eq!(size, Size::new(5 * 6, 10));
    }

    #[test]
    fn measure_takes_the_widest_line() {
        let size = MonoTypesetter.measure("Jan. 03\nWed", &FONT_6X10);
        assert_eq!(size, Size::new(7 * 6, 20));
    }

    #[test]
    fn draw_puts_ink_below_the_top_edge() {
        let mut surface = PlaneSurface::new(60, 20);
        MonoTypesetter
            .draw(&mut surface, Point::new(2, 3), "8", &FONT_6X10, Alignment::Left)
            .unwrap();

        let mut ink = 0;
        for y in 0..20 {
            for x in 0..60 {
                if surface.is_ink(x, y) {
                    assert!(y >= 3 && y < 13, "glyph ink outside the line box at y={y}");
                    assert!(x >= 2 && x < 8, "glyph ink outside the advance at x={x}");
                    ink += 1;
                }
            }
        }
        assert!(ink > 0);
    }

    #[test]
    fn right_alignment_ends_at_the_anchor() {
        let mut surface = PlaneSurface::new(60, 12);
        MonoTypesetter
            .draw(
                &mut surface,
                Point::new(50, 0),
                "07",
                &FONT_6X10,
                Alignment::Right,
            )
            .unwrap();
        for y in 0..12 {
            for x in 51..60 {
                assert!(!surface.is_ink(x, y), "ink beyond the right anchor");
            }
        }
    }
}
