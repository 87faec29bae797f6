//! Single-plane 1-bit framebuffer.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// CPU-side 1-bit framebuffer representing one color plane.
///
/// `BinaryColor::On` is ink in the plane's color, `BinaryColor::Off` is the
/// (white) background. Writes outside the surface bounds are silently
/// dropped: panels are fixed-size regions and overflow is accepted.
///
/// The surface implements [`DrawTarget`], so embedded-graphics primitives,
/// text and images draw directly onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneSurface {
    pixels: Vec<BinaryColor>,
    width: u32,
    height: u32,
}

impl PlaneSurface {
    /// Create a surface filled with background.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![BinaryColor::Off; (width * height) as usize],
            width,
            height,
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the pixel at `(x, y)`; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) as usize;
            self.pixels[idx] = color;
        }
    }

    /// The pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<BinaryColor> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// `true` if the pixel at `(x, y)` is ink.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.pixel_at(x, y) == Some(BinaryColor::On)
    }

    /// Fill the whole surface with `color`.
    pub fn fill(&mut self, color: BinaryColor) {
        self.pixels.fill(color);
    }

    /// Reset the surface to background.
    pub fn clear(&mut self) {
        self.fill(BinaryColor::Off);
    }

    /// Paste `src` onto this surface with its top-left corner at `at`.
    ///
    /// The pasted rectangle overwrites the destination completely, ink and
    /// background pixels alike, matching raster paste semantics. Parts of
    /// `src` falling outside this surface are clipped.
    pub fn paste(&mut self, src: &PlaneSurface, at: Point) {
        for sy in 0..src.height {
            let dy = at.y + sy as i32;
            if dy < 0 || dy as u32 >= self.height {
                continue;
            }
            for sx in 0..src.width {
                let dx = at.x + sx as i32;
                if dx < 0 || dx as u32 >= self.width {
                    continue;
                }
                let idx = (dy as u32 * self.width + dx as u32) as usize;
                self.pixels[idx] = src.pixels[(sy * src.width + sx) as usize];
            }
        }
    }
}

impl OriginDimensions for PlaneSurface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for PlaneSurface {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }
}
