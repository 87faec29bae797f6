//! Headless inspection of rendered frames.
//!
//! Tests render into memory and assert on pixels through [`FrameProbe`]; no
//! display hardware or window system is involved. The probe can also export
//! PNGs, which is the quickest way to eyeball a failing layout test.

use std::path::Path;

use embedded_graphics::prelude::*;
use image::{ImageError, Rgb, RgbImage};

use calframe_canvas::Plane;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Wraps the planes of a finished render for pixel-level assertions.
pub struct FrameProbe {
    planes: Vec<Plane>,
}

impl FrameProbe {
    /// Probe over the given planes.
    ///
    /// # Panics
    ///
    /// Panics if `planes` is empty; a render always yields at least one.
    pub fn new(planes: Vec<Plane>) -> Self {
        assert!(!planes.is_empty(), "a frame has at least one plane");
        Self { planes }
    }

    /// Number of planes in the frame.
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// Frame size in pixels.
    pub fn size(&self) -> Size {
        self.planes[0].surface.size()
    }

    /// Whether the pixel at `(x, y)` on `plane` is ink.
    pub fn is_ink(&self, plane: usize, x: u32, y: u32) -> bool {
        self.planes[plane].surface.is_ink(x, y)
    }

    /// Assert ink at `(x, y)` on `plane`.
    ///
    /// # Panics
    ///
    /// Panics with the coordinates when the pixel is blank.
    pub fn assert_ink(&self, plane: usize, x: u32, y: u32) {
        assert!(
            self.is_ink(plane, x, y),
            "expected ink at ({x},{y}) on plane {plane}"
        );
    }

    /// Assert background at `(x, y)` on `plane`.
    ///
    /// # Panics
    ///
    /// Panics with the coordinates when the pixel carries ink.
    pub fn assert_blank(&self, plane: usize, x: u32, y: u32) {
        assert!(
            !self.is_ink(plane, x, y),
            "expected blank at ({x},{y}) on plane {plane}"
        );
    }

    /// Count the ink pixels of `plane` inside `region`.
    pub fn ink_count_in(&self, plane: usize, region: embedded_graphics::primitives::Rectangle) -> usize {
        let mut count = 0;
        for dy in 0..region.size.height {
            for dx in 0..region.size.width {
                let x = region.top_left.x + dx as i32;
                let y = region.top_left.y + dy as i32;
                if x >= 0 && y >= 0 && self.is_ink(plane, x as u32, y as u32) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Assert that `region` of `plane` is entirely background.
    ///
    /// # Panics
    ///
    /// Panics when any pixel in the region carries ink.
    pub fn assert_region_blank(&self, plane: usize, region: embedded_graphics::primitives::Rectangle) {
        let ink = self.ink_count_in(plane, region);
        assert!(
            ink == 0,
            "expected blank region {region:?} on plane {plane}, found {ink} ink pixels"
        );
    }

    /// Export one plane as a PNG, ink in the plane's color on white.
    ///
    /// # Errors
    ///
    /// Fails when the image cannot be encoded or written.
    pub fn save_plane_png(&self, plane: usize, path: &Path) -> Result<(), ImageError> {
        let size = self.size();
        let mut img = RgbImage::from_pixel(size.width, size.height, BACKGROUND);
        self.blend_plane(&mut img, &self.planes[plane]);
        img.save(path)
    }

    /// Export all planes overlaid in order as one PNG.
    ///
    /// # Errors
    ///
    /// Fails when the image cannot be encoded or written.
    pub fn save_flattened_png(&self, path: &Path) -> Result<(), ImageError> {
        let size = self.size();
        let mut img = RgbImage::from_pixel(size.width, size.height, BACKGROUND);
        for plane in &self.planes {
            self.blend_plane(&mut img, plane);
        }
        img.save(path)
    }

    fn blend_plane(&self, img: &mut RgbImage, plane: &Plane) {
        let color = Rgb([plane.color.r(), plane.color.g(), plane.color.b()]);
        for y in 0..plane.surface.height() {
            for x in 0..plane.surface.width() {
                if plane.surface.is_ink(x, y) {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use calframe_canvas::PlaneCanvas;
    use embedded_graphics::pixelcolor::{BinaryColor, Rgb888};
    use embedded_graphics::primitives::Rectangle;

    fn probe_with_dot() -> FrameProbe {
        let mut canvas = PlaneCanvas::new(
            Size::new(8, 8),
            &[Rgb888::new(0, 0, 0), Rgb888::new(255, 0, 0)],
            true,
        )
        .unwrap();
        canvas.plane_mut(1).set_pixel(3, 4, BinaryColor::On);
        FrameProbe::new(canvas.into_planes())
    }

    #[test]
    fn probe_sees_plane_pixels() {
        let probe = probe_with_dot();
        assert_eq!(probe.plane_count(), 2);
        probe.assert_ink(1, 3, 4);
        probe.assert_blank(0, 3, 4);
    }

    #[test]
    fn region_counting() {
        let probe = probe_with_dot();
        let all = Rectangle::new(Point::zero(), Size::new(8, 8));
        assert_eq!(probe.ink_count_in(1, all), 1);
        assert_eq!(probe.ink_count_in(0, all), 0);
        probe.assert_region_blank(0, all);
    }

    #[test]
    fn png_export_writes_files() {
        let probe = probe_with_dot();
        let dir = tempfile::tempdir().unwrap();

        let flattened = dir.path().join("frame.png");
        probe.save_flattened_png(&flattened).unwrap();
        assert!(flattened.exists());

        let accent = dir.path().join("plane1.png");
        probe.save_plane_png(1, &accent).unwrap();
        assert!(accent.exists());

        let reloaded = image::open(&flattened).unwrap().to_rgb8();
        assert_eq!(reloaded.get_pixel(3, 4), &Rgb([255, 0, 0]));
        assert_eq!(reloaded.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }
}
