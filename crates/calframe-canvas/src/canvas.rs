//! Multi-plane canvas.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::error::CanvasError;
use crate::surface::PlaneSurface;

/// One finished output plane: a 1-bit raster and the physical color it is
/// meant to be displayed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    /// Display color this plane's ink maps to.
    pub color: Rgb888,
    /// The rendered raster.
    pub surface: PlaneSurface,
}

/// Canvas owning one raster plane per supported display color.
///
/// In monochrome-planes mode every supported color gets its own independent
/// 1-bit plane, each later transferred to the display as one physical color.
/// Otherwise a single plane is allocated and only the first (primary) color
/// is meaningfully distinguishable from the background.
///
/// Plane lookup saturates rather than fails: requesting a "holiday" accent
/// plane on a canvas with fewer planes returns the highest available one, so
/// layouts can address logical highlight colors regardless of how many
/// physical colors exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneCanvas {
    planes: Vec<PlaneSurface>,
    colors: Vec<Rgb888>,
    monochrome: bool,
}

impl PlaneCanvas {
    /// Create a canvas of `size` for the given supported colors.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidDimensions`] if either dimension is zero and
    /// [`CanvasError::InvalidColorSet`] if `colors` is empty.
    pub fn new(size: Size, colors: &[Rgb888], monochrome: bool) -> Result<Self, CanvasError> {
        if size.width < 1 || size.height < 1 {
            return Err(CanvasError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        if colors.is_empty() {
            return Err(CanvasError::InvalidColorSet);
        }

        let plane_count = if monochrome { colors.len() } else { 1 };
        let planes = (0..plane_count)
            .map(|_| PlaneSurface::new(size.width, size.height))
            .collect();

        Ok(Self {
            planes,
            colors: colors.to_vec(),
            monochrome,
        })
    }

    /// Number of planes in this canvas.
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// Canvas size (identical for every plane).
    pub fn size(&self) -> Size {
        self.planes[0].size()
    }

    /// `true` if each supported color has its own 1-bit plane.
    pub fn is_monochrome(&self) -> bool {
        self.monochrome
    }

    /// Drawing handle for the plane of `color_index`.
    ///
    /// The index saturates to the highest available plane; this never fails.
    pub fn plane_mut(&mut self, color_index: usize) -> &mut PlaneSurface {
        let idx = color_index.min(self.planes.len() - 1);
        &mut self.planes[idx]
    }

    /// Read-only access to the plane of `color_index`, saturating.
    pub fn plane(&self, color_index: usize) -> &PlaneSurface {
        &self.planes[color_index.min(self.planes.len() - 1)]
    }

    /// The display color of `color_index`, saturating.
    pub fn color(&self, color_index: usize) -> Rgb888 {
        self.colors[color_index.min(self.colors.len() - 1)]
    }

    /// Reset every plane to background.
    pub fn clear(&mut self) {
        for plane in &mut self.planes {
            plane.clear();
        }
    }

    /// Paste every plane of this canvas onto the corresponding plane of
    /// `other`, top-left corner at `position`.
    ///
    /// # Errors
    ///
    /// [`CanvasError::PlaneCountMismatch`] if the canvases do not have the
    /// same number of planes.
    pub fn composite_into(&self, other: &mut PlaneCanvas, position: Point) -> Result<(), CanvasError> {
        if self.planes.len() != other.planes.len() {
            return Err(CanvasError::PlaneCountMismatch {
                expected: other.planes.len(),
                found: self.planes.len(),
            });
        }
        for (src, dst) in self.planes.iter().zip(other.planes.iter_mut()) {
            dst.paste(src, position);
        }
        Ok(())
    }

    /// Consume the canvas and return its finished planes.
    ///
    /// In monochrome mode each plane carries its configured color; in
    /// full-color mode the single plane carries the primary color.
    pub fn into_planes(self) -> Vec<Plane> {
        self.planes
            .into_iter()
            .enumerate()
            .map(|(i, surface)| Plane {
                color: self.colors[i.min(self.colors.len() - 1)],
                surface,
            })
            .collect()
    }
}
