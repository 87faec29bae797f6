//! Dashed stroke rasterization.
//!
//! embedded-graphics has no dashed stroke style, so dashes are emitted as a
//! run of short solid [`Line`] segments. The dash pattern carries across the
//! corners of a polyline: a dash interrupted by a corner continues on the
//! next segment instead of restarting, which keeps rectangle outlines from
//! doubling up ink at the corners.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::error::CanvasError;
use crate::surface::PlaneSurface;

/// Draw a dashed open polyline through `points`.
///
/// `dash` and `gap` are the on/off run lengths in pixels. `phase` shifts the
/// pattern start by a fraction of one dash-plus-gap period and is wrapped
/// into `[0, 1)`, so callers can offset neighbouring outlines against each
/// other.
///
/// # Errors
///
/// [`CanvasError::InvalidGeometry`] if fewer than two points are given.
pub fn draw_dashed_polyline(
    surface: &mut PlaneSurface,
    points: &[Point],
    stroke_width: u32,
    dash: u32,
    gap: u32,
    phase: f32,
) -> Result<(), CanvasError> {
    if points.len() < 2 {
        return Err(CanvasError::InvalidGeometry);
    }
    if dash == 0 {
        return Ok(());
    }

    let style = PrimitiveStyle::with_stroke(BinaryColor::On, stroke_width);
    let period = (dash + gap) as f32;

    // Pattern state carried across segments: whether the current run is a
    // dash and how much of it is still left to emit.
    let mut is_dash = true;
    let mut leftover = (phase.rem_euclid(1.0) * period).floor() as u32;
    if leftover == 0 {
        // Start at the beginning of a dash.
    } else if leftover <= gap {
        is_dash = false;
    } else {
        leftover -= gap;
    }

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let dx = (end.x - start.x) as f32;
        let dy = (end.y - start.y) as f32;
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            continue;
        }
        let (ux, uy) = (dx / length, dy / length);
        let segment_len = length.round() as u32;

        let mut drawn = 0u32;
        while drawn < segment_len {
            let mut run = if leftover > 0 {
                leftover
            } else if is_dash {
                dash
            } else {
                gap
            };

            // Clip the run to this segment, remembering the overflow so the
            // pattern resumes mid-run on the next segment.
            if drawn + run > segment_len {
                leftover = drawn + run - segment_len;
                run = segment_len - drawn;
            } else {
                leftover = 0;
            }

            if is_dash {
                let from = Point::new(
                    (start.x as f32 + ux * drawn as f32).round() as i32,
                    (start.y as f32 + uy * drawn as f32).round() as i32,
                );
                let to = Point::new(
                    (start.x as f32 + ux * (drawn + run - 1) as f32).round() as i32,
                    (start.y as f32 + uy * (drawn + run - 1) as f32).round() as i32,
                );
                Line::new(from, to).into_styled(style).draw(surface)?;
            }

            drawn += run;
            if leftover == 0 {
                is_dash = !is_dash;
            }
        }
    }

    Ok(())
}

/// Draw the outline of `rect` with a dashed stroke.
///
/// The outline is a closed polyline through the four corners, so the dash
/// pattern runs around the rectangle without restarting at each side.
///
/// # Errors
///
/// [`CanvasError::InvalidGeometry`] if the rectangle has a zero dimension.
pub fn draw_dashed_rectangle(
    surface: &mut PlaneSurface,
    rect: Rectangle,
    stroke_width: u32,
    dash: u32,
    gap: u32,
    phase: f32,
) -> Result<(), CanvasError> {
    let bottom_right = rect.bottom_right().ok_or(CanvasError::InvalidGeometry)?;
    let top_left = rect.top_left;
    let corners = [
        top_left,
        Point::new(bottom_right.x, top_left.y),
        bottom_right,
        Point::new(top_left.x, bottom_right.y),
        top_left,
    ];
    draw_dashed_polyline(surface, &corners, stroke_width, dash, gap, phase)
}
