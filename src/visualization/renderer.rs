//! Projection of simulated bodies onto a `Picture`.
//!
//! The simulated system is centred on the origin and spans `system_size`
//! metres along x and y. That square is mapped onto the largest centred
//! square of the canvas, with +y pointing up the image.
//!
//! Markers:
//! - trail mode draws one pixel per body in a palette color picked by body
//!   index, accumulating across calls
//! - final mode draws a 3x3 red square per body, clipped to the canvas
//!
//! An empty canvas has no area to project onto, so nothing is drawn on it.

use crate::simulation::states::{CelestialBody, Coord};
use crate::visualization::picture::{Picture, RgbColor};

pub const TRAIL_PALETTE: [RgbColor; 8] = [
    RgbColor::new(230, 160, 0),
    RgbColor::new(0, 90, 200),
    RgbColor::new(0, 150, 60),
    RgbColor::new(140, 60, 180),
    RgbColor::new(200, 40, 120),
    RgbColor::new(0, 160, 160),
    RgbColor::new(110, 80, 40),
    RgbColor::new(60, 60, 60),
];

pub const FINAL_MARKER: RgbColor = RgbColor::RED;

/// Half-width of the final-position marker square
const FINAL_MARKER_RADIUS: usize = 1;

/// Linearly map `x` from [0, curr_max] onto [0, new_max], rounding to the
/// nearest pixel and clamping to the target range
pub fn scale_value(x: f64, curr_max: f64, new_max: usize) -> usize {
    if curr_max.is_nan() || curr_max <= 0.0 {
        return 0;
    }
    let scaled = (x / curr_max * new_max as f64).round();
    // NaN casts to 0
    scaled.clamp(0.0, new_max as f64) as usize
}

/// Palette color for the body at `index`
pub fn trail_color(index: usize) -> RgbColor {
    TRAIL_PALETTE[index % TRAIL_PALETTE.len()]
}

/// Pixel coordinate of a physical position on a `width` x `height` canvas
pub fn to_pixel(pos: &Coord, system_size: f64, width: usize, height: usize) -> (usize, usize) {
    let side = width.min(height);
    let max = side.saturating_sub(1);
    let off_x = (width - side) / 2;
    let off_y = (height - side) / 2;
    let half = 0.5 * system_size;

    let col = off_x + scale_value(pos.x + half, system_size, max);
    let row = off_y + (max - scale_value(pos.y + half, system_size, max));
    (col, row)
}

/// Mark every body's current position on `pic`; bodies are not modified.
/// Leaves an empty `pic` untouched.
pub fn draw_bodies(bodies: &[CelestialBody], pic: &mut Picture, system_size: f64, final_pos: bool) {
    if pic.is_empty() {
        return;
    }
    let (width, height) = (pic.width(), pic.height());

    for (i, body) in bodies.iter().enumerate() {
        let (col, row) = to_pixel(&body.x, system_size, width, height);

        if !final_pos {
            pic.set(col, row, trail_color(i));
            continue;
        }

        let x_end = (col + FINAL_MARKER_RADIUS).min(pic.width().saturating_sub(1));
        let y_end = (row + FINAL_MARKER_RADIUS).min(pic.height().saturating_sub(1));
        for y in row.saturating_sub(FINAL_MARKER_RADIUS)..=y_end {
            for x in col.saturating_sub(FINAL_MARKER_RADIUS)..=x_end {
                pic.set(x, y, FINAL_MARKER);
            }
        }
    }
}
