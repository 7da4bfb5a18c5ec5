//! Indicator geometry between two item frames.

use crate::{geometry::Rect, interpolate::lerp_scalar};

/// Interpolates the indicator between the frames of two adjacent items.
///
/// Only `x` and `width` move; items share a row, so `y` and `height` are
/// taken from `from`.
pub fn lerp_frame(from: Rect, to: Rect, fraction: f32) -> Rect {
    Rect::new(
        lerp_scalar(from.x, to.x, fraction),
        from.y,
        lerp_scalar(from.width, to.width, fraction),
        from.height,
    )
}

/// Emphasis of the indicator while crossing between two items.
///
/// Rises from 0 to 1 as `fraction` goes to 0.5 and falls back to 0 at 1.
pub fn emphasis_progress(fraction: f32) -> f32 {
    let fraction = crate::interpolate::clamp_progress(fraction);
    2.0 * (0.5 - (0.5 - fraction).abs())
}
