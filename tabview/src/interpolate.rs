//! Linear interpolation of scalars, colors and frames.
//!
//! Every function clamps its progress into `[0, 1]` first, so callers can pass
//! raw scroll fractions without guarding them.

use crate::{color::Color, geometry::Rect};

/// Clamps a progress value into `[0, 1]`. `NaN` maps to `0`.
#[inline]
pub fn clamp_progress(t: f32) -> f32 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Interpolates between `a` and `b`.
///
/// Written as `a * (1 - t) + b * t` so `t == 0` yields exactly `a` and
/// `t == 1` yields exactly `b`.
///
/// ```
/// use tabview::interpolate::lerp_scalar;
///
/// assert_eq!(lerp_scalar(10.0, 20.0, 0.25), 12.5);
/// assert_eq!(lerp_scalar(10.0, 20.0, 4.0), 20.0);
/// ```
#[inline]
pub fn lerp_scalar(a: f32, b: f32, t: f32) -> f32 {
    let t = clamp_progress(t);
    a * (1.0 - t) + b * t
}

/// Interpolates each channel of two colors.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    Color::new(
        lerp_scalar(from.r, to.r, t),
        lerp_scalar(from.g, to.g, t),
        lerp_scalar(from.b, to.b, t),
        lerp_scalar(from.a, to.a, t),
    )
}

/// Values that can be blended by animations.
pub trait Lerp: Copy {
    /// Blends `self` toward `to` by `t` in `[0, 1]`.
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        lerp_scalar(self, to, t)
    }
}

impl Lerp for Color {
    fn lerp(self, to: Self, t: f32) -> Self {
        lerp_color(self, to, t)
    }
}

impl Lerp for Rect {
    fn lerp(self, to: Self, t: f32) -> Self {
        Rect::new(
            lerp_scalar(self.x, to.x, t),
            lerp_scalar(self.y, to.y, t),
            lerp_scalar(self.width, to.width, t),
            lerp_scalar(self.height, to.height, t),
        )
    }
}

/// Timing curve applied to engine-driven animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end (smoothstep).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear time progress to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = clamp_progress(t);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_scalar_clamps() {
        assert_eq!(lerp_scalar(0.0, 10.0, -1.0), 0.0);
        assert_eq!(lerp_scalar(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp_scalar(0.0, 10.0, f32::NAN), 0.0);
        assert_eq!(lerp_scalar(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_lerp_color_endpoints() {
        let a = Color::new(0.1, 0.7, 0.3, 1.0);
        let b = Color::new(0.9, 0.2, 0.6, 0.4);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
    }

    #[test]
    fn test_lerp_color_monotonic_per_channel() {
        let a = Color::new(0.0, 1.0, 0.2, 0.5);
        let b = Color::new(1.0, 0.0, 0.2, 1.0);
        let mut previous = lerp_color(a, b, 0.0);
        for step in 1..=20 {
            let current = lerp_color(a, b, step as f32 / 20.0);
            assert!(current.r >= previous.r);
            assert!(current.g <= previous.g);
            assert!((current.b - 0.2).abs() < 1e-6);
            assert!(current.a >= previous.a);
            previous = current;
        }
    }

    #[test]
    fn test_lerp_grayscale_against_rgb() {
        let white = Color::from_components(&[1.0, 1.0]).unwrap();
        let mid = lerp_color(white, Color::GREEN, 0.5);
        assert_eq!(mid, Color::new(0.5, 1.0, 0.5, 1.0));
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    }
}
