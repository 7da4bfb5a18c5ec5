//! Tab view configuration.
//!
//! ## Usage
//!
//! ```
//! use tabview::{TabViewConfig, WidthType};
//!
//! let config = TabViewConfig::default()
//!     .width_type(WidthType::Fixed(80.0))
//!     .animation_duration_ms(200)
//!     .item_gesture_driven(true);
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use derive_setters::Setters;

use crate::{color::Color, error::ConfigError, interpolate::Easing};

/// Default values shared by [`TabViewConfig`] and
/// [`ItemStyle`](crate::ItemStyle).
pub struct TabViewDefaults;

impl TabViewDefaults {
    /// Duration of item and indicator animations.
    pub const ANIMATION_DURATION_MS: u64 = 250;
    /// Width assumed for self-sizing items the host has not measured yet.
    pub const SELF_SIZING_ESTIMATE: f32 = 50.0;
    /// Default title font size for both states.
    pub const FONT_SIZE: f32 = 17.0;
    /// Default normal title color.
    pub const NORMAL_COLOR: Color = Color::BLACK;
    /// Default selected title color.
    pub const SELECTED_COLOR: Color = Color::RED;
    /// Horizontal margin hosts usually keep around a title.
    pub const TITLE_MARGIN: f32 = 8.0;
}

/// How item widths are determined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidthType {
    /// Every item has the given width.
    Fixed(f32),
    /// The strip width is divided evenly between items.
    #[default]
    Evenly,
    /// Each item uses its own measured width.
    SelfSizing,
}

/// Configuration of a [`TabSyncEngine`](crate::TabSyncEngine).
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabViewConfig {
    /// Item width policy.
    pub width_type: WidthType,
    /// Duration of item and indicator animations. `0` disables animation.
    pub animation_duration_ms: u64,
    /// Whether the indicator follows the scroll position continuously.
    pub indicator_gesture_driven: bool,
    /// Whether item colors and scales follow the scroll position
    /// continuously.
    pub item_gesture_driven: bool,
    /// Timing curve for animations.
    pub easing: Easing,
    /// Width used for self-sizing items before they are measured.
    pub self_sizing_estimate: f32,
}

impl Default for TabViewConfig {
    fn default() -> Self {
        Self {
            width_type: WidthType::default(),
            animation_duration_ms: TabViewDefaults::ANIMATION_DURATION_MS,
            indicator_gesture_driven: false,
            item_gesture_driven: false,
            easing: Easing::default(),
            self_sizing_estimate: TabViewDefaults::SELF_SIZING_ESTIMATE,
        }
    }
}

impl TabViewConfig {
    /// Animation duration as a [`Duration`].
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Whether non-gesture updates animate at all.
    pub fn is_animated(&self) -> bool {
        self.animation_duration_ms > 0
    }

    /// Checks the configuration for values no layout can honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let WidthType::Fixed(width) = self.width_type {
            if !(width.is_finite() && width > 0.0) {
                return Err(ConfigError::FixedWidth(width));
            }
        }
        let estimate = self.self_sizing_estimate;
        if !(estimate.is_finite() && estimate > 0.0) {
            return Err(ConfigError::SelfSizingEstimate(estimate));
        }
        Ok(())
    }
}
