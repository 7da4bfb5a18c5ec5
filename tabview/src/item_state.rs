//! Visual state of a single tab item.
//!
//! An item blends between its *normal* and *selected* appearance. Progress
//! `0` is fully normal, `1` is fully selected.
//!
//! Font sizes are never interpolated directly. The item is always rendered
//! with the larger of the two declared sizes and a scale transform shrinks it
//! toward the smaller one, so glyphs are never scaled up past their natural
//! size.

use derive_setters::Setters;

use crate::{
    color::Color,
    config::TabViewDefaults,
    interpolate::{Lerp, clamp_progress, lerp_color, lerp_scalar},
};

/// Per-item appearance supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    /// Title color in the normal state.
    pub normal_color: Color,
    /// Title color in the selected state.
    pub selected_color: Color,
    /// Title font size in the normal state.
    pub normal_font_size: f32,
    /// Title font size in the selected state.
    pub selected_font_size: f32,
    /// Whether the selected title uses a bold weight.
    pub selected_bold: bool,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            normal_color: TabViewDefaults::NORMAL_COLOR,
            selected_color: TabViewDefaults::SELECTED_COLOR,
            normal_font_size: TabViewDefaults::FONT_SIZE,
            selected_font_size: TabViewDefaults::FONT_SIZE,
            selected_bold: false,
        }
    }
}

impl ItemStyle {
    /// The font size items are rendered with: the larger declared size.
    pub fn base_font_size(&self) -> f32 {
        self.normal_font_size.max(self.selected_font_size)
    }

    fn has_uniform_size(&self) -> bool {
        self.normal_font_size == self.selected_font_size
    }

    /// Computes the appearance for a blend `progress` between normal and
    /// selected.
    pub fn for_progress(&self, progress: f32) -> ItemVisualState {
        let progress = clamp_progress(progress);
        let normal = self.normal_font_size;
        let selected = self.selected_font_size;

        let scale = if self.has_uniform_size() {
            1.0
        } else if selected > normal {
            lerp_scalar(normal, selected, progress) / selected
        } else {
            lerp_scalar(normal, selected, progress) / normal
        };

        ItemVisualState {
            font_size: self.base_font_size(),
            bold: progress > 0.5 && self.selected_bold,
            scale,
            color: lerp_color(self.normal_color, self.selected_color, progress),
        }
    }

    /// Computes the resting appearance for a selected or unselected item.
    pub fn for_selection(&self, selected: bool) -> ItemVisualState {
        let normal = self.normal_font_size;
        let selected_size = self.selected_font_size;

        let scale = if self.has_uniform_size() {
            1.0
        } else if selected_size > normal {
            if selected { 1.0 } else { normal / selected_size }
        } else if selected {
            selected_size / normal
        } else {
            1.0
        };

        ItemVisualState {
            font_size: self.base_font_size(),
            bold: selected && self.selected_bold,
            scale,
            color: if selected {
                self.selected_color
            } else {
                self.normal_color
            },
        }
    }
}

/// What an [`ItemRenderer`](crate::host::ItemRenderer) applies to an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisualState {
    /// Point size of the title font before scaling.
    pub font_size: f32,
    /// Whether the title uses a bold weight.
    pub bold: bool,
    /// Uniform scale transform applied to the title.
    pub scale: f32,
    /// Title color.
    pub color: Color,
}

impl ItemVisualState {
    /// The size the title appears at on screen.
    pub fn rendered_size(&self) -> f32 {
        self.font_size * self.scale
    }
}

impl Lerp for ItemVisualState {
    // Font and weight are not animatable; they jump to the target as soon as
    // the animation starts moving.
    fn lerp(self, to: Self, t: f32) -> Self {
        let t = clamp_progress(t);
        let (font_size, bold) = if t > 0.0 {
            (to.font_size, to.bold)
        } else {
            (self.font_size, self.bold)
        };
        Self {
            font_size,
            bold,
            scale: lerp_scalar(self.scale, to.scale, t),
            color: lerp_color(self.color, to.color, t),
        }
    }
}
