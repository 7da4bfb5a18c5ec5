//! Single-row strip layout for hosts without a layout system of their own.
//!
//! Items are placed left to right with no spacing and fill the strip height.
//! The strip scrolls horizontally when its content is wider than its bounds.

use crate::{
    config::{TabViewConfig, WidthType},
    geometry::Rect,
    host::ItemFrameProvider,
};

/// Item frames and horizontal scroll state of a tab strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripLayout {
    width_type: WidthType,
    estimate: f32,
    width: f32,
    height: f32,
    measured: Vec<Option<f32>>,
    frames: Vec<Rect>,
    scroll_offset: f32,
}

impl StripLayout {
    /// Creates an empty layout for a strip of the given bounds.
    pub fn new(config: &TabViewConfig, width: f32, height: f32) -> Self {
        Self {
            width_type: config.width_type,
            estimate: config.self_sizing_estimate,
            width: width.max(0.0),
            height: height.max(0.0),
            measured: Vec::new(),
            frames: Vec::new(),
            scroll_offset: 0.0,
        }
    }

    /// Sets the number of items, keeping measurements of surviving items.
    pub fn set_item_count(&mut self, count: usize) {
        self.measured.resize(count, None);
        self.relayout();
    }

    /// Number of laid out items.
    pub fn item_count(&self) -> usize {
        self.measured.len()
    }

    /// Updates the strip bounds.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.relayout();
    }

    /// Records the intrinsic width of a self-sizing item. Ignored for other
    /// width types and for indices past the item count.
    pub fn set_measured_width(&mut self, index: usize, width: f32) {
        if let Some(slot) = self.measured.get_mut(index) {
            *slot = (width.is_finite() && width >= 0.0).then_some(width);
            self.relayout();
        }
    }

    /// Applies a new width policy.
    pub fn apply_config(&mut self, config: &TabViewConfig) {
        self.width_type = config.width_type;
        self.estimate = config.self_sizing_estimate;
        self.relayout();
    }

    fn item_width(&self, index: usize) -> f32 {
        match self.width_type {
            WidthType::Fixed(width) => width,
            WidthType::Evenly => {
                let count = self.measured.len();
                if count == 0 {
                    0.0
                } else {
                    self.width / count as f32
                }
            }
            WidthType::SelfSizing => self
                .measured
                .get(index)
                .copied()
                .flatten()
                .unwrap_or(self.estimate),
        }
    }

    fn relayout(&mut self) {
        let mut left = 0.0;
        let frames: Vec<Rect> = (0..self.measured.len())
            .map(|index| {
                let width = self.item_width(index);
                let frame = Rect::new(left, 0.0, width, self.height);
                left += width;
                frame
            })
            .collect();
        self.frames = frames;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// All item frames in index order.
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Total width of all items.
    pub fn content_width(&self) -> f32 {
        self.frames.last().map_or(0.0, Rect::max_x)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_width() - self.width).max(0.0)
    }

    /// Current horizontal scroll offset of the strip.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll offset that centers item `index`, clamped to the scrollable
    /// range. `None` for unknown items.
    pub fn centered_offset(&self, index: usize) -> Option<f32> {
        let frame = self.frames.get(index)?;
        Some((frame.center_x() - self.width / 2.0).clamp(0.0, self.max_scroll()))
    }
}

impl ItemFrameProvider for StripLayout {
    fn frame_for_item(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    fn focus_item(&mut self, index: usize) {
        if let Some(offset) = self.centered_offset(index) {
            self.scroll_offset = offset;
        }
    }
}
