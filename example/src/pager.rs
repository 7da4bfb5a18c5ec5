//! A headless horizontal pager standing in for a platform scroll view.

use tabview::ScrollSample;

/// One page per tab, each a viewport wide.
#[derive(Debug, Clone)]
pub struct Pager {
    titles: Vec<String>,
    viewport_width: f32,
    offset_x: f32,
    dragging: bool,
}

impl Pager {
    pub fn new(page_count: usize, viewport_width: f32) -> Self {
        Self {
            titles: (0..page_count).map(|index| format!("Page {index}")).collect(),
            viewport_width,
            offset_x: 0.0,
            dragging: false,
        }
    }

    pub fn page_count(&self) -> usize {
        self.titles.len()
    }

    pub fn sample(&self) -> ScrollSample {
        ScrollSample::new(
            self.offset_x,
            self.viewport_width,
            self.viewport_width * self.titles.len() as f32,
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Moves the content under the user's finger. Overscroll is allowed, the
    /// way a bouncing scroll view reports it.
    pub fn drag_to(&mut self, offset_x: f32) {
        self.offset_x = offset_x;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn set_offset_x(&mut self, offset_x: f32) {
        self.offset_x = offset_x;
    }

    /// Page currently filling most of the viewport.
    pub fn visible_page(&self) -> Option<&str> {
        let index = (self.offset_x / self.viewport_width).round();
        if index < 0.0 {
            return None;
        }
        self.titles.get(index as usize).map(String::as_str)
    }
}
