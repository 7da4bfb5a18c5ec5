//! Interfaces the engine uses to talk to the host view layer.
//!
//! A host implements every trait on one type (or a thin wrapper) and passes
//! it to each [`TabSyncEngine`](crate::TabSyncEngine) call. The engine never
//! stores the host, so hosts are free to hold borrowed UI handles.
//!
//! [`IndicatorHost`] and [`TabViewListener`] have no-op defaults; the other
//! traits must be implemented.

use crate::{
    geometry::Rect,
    item_state::{ItemStyle, ItemVisualState},
    offset::ScrollSample,
};

/// The paged content view the tab strip follows.
pub trait ScrollSurface {
    /// Current offset, viewport width and content width.
    fn scroll_sample(&self) -> ScrollSample;

    /// `true` while the user is tracking, dragging, or the surface is
    /// decelerating from a fling.
    fn is_user_manipulating(&self) -> bool;

    /// Moves the content programmatically.
    fn set_offset_x(&mut self, offset_x: f32, animated: bool);
}

/// Layout queries against the tab strip.
pub trait ItemFrameProvider {
    /// Frame of item `index` in strip content coordinates, or `None` while
    /// the item is not realized.
    fn frame_for_item(&self, index: usize) -> Option<Rect>;

    /// Scrolls the strip so item `index` is centered.
    fn focus_item(&mut self, index: usize);
}

/// Applies computed visual state to an item.
pub trait ItemRenderer {
    /// Renders item `index` with `state`.
    fn render(&mut self, index: usize, state: &ItemVisualState);
}

/// Receives indicator updates.
pub trait IndicatorHost {
    /// Places the indicator. `animated` is `true` for intermediate frames of
    /// an engine-driven animation.
    fn set_geometry(&mut self, _rect: Rect, _animated: bool) {}

    /// Emphasis while crossing between items, 0→1→0.
    fn set_emphasis_progress(&mut self, _progress: f32) {}
}

/// Selection notifications.
pub trait TabViewListener {
    /// An item was selected explicitly through
    /// [`select_item`](crate::TabSyncEngine::select_item).
    fn on_item_selected(&mut self, _index: usize) {}

    /// A scroll gesture came to rest on a different item.
    fn on_selection_settled(&mut self, _index: usize) {}
}

/// Per-item configuration owned by the host.
pub trait TabDataSource {
    /// Style of item `index`.
    fn item_style(&self, index: usize) -> ItemStyle;
}

/// Everything the engine needs from a host.
pub trait TabHost:
    ScrollSurface
    + ItemFrameProvider
    + ItemRenderer
    + IndicatorHost
    + TabViewListener
    + TabDataSource
{
}

impl<T> TabHost for T where
    T: ScrollSurface
        + ItemFrameProvider
        + ItemRenderer
        + IndicatorHost
        + TabViewListener
        + TabDataSource
        + ?Sized
{
}
