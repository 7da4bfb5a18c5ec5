//! The synchronization engine.
//!
//! [`TabSyncEngine`] turns scroll notifications from the paged content view
//! into item renders, indicator geometry and selection changes.
//!
//! ## Usage
//!
//! Call [`TabSyncEngine::on_offset_changed`] from the content view's scroll
//! callback, [`TabSyncEngine::select_item`] when a tab is tapped,
//! [`TabSyncEngine::tick`] once per frame while
//! [`TabSyncEngine::has_pending_animation_frame`] is `true`, and
//! [`TabSyncEngine::reload`] whenever the set of items changes.
//!
//! ## Update policy
//!
//! While the user drags between two items the indicator and the item visuals
//! each follow one of two policies:
//!
//! - *gesture-driven*: the value tracks the scroll fraction continuously;
//! - *animated*: the value snaps to the nearer item once the fraction crosses
//!   one half, animating over the configured duration.

use std::{mem, time::Instant};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, instrument, trace, warn};

use crate::{
    animation::{Animations, Tween},
    config::TabViewConfig,
    error::{Result, TabViewError},
    geometry::Rect,
    host::{ItemFrameProvider, TabHost},
    indicator::lerp_frame,
    item_state::ItemVisualState,
    offset::{ResolveError, ResolvedPosition, ScrollSample, resolve},
};

/// Coarse mode of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SyncPhase {
    /// No transition in progress; the selection is settled.
    #[default]
    Idle,
    /// The content view rests between two items.
    Transitioning(ResolvedPosition),
}

/// Which parts of the tab view follow the gesture continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureDriven {
    /// The indicator tracks the scroll fraction.
    pub indicator: bool,
    /// Item visuals track the scroll fraction.
    pub items: bool,
}

/// Snapshot of the engine's selection state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncState {
    /// Currently selected item.
    pub selected_index: usize,
    /// Gesture-driven policy flags.
    pub gesture_driven: GestureDriven,
    /// Animation duration for non-gesture updates.
    pub animation_duration_ms: u64,
    /// Current mode.
    pub phase: SyncPhase,
}

/// Keeps a tab strip in step with a paged content view.
#[derive(Debug)]
pub struct TabSyncEngine {
    config: TabViewConfig,
    item_count: usize,
    selected_index: usize,
    phase: SyncPhase,
    /// Realized item frames, kept until the layout is invalidated.
    frames: FxHashMap<usize, Rect>,
    /// Last state handed to the renderer for each item.
    rendered: FxHashMap<usize, ItemVisualState>,
    /// Last geometry handed to the indicator host.
    indicator: Option<Rect>,
    /// The indicator still has to be placed on the selected item.
    indicator_pending: bool,
    animations: Animations,
}

fn push_unique(indices: &mut SmallVec<[usize; 4]>, index: usize) {
    if !indices.contains(&index) {
        indices.push(index);
    }
}

impl TabSyncEngine {
    /// Creates an engine for `item_count` items with item 0 selected.
    ///
    /// Call [`reload`](Self::reload) once the host is ready to render.
    pub fn new(config: TabViewConfig, item_count: usize) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            item_count,
            selected_index: 0,
            phase: SyncPhase::Idle,
            frames: FxHashMap::default(),
            rendered: FxHashMap::default(),
            indicator: None,
            indicator_pending: item_count > 0,
            animations: Animations::default(),
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &TabViewConfig {
        &self.config
    }

    /// Replaces the configuration. In-flight animations keep their timing.
    pub fn set_config(&mut self, config: TabViewConfig) -> Result<()> {
        config.validate()?;
        debug!(?config, "tab view configuration changed");
        self.config = config;
        Ok(())
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Currently selected item.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Current mode.
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Snapshot of selection state and policy.
    pub fn state(&self) -> SyncState {
        SyncState {
            selected_index: self.selected_index,
            gesture_driven: GestureDriven {
                indicator: self.config.indicator_gesture_driven,
                items: self.config.item_gesture_driven,
            },
            animation_duration_ms: self.config.animation_duration_ms,
            phase: self.phase,
        }
    }

    /// Last geometry handed to the indicator host.
    pub fn indicator_geometry(&self) -> Option<Rect> {
        self.indicator
    }

    /// Whether [`tick`](Self::tick) has work to do.
    pub fn has_pending_animation_frame(&self) -> bool {
        self.indicator_pending || !self.animations.is_idle()
    }

    /// Drops memoized item frames. Call after the strip is laid out again.
    pub fn invalidate_layout(&mut self) {
        self.frames.clear();
    }

    /// Visual state a newly realized item should display.
    ///
    /// Returns `None` for indices past the item count.
    pub fn resting_state<H: TabHost + ?Sized>(
        &self,
        index: usize,
        host: &H,
    ) -> Option<ItemVisualState> {
        if index >= self.item_count {
            return None;
        }
        if let Some(state) = self.rendered.get(&index) {
            return Some(*state);
        }
        let selected = index == self.selected_index;
        Some(host.item_style(index).for_selection(selected))
    }

    /// Reads the current sample from the host's scroll surface and handles
    /// it. Hook this to the content view's offset change notification.
    pub fn on_offset_changed<H: TabHost + ?Sized>(&mut self, host: &mut H) {
        let sample = host.scroll_sample();
        self.on_scroll_sample(sample, host);
    }

    /// Handles one scroll sample.
    ///
    /// Ignored unless the user is manipulating the scroll surface, so
    /// programmatic scrolling (including the engine's own) never feeds back.
    pub fn on_scroll_sample<H: TabHost + ?Sized>(&mut self, sample: ScrollSample, host: &mut H) {
        if !host.is_user_manipulating() {
            return;
        }

        let position = match resolve(&sample, self.item_count) {
            Ok(position) => position,
            Err(ResolveError::OutOfRange) => {
                trace!(?sample, "scroll sample out of range");
                return;
            }
        };
        trace!(?position, "resolved scroll sample");

        if position.is_aligned() {
            self.settle(position.low, host);
            return;
        }

        if let SyncPhase::Transitioning(previous) = self.phase {
            if (previous.low, previous.high) != (position.low, position.high) {
                self.leave_pair(previous, position, host);
            }
        }
        self.phase = SyncPhase::Transitioning(position);

        self.update_indicator(position, host);
        self.update_items(position, host);
        self.focus(position.nearest(), host);
    }

    /// Selects `index` explicitly, for example after a tap.
    ///
    /// Supersedes any transition in progress. Fails without touching any
    /// state if `index` is out of range.
    #[instrument(level = "debug", skip(self, host))]
    pub fn select_item<H: TabHost + ?Sized>(&mut self, index: usize, host: &mut H) -> Result<()> {
        if index >= self.item_count {
            warn!(index, count = self.item_count, "rejected tab selection");
            return Err(TabViewError::InvalidIndex {
                index,
                count: self.item_count,
            });
        }

        let mut outgoing: SmallVec<[usize; 4]> = SmallVec::new();
        push_unique(&mut outgoing, self.selected_index);
        if let SyncPhase::Transitioning(position) = mem::take(&mut self.phase) {
            push_unique(&mut outgoing, position.low);
            push_unique(&mut outgoing, position.high);
        }
        for &item in outgoing.iter().filter(|&&item| item != index) {
            let target = host.item_style(item).for_selection(false);
            self.animate_item(item, target, host);
        }

        self.selected_index = index;
        let sample = host.scroll_sample();
        host.set_offset_x(sample.offset_for_index(index), false);

        let target = host.item_style(index).for_selection(true);
        self.animate_item(index, target, host);

        match self.frame(index, &*host) {
            Some(frame) => {
                self.indicator_pending = false;
                self.animate_indicator(frame, host);
            }
            None => self.indicator_pending = true,
        }
        host.set_emphasis_progress(0.0);
        self.focus(index, host);

        debug!(index, "tab selected");
        host.on_item_selected(index);
        Ok(())
    }

    /// Rebuilds the tab view for `item_count` items.
    ///
    /// Drops memoized layout and animations, picks the selected item from the
    /// current scroll position, and renders every item at rest.
    #[instrument(level = "debug", skip(self, host))]
    pub fn reload<H: TabHost + ?Sized>(&mut self, item_count: usize, host: &mut H) {
        self.item_count = item_count;
        self.frames.clear();
        self.rendered.clear();
        self.animations.clear();
        self.phase = SyncPhase::Idle;
        self.indicator = None;

        if item_count == 0 {
            self.selected_index = 0;
            self.indicator_pending = false;
            debug!("tab view reloaded without items");
            return;
        }

        self.selected_index = match resolve(&host.scroll_sample(), item_count) {
            Ok(position) => position.nearest(),
            Err(ResolveError::OutOfRange) => self.selected_index.min(item_count - 1),
        };

        for index in 0..item_count {
            let state = host
                .item_style(index)
                .for_selection(index == self.selected_index);
            self.render_item(index, state, host);
        }

        self.indicator_pending = true;
        self.place_pending_indicator(host);
        host.set_emphasis_progress(0.0);
        self.focus(self.selected_index, host);

        debug!(item_count, selected = self.selected_index, "tab view reloaded");
    }

    /// Advances animations to `now` and pushes the resulting frames to the
    /// host.
    pub fn tick<H: TabHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        self.place_pending_indicator(host);

        let frame = self.animations.step(now);
        for (index, state) in frame.items {
            host.render(index, &state);
            self.rendered.insert(index, state);
        }
        if let Some((rect, finished)) = frame.indicator {
            host.set_geometry(rect, !finished);
            self.indicator = Some(rect);
        }
    }

    /// Settles on `index` after an aligned sample.
    fn settle<H: TabHost + ?Sized>(&mut self, index: usize, host: &mut H) {
        let previous_phase = mem::take(&mut self.phase);
        if previous_phase == SyncPhase::Idle && self.selected_index == index {
            return;
        }

        let mut touched: SmallVec<[usize; 4]> = SmallVec::new();
        push_unique(&mut touched, self.selected_index);
        if let SyncPhase::Transitioning(position) = previous_phase {
            push_unique(&mut touched, position.low);
            push_unique(&mut touched, position.high);
        }
        push_unique(&mut touched, index);
        let item_count = self.item_count;
        for &item in touched.iter().filter(|&&item| item < item_count) {
            self.rest_item(item, item == index, host);
        }

        match self.frame(index, &*host) {
            Some(frame) => {
                self.indicator_pending = false;
                if self.config.indicator_gesture_driven {
                    self.place_indicator(frame, host);
                } else {
                    self.animate_indicator(frame, host);
                }
            }
            None => self.indicator_pending = true,
        }
        if self.config.indicator_gesture_driven {
            host.set_emphasis_progress(0.0);
        }
        self.focus(index, host);
        self.change_selection(index, host);
    }

    /// The scroll position moved to a different pair of items without an
    /// aligned sample in between.
    fn leave_pair<H: TabHost + ?Sized>(
        &mut self,
        previous: ResolvedPosition,
        next: ResolvedPosition,
        host: &mut H,
    ) {
        let passed = if next.low >= previous.high {
            next.low
        } else {
            next.high
        };
        for item in [previous.low, previous.high] {
            if item != next.low && item != next.high {
                self.rest_item(item, false, host);
            }
        }
        self.change_selection(passed, host);
    }

    fn change_selection<H: TabHost + ?Sized>(&mut self, index: usize, host: &mut H) {
        if self.selected_index != index {
            self.selected_index = index;
            debug!(index, "tab selection settled");
            host.on_selection_settled(index);
        }
    }

    fn update_indicator<H: TabHost + ?Sized>(&mut self, position: ResolvedPosition, host: &mut H) {
        if self.config.indicator_gesture_driven {
            let low = self.frame(position.low, &*host);
            let high = self.frame(position.high, &*host);
            if let (Some(low), Some(high)) = (low, high) {
                self.place_indicator(lerp_frame(low, high, position.fraction), host);
            }
            host.set_emphasis_progress(position.emphasis());
        } else {
            let target = if position.fraction >= 0.5 {
                position.high
            } else {
                position.low
            };
            if let Some(frame) = self.frame(target, &*host) {
                self.animate_indicator(frame, host);
            }
        }
    }

    fn update_items<H: TabHost + ?Sized>(&mut self, position: ResolvedPosition, host: &mut H) {
        let ResolvedPosition {
            low,
            high,
            fraction,
        } = position;
        if self.config.item_gesture_driven {
            let low_state = host.item_style(low).for_progress(1.0 - fraction);
            let high_state = host.item_style(high).for_progress(fraction);
            self.render_item(low, low_state, host);
            self.render_item(high, high_state, host);
        } else {
            let high_progress = if fraction >= 0.5 { 1.0 } else { 0.0 };
            let low_state = host.item_style(low).for_progress(1.0 - high_progress);
            let high_state = host.item_style(high).for_progress(high_progress);
            self.animate_item(low, low_state, host);
            self.animate_item(high, high_state, host);
        }
    }

    fn rest_item<H: TabHost + ?Sized>(&mut self, index: usize, selected: bool, host: &mut H) {
        let target = host.item_style(index).for_selection(selected);
        if self.config.item_gesture_driven {
            self.render_item(index, target, host);
        } else {
            self.animate_item(index, target, host);
        }
    }

    fn focus<H: TabHost + ?Sized>(&self, index: usize, host: &mut H) {
        trace!(index, "focus item");
        host.focus_item(index);
    }

    fn frame<P: ItemFrameProvider + ?Sized>(&mut self, index: usize, provider: &P) -> Option<Rect> {
        if let Some(frame) = self.frames.get(&index) {
            return Some(*frame);
        }
        match provider.frame_for_item(index).filter(Rect::is_finite) {
            Some(frame) => {
                self.frames.insert(index, frame);
                Some(frame)
            }
            None => {
                trace!(index, "item frame unavailable");
                None
            }
        }
    }

    fn render_item<H: TabHost + ?Sized>(
        &mut self,
        index: usize,
        state: ItemVisualState,
        host: &mut H,
    ) {
        self.animations.cancel_item(index);
        host.render(index, &state);
        self.rendered.insert(index, state);
    }

    fn animate_item<H: TabHost + ?Sized>(
        &mut self,
        index: usize,
        target: ItemVisualState,
        host: &mut H,
    ) {
        let current = self.rendered.get(&index).copied();
        let from = match current {
            Some(current) if self.config.is_animated() => current,
            _ => return self.render_item(index, target, host),
        };
        match self.animations.item_target(index) {
            Some(in_flight) if in_flight == target => {}
            None if from == target => {}
            _ => self.animations.animate_item(
                index,
                Tween::new(
                    from,
                    target,
                    self.config.animation_duration(),
                    self.config.easing,
                ),
            ),
        }
    }

    fn place_indicator<H: TabHost + ?Sized>(&mut self, rect: Rect, host: &mut H) {
        self.animations.cancel_indicator();
        host.set_geometry(rect, false);
        self.indicator = Some(rect);
    }

    fn animate_indicator<H: TabHost + ?Sized>(&mut self, target: Rect, host: &mut H) {
        let from = match self.indicator {
            Some(current) if self.config.is_animated() => current,
            _ => return self.place_indicator(target, host),
        };
        match self.animations.indicator_target() {
            Some(in_flight) if in_flight == target => {}
            None if from == target => {}
            _ => self.animations.animate_indicator(Tween::new(
                from,
                target,
                self.config.animation_duration(),
                self.config.easing,
            )),
        }
    }

    fn place_pending_indicator<H: TabHost + ?Sized>(&mut self, host: &mut H) {
        if !self.indicator_pending || self.item_count == 0 {
            return;
        }
        if let Some(frame) = self.frame(self.selected_index, &*host) {
            self.indicator_pending = false;
            self.place_indicator(frame, host);
        }
    }
}
