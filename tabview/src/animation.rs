//! Time-based tweens driven by the host's frame clock.
//!
//! Each animated target (an item, or the indicator) owns at most one tween.
//! Scheduling a new tween on a target replaces the old one, so a superseded
//! animation never produces another frame.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    geometry::Rect,
    interpolate::{Easing, Lerp},
    item_state::ItemVisualState,
};

/// A single value moving from `from` to `to`.
///
/// The clock starts on the first [`sample`](Self::sample) so tweens can be
/// scheduled without knowing the current time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tween<T> {
    from: T,
    to: T,
    duration: Duration,
    easing: Easing,
    started_at: Option<Instant>,
}

impl<T: Lerp> Tween<T> {
    pub(crate) fn new(from: T, to: T, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started_at: None,
        }
    }

    pub(crate) fn target(&self) -> T {
        self.to
    }

    /// Returns the value at `now` and whether the tween has finished.
    pub(crate) fn sample(&mut self, now: Instant) -> (T, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        if self.duration.is_zero() {
            return (self.to, true);
        }
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from.lerp(self.to, self.easing.apply(t)), false)
    }
}

/// Values produced by one [`Animations::step`].
#[derive(Debug, Default)]
pub(crate) struct AnimationFrame {
    /// Item states in ascending index order.
    pub(crate) items: SmallVec<[(usize, ItemVisualState); 4]>,
    /// Indicator geometry and whether its tween just finished.
    pub(crate) indicator: Option<(Rect, bool)>,
}

/// In-flight tweens, at most one per target.
#[derive(Debug, Default)]
pub(crate) struct Animations {
    items: FxHashMap<usize, Tween<ItemVisualState>>,
    indicator: Option<Tween<Rect>>,
}

impl Animations {
    pub(crate) fn animate_item(&mut self, index: usize, tween: Tween<ItemVisualState>) {
        self.items.insert(index, tween);
    }

    pub(crate) fn cancel_item(&mut self, index: usize) {
        self.items.remove(&index);
    }

    pub(crate) fn item_target(&self, index: usize) -> Option<ItemVisualState> {
        self.items.get(&index).map(Tween::target)
    }

    pub(crate) fn animate_indicator(&mut self, tween: Tween<Rect>) {
        self.indicator = Some(tween);
    }

    pub(crate) fn cancel_indicator(&mut self) {
        self.indicator = None;
    }

    pub(crate) fn indicator_target(&self) -> Option<Rect> {
        self.indicator.as_ref().map(Tween::target)
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.indicator = None;
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.items.is_empty() && self.indicator.is_none()
    }

    /// Samples every tween at `now` and drops the finished ones.
    pub(crate) fn step(&mut self, now: Instant) -> AnimationFrame {
        let mut frame = AnimationFrame::default();

        let mut finished: SmallVec<[usize; 4]> = SmallVec::new();
        for (&index, tween) in self.items.iter_mut() {
            let (state, done) = tween.sample(now);
            frame.items.push((index, state));
            if done {
                finished.push(index);
            }
        }
        for index in finished {
            self.items.remove(&index);
        }
        frame.items.sort_by_key(|(index, _)| *index);

        if let Some(tween) = self.indicator.as_mut() {
            let (rect, done) = tween.sample(now);
            frame.indicator = Some((rect, done));
            if done {
                self.indicator = None;
            }
        }

        frame
    }
}
