use std::time::{Duration, Instant};

use crate::{
    Color, ConfigError, IndicatorHost, ItemFrameProvider, ItemRenderer, ItemStyle,
    ItemVisualState, Rect, ScrollSample, ScrollSurface, SyncPhase, TabDataSource, TabSyncEngine,
    TabViewConfig, TabViewError, TabViewListener, WidthType, indicator::lerp_frame,
};

const ITEM_WIDTHS: [f32; 5] = [60.0, 80.0, 100.0, 60.0, 80.0];
const PAGE: f32 = 100.0;

/// Host double recording everything the engine tells it.
#[derive(Default)]
struct RecordingHost {
    sample: ScrollSample,
    manipulating: bool,
    frames: Vec<Rect>,
    style: ItemStyle,
    renders: Vec<(usize, ItemVisualState)>,
    geometry: Vec<(Rect, bool)>,
    emphasis: Vec<f32>,
    focused: Vec<usize>,
    offsets: Vec<(f32, bool)>,
    selected: Vec<usize>,
    settled: Vec<usize>,
}

impl RecordingHost {
    fn new(item_count: usize) -> Self {
        let mut left = 0.0;
        let frames = ITEM_WIDTHS
            .iter()
            .cycle()
            .take(item_count)
            .map(|&width| {
                let frame = Rect::new(left, 0.0, width, 40.0);
                left += width;
                frame
            })
            .collect();
        Self {
            sample: ScrollSample::new(0.0, PAGE, PAGE * item_count as f32),
            frames,
            style: ItemStyle::default()
                .normal_font_size(17.0)
                .selected_font_size(20.0)
                .selected_bold(true),
            ..Self::default()
        }
    }

    fn drag_to(&mut self, engine: &mut TabSyncEngine, offset_x: f32) {
        self.manipulating = true;
        self.sample.offset_x = offset_x;
        engine.on_offset_changed(self);
    }

    fn last_render(&self, index: usize) -> Option<ItemVisualState> {
        self.renders
            .iter()
            .rev()
            .find(|(rendered, _)| *rendered == index)
            .map(|(_, state)| *state)
    }

    fn event_count(&self) -> usize {
        self.renders.len()
            + self.geometry.len()
            + self.emphasis.len()
            + self.focused.len()
            + self.offsets.len()
            + self.selected.len()
            + self.settled.len()
    }
}

impl ScrollSurface for RecordingHost {
    fn scroll_sample(&self) -> ScrollSample {
        self.sample
    }

    fn is_user_manipulating(&self) -> bool {
        self.manipulating
    }

    fn set_offset_x(&mut self, offset_x: f32, animated: bool) {
        self.sample.offset_x = offset_x;
        self.offsets.push((offset_x, animated));
    }
}

impl ItemFrameProvider for RecordingHost {
    fn frame_for_item(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    fn focus_item(&mut self, index: usize) {
        self.focused.push(index);
    }
}

impl ItemRenderer for RecordingHost {
    fn render(&mut self, index: usize, state: &ItemVisualState) {
        self.renders.push((index, *state));
    }
}

impl IndicatorHost for RecordingHost {
    fn set_geometry(&mut self, rect: Rect, animated: bool) {
        self.geometry.push((rect, animated));
    }

    fn set_emphasis_progress(&mut self, progress: f32) {
        self.emphasis.push(progress);
    }
}

impl TabViewListener for RecordingHost {
    fn on_item_selected(&mut self, index: usize) {
        self.selected.push(index);
    }

    fn on_selection_settled(&mut self, index: usize) {
        self.settled.push(index);
    }
}

impl TabDataSource for RecordingHost {
    fn item_style(&self, _index: usize) -> ItemStyle {
        self.style
    }
}

fn gesture_config() -> TabViewConfig {
    TabViewConfig::default()
        .indicator_gesture_driven(true)
        .item_gesture_driven(true)
}

fn setup(config: TabViewConfig) -> (TabSyncEngine, RecordingHost) {
    let mut host = RecordingHost::new(5);
    let mut engine = TabSyncEngine::new(config, 5).unwrap();
    engine.reload(5, &mut host);
    (engine, host)
}

fn settle_animations(engine: &mut TabSyncEngine, host: &mut RecordingHost) {
    let t0 = Instant::now();
    engine.tick(t0, host);
    engine.tick(t0 + Duration::from_secs(1), host);
    assert!(!engine.has_pending_animation_frame());
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = TabViewConfig::default().width_type(WidthType::Fixed(0.0));
    assert_eq!(
        TabSyncEngine::new(config, 3).unwrap_err(),
        TabViewError::InvalidConfig(ConfigError::FixedWidth(0.0))
    );
}

#[test]
fn test_reload_renders_resting_items() {
    let mut host = RecordingHost::new(5);
    host.sample.offset_x = 200.0;
    let mut engine = TabSyncEngine::new(TabViewConfig::default(), 5).unwrap();
    engine.reload(5, &mut host);

    assert_eq!(engine.selected_index(), 2);
    assert_eq!(host.renders.len(), 5);
    for index in 0..5 {
        let expected = host.style.for_selection(index == 2);
        assert_eq!(host.last_render(index), Some(expected));
    }
    assert_eq!(host.geometry, vec![(host.frames[2], false)]);
    assert_eq!(host.emphasis, vec![0.0]);
    assert_eq!(host.focused, vec![2]);
    assert!(!engine.has_pending_animation_frame());
}

#[test]
fn test_reload_keeps_selection_when_sample_is_unusable() {
    let (mut engine, mut host) = setup(TabViewConfig::default());
    host.manipulating = false;
    engine.select_item(4, &mut host).unwrap();

    host.sample = ScrollSample::new(0.0, 0.0, 0.0);
    engine.reload(3, &mut host);
    assert_eq!(engine.selected_index(), 2);
    assert_eq!(engine.item_count(), 3);
}

#[test]
fn test_reload_without_items() {
    let (mut engine, mut host) = setup(TabViewConfig::default());
    let before = host.event_count();
    engine.reload(0, &mut host);
    assert_eq!(engine.selected_index(), 0);
    assert_eq!(host.event_count(), before);
    assert!(!engine.has_pending_animation_frame());
    assert!(engine.select_item(0, &mut host).is_err());
}

#[test]
fn test_reload_defers_indicator_until_frames_exist() {
    let mut host = RecordingHost::new(5);
    let frames = std::mem::take(&mut host.frames);
    let mut engine = TabSyncEngine::new(TabViewConfig::default(), 5).unwrap();
    engine.reload(5, &mut host);
    assert!(host.geometry.is_empty());
    assert!(engine.has_pending_animation_frame());

    host.frames = frames;
    engine.tick(Instant::now(), &mut host);
    assert_eq!(host.geometry, vec![(host.frames[0], false)]);
    assert!(!engine.has_pending_animation_frame());
}

#[test]
fn test_gesture_driven_midpoint() {
    let (mut engine, mut host) = setup(gesture_config());
    host.drag_to(&mut engine, 150.0);

    let halfway = host.style.for_progress(0.5);
    assert_eq!(host.last_render(1), Some(halfway));
    assert_eq!(host.last_render(2), Some(halfway));
    assert_eq!(host.emphasis.last(), Some(&1.0));
    assert_eq!(
        host.geometry.last(),
        Some(&(Rect::new(100.0, 0.0, 90.0, 40.0), false))
    );
    assert!(matches!(
        engine.phase(),
        SyncPhase::Transitioning(position) if position.low == 1 && position.high == 2
    ));
    assert!(!engine.has_pending_animation_frame());
}

#[test]
fn test_gesture_driven_indicator_tracks_fraction() {
    let (mut engine, mut host) = setup(gesture_config());
    host.drag_to(&mut engine, 25.0);
    assert_eq!(
        host.geometry.last(),
        Some(&(lerp_frame(host.frames[0], host.frames[1], 0.25), false))
    );
    assert_eq!(host.emphasis.last(), Some(&0.5));

    let low = host.last_render(0).unwrap();
    let high = host.last_render(1).unwrap();
    assert_eq!(low, host.style.for_progress(0.75));
    assert_eq!(high, host.style.for_progress(0.25));
    assert!(low.rendered_size() > high.rendered_size());
}

#[test]
fn test_ignores_samples_without_user_manipulation() {
    let (mut engine, mut host) = setup(gesture_config());
    let before = host.event_count();
    host.sample.offset_x = 150.0;
    engine.on_offset_changed(&mut host);
    assert_eq!(host.event_count(), before);
    assert_eq!(engine.phase(), SyncPhase::Idle);
}

#[test]
fn test_ignores_out_of_range_samples() {
    let (mut engine, mut host) = setup(gesture_config());
    let before = host.event_count();
    host.drag_to(&mut engine, -20.0);
    host.drag_to(&mut engine, 450.0);
    assert_eq!(host.event_count(), before);
    assert_eq!(engine.selected_index(), 0);
    assert_eq!(engine.phase(), SyncPhase::Idle);
}

#[test]
fn test_aligned_sample_settles_selection() {
    let (mut engine, mut host) = setup(gesture_config());
    host.drag_to(&mut engine, 50.0);
    host.drag_to(&mut engine, 100.0);

    assert_eq!(engine.selected_index(), 1);
    assert_eq!(engine.phase(), SyncPhase::Idle);
    assert_eq!(host.settled, vec![1]);
    assert_eq!(host.last_render(0), Some(host.style.for_selection(false)));
    assert_eq!(host.last_render(1), Some(host.style.for_selection(true)));
    assert_eq!(host.geometry.last(), Some(&(host.frames[1], false)));
    assert_eq!(host.emphasis.last(), Some(&0.0));

    let before = host.event_count();
    host.drag_to(&mut engine, 100.0);
    assert_eq!(host.event_count(), before);
}

#[test]
fn test_skipping_past_an_item_settles_it() {
    let (mut engine, mut host) = setup(gesture_config());
    host.drag_to(&mut engine, 50.0);
    host.drag_to(&mut engine, 125.0);

    assert_eq!(engine.selected_index(), 1);
    assert_eq!(host.settled, vec![1]);
    assert_eq!(host.last_render(0), Some(host.style.for_selection(false)));
    assert_eq!(host.last_render(1), Some(host.style.for_progress(0.75)));
}

#[test]
fn test_select_item_supersedes_transition() {
    let (mut engine, mut host) = setup(gesture_config());
    host.drag_to(&mut engine, 50.0);
    host.drag_to(&mut engine, 120.0);
    host.drag_to(&mut engine, 150.0);
    host.manipulating = false;

    engine.select_item(3, &mut host).unwrap();
    assert_eq!(engine.selected_index(), 3);
    assert_eq!(engine.phase(), SyncPhase::Idle);
    assert_eq!(host.offsets, vec![(300.0, false)]);
    assert_eq!(host.selected, vec![3]);
    assert_eq!(host.emphasis.last(), Some(&0.0));
    assert!(engine.has_pending_animation_frame());

    settle_animations(&mut engine, &mut host);
    assert_eq!(host.last_render(1), Some(host.style.for_selection(false)));
    assert_eq!(host.last_render(2), Some(host.style.for_selection(false)));
    assert_eq!(host.last_render(3), Some(host.style.for_selection(true)));
    assert_eq!(host.geometry.last(), Some(&(host.frames[3], false)));
    assert_eq!(host.focused.last(), Some(&3));
}

#[test]
fn test_select_item_rejects_invalid_index() {
    let (mut engine, mut host) = setup(gesture_config());
    host.drag_to(&mut engine, 150.0);
    let before = host.event_count();
    let phase = engine.phase();

    assert_eq!(
        engine.select_item(5, &mut host),
        Err(TabViewError::InvalidIndex { index: 5, count: 5 })
    );
    assert_eq!(host.event_count(), before);
    assert_eq!(engine.selected_index(), 0);
    assert_eq!(engine.phase(), phase);
}

#[test]
fn test_superseded_animation_never_lands() {
    let (mut engine, mut host) = setup(TabViewConfig::default());
    let t0 = Instant::now();
    engine.select_item(3, &mut host).unwrap();
    engine.tick(t0, &mut host);
    engine.tick(t0 + Duration::from_millis(100), &mut host);

    engine.select_item(1, &mut host).unwrap();
    let renders_before = host.renders.len();
    engine.tick(t0 + Duration::from_millis(120), &mut host);
    engine.tick(t0 + Duration::from_secs(1), &mut host);
    assert!(!engine.has_pending_animation_frame());

    let selected_three = host.style.for_selection(true);
    assert!(
        host.renders[renders_before..]
            .iter()
            .all(|(index, state)| *index != 3 || *state != selected_three)
    );
    assert_eq!(host.last_render(3), Some(host.style.for_selection(false)));
    assert_eq!(host.last_render(1), Some(host.style.for_selection(true)));
    assert_eq!(host.geometry.last(), Some(&(host.frames[1], false)));
}

#[test]
fn test_animated_updates_snap_at_half() {
    let (mut engine, mut host) = setup(TabViewConfig::default());
    host.drag_to(&mut engine, 30.0);
    assert!(!engine.has_pending_animation_frame());
    assert_eq!(host.focused, vec![0, 0]);

    host.drag_to(&mut engine, 50.0);
    assert!(engine.has_pending_animation_frame());

    let t0 = Instant::now();
    engine.tick(t0, &mut host);
    engine.tick(t0 + Duration::from_millis(100), &mut host);
    host.drag_to(&mut engine, 80.0);
    engine.tick(t0 + Duration::from_millis(250), &mut host);

    assert!(!engine.has_pending_animation_frame());
    assert_eq!(host.geometry.last(), Some(&(host.frames[1], false)));
    assert_eq!(host.last_render(0), Some(host.style.for_selection(false)));
    assert_eq!(host.last_render(1), Some(host.style.for_selection(true)));
    assert_eq!(host.focused, vec![0, 0, 0, 1]);
    assert!(host.geometry[1..].iter().rev().skip(1).all(|(_, animated)| *animated));
}

#[test]
fn test_zero_duration_applies_immediately() {
    let (mut engine, mut host) = setup(TabViewConfig::default().animation_duration_ms(0));
    engine.select_item(2, &mut host).unwrap();
    assert!(!engine.has_pending_animation_frame());
    assert_eq!(host.last_render(0), Some(host.style.for_selection(false)));
    assert_eq!(host.last_render(2), Some(host.style.for_selection(true)));
    assert_eq!(host.geometry.last(), Some(&(host.frames[2], false)));
}

#[test]
fn test_larger_selected_font_renders_scaled_down() {
    let (engine, host) = setup(TabViewConfig::default());
    let selected = host.last_render(0).unwrap();
    let normal = host.last_render(1).unwrap();
    assert_eq!((selected.font_size, selected.scale), (20.0, 1.0));
    assert_eq!((normal.font_size, normal.scale), (20.0, 0.85));
    assert_eq!(selected.color, Color::RED);
    assert_eq!(normal.color, Color::BLACK);
    assert_eq!(engine.resting_state(1, &host), Some(normal));
    assert_eq!(engine.resting_state(5, &host), None);
}

#[test]
fn test_set_config_validates() {
    let (mut engine, _) = setup(TabViewConfig::default());
    assert!(
        engine
            .set_config(TabViewConfig::default().self_sizing_estimate(-1.0))
            .is_err()
    );
    assert!(engine.set_config(gesture_config()).is_ok());
    assert!(engine.state().gesture_driven.items);
    assert!(engine.state().gesture_driven.indicator);
}

#[test]
fn test_strip_recenters_on_every_drag_sample_and_tap() {
    let (mut engine, mut host) = setup(gesture_config());
    host.focused.clear();

    host.drag_to(&mut engine, 20.0);
    host.drag_to(&mut engine, 30.0);
    assert_eq!(host.focused, vec![0, 0]);

    host.manipulating = false;
    engine.select_item(0, &mut host).unwrap();
    assert_eq!(host.focused, vec![0, 0, 0]);
    engine.select_item(0, &mut host).unwrap();
    assert_eq!(host.focused, vec![0, 0, 0, 0]);
}

#[test]
fn test_gesture_sample_skips_missing_frame() {
    let (mut engine, mut host) = setup(gesture_config());
    host.frames.truncate(1);
    let geometry_before = host.geometry.len();

    host.drag_to(&mut engine, 50.0);
    assert_eq!(host.geometry.len(), geometry_before);
    assert_eq!(host.emphasis.last(), Some(&1.0));
    assert_eq!(host.last_render(1), Some(host.style.for_progress(0.5)));
    assert!(!engine.has_pending_animation_frame());
}

#[test]
fn test_select_item_defers_indicator_until_frame_exists() {
    let (mut engine, mut host) = setup(TabViewConfig::default());
    let frames = std::mem::take(&mut host.frames);
    let geometry_before = host.geometry.len();

    engine.select_item(3, &mut host).unwrap();
    assert_eq!(host.geometry.len(), geometry_before);
    assert!(engine.has_pending_animation_frame());

    host.frames = frames;
    engine.tick(Instant::now(), &mut host);
    assert_eq!(host.geometry.last(), Some(&(host.frames[3], false)));

    settle_animations(&mut engine, &mut host);
    assert_eq!(host.geometry.last(), Some(&(host.frames[3], false)));
    assert_eq!(host.last_render(3), Some(host.style.for_selection(true)));
}
