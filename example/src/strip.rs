//! A tab strip view backed by [`StripLayout`], wired to a [`Pager`].

use tabview::{
    Color, IndicatorHost, ItemFrameProvider, ItemRenderer, ItemStyle, ItemVisualState, Rect,
    ScrollSample, ScrollSurface, StripLayout, TabDataSource, TabSyncEngine, TabViewConfig,
    TabViewDefaults, TabViewListener, WidthType,
};
use tracing::debug;

use crate::pager::Pager;

/// Approximate advance of one title glyph at the default font size.
const GLYPH_WIDTH: f32 = 9.0;

/// Selection events raised during one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripEvent {
    Selected(usize),
    Settled(usize),
}

/// Everything a strip draws.
#[derive(Debug)]
pub struct StripView {
    pub name: &'static str,
    layout: StripLayout,
    style: ItemStyle,
    items: Vec<Option<ItemVisualState>>,
    indicator: Option<(Rect, bool)>,
    emphasis: f32,
    events: Vec<StripEvent>,
}

impl StripView {
    pub fn new(name: &'static str, config: &TabViewConfig, width: f32, style: ItemStyle) -> Self {
        Self {
            name,
            layout: StripLayout::new(config, width, 44.0),
            style,
            items: Vec::new(),
            indicator: None,
            emphasis: 0.0,
            events: Vec::new(),
        }
    }

    /// Lays out one item per title, measuring self-sizing titles.
    pub fn set_titles<S: AsRef<str>>(&mut self, titles: &[S]) {
        self.layout.set_item_count(titles.len());
        self.items = vec![None; titles.len()];
        for (index, title) in titles.iter().enumerate() {
            let width = title.as_ref().chars().count() as f32 * GLYPH_WIDTH
                + 2.0 * TabViewDefaults::TITLE_MARGIN;
            self.layout.set_measured_width(index, width);
        }
    }

    pub fn take_events(&mut self) -> Vec<StripEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn indicator(&self) -> Option<(Rect, bool)> {
        self.indicator
    }

    pub fn emphasis(&self) -> f32 {
        self.emphasis
    }

    pub fn scroll_offset(&self) -> f32 {
        self.layout.scroll_offset()
    }

    pub fn item(&self, index: usize) -> Option<ItemVisualState> {
        self.items.get(index).copied().flatten()
    }
}

/// Borrowed pairing of a strip and the pager it follows, handed to the
/// engine for one call.
pub struct StripHost<'a> {
    pub pager: &'a mut Pager,
    pub view: &'a mut StripView,
}

impl ScrollSurface for StripHost<'_> {
    fn scroll_sample(&self) -> ScrollSample {
        self.pager.sample()
    }

    fn is_user_manipulating(&self) -> bool {
        self.pager.is_dragging()
    }

    fn set_offset_x(&mut self, offset_x: f32, _animated: bool) {
        self.pager.set_offset_x(offset_x);
    }
}

impl ItemFrameProvider for StripHost<'_> {
    fn frame_for_item(&self, index: usize) -> Option<Rect> {
        self.view.layout.frame_for_item(index)
    }

    fn focus_item(&mut self, index: usize) {
        self.view.layout.focus_item(index);
    }
}

impl ItemRenderer for StripHost<'_> {
    fn render(&mut self, index: usize, state: &ItemVisualState) {
        if let Some(slot) = self.view.items.get_mut(index) {
            *slot = Some(*state);
        }
    }
}

impl IndicatorHost for StripHost<'_> {
    fn set_geometry(&mut self, rect: Rect, animated: bool) {
        self.view.indicator = Some((rect, animated));
    }

    fn set_emphasis_progress(&mut self, progress: f32) {
        self.view.emphasis = progress;
    }
}

impl TabViewListener for StripHost<'_> {
    fn on_item_selected(&mut self, index: usize) {
        self.view.events.push(StripEvent::Selected(index));
    }

    fn on_selection_settled(&mut self, index: usize) {
        debug!(strip = self.view.name, index, "strip settled");
        self.view.events.push(StripEvent::Settled(index));
    }
}

impl TabDataSource for StripHost<'_> {
    fn item_style(&self, _index: usize) -> ItemStyle {
        self.view.style
    }
}

/// A strip together with the engine driving it.
#[derive(Debug)]
pub struct Strip {
    pub engine: TabSyncEngine,
    pub view: StripView,
}

impl Strip {
    pub fn new(
        name: &'static str,
        config: TabViewConfig,
        width: f32,
        style: ItemStyle,
        pager: &mut Pager,
    ) -> tabview::Result<Self> {
        let titles: Vec<String> = (0..pager.page_count())
            .map(|index| {
                if index % 3 == 0 {
                    format!("Tab {index}")
                } else {
                    format!("Section {index}")
                }
            })
            .collect();
        let mut view = StripView::new(name, &config, width, style);
        view.set_titles(&titles);

        let mut engine = TabSyncEngine::new(config, titles.len())?;
        engine.reload(titles.len(), &mut StripHost { pager, view: &mut view });
        Ok(Self { engine, view })
    }

    pub fn host<'a>(&'a mut self, pager: &'a mut Pager) -> (&'a mut TabSyncEngine, StripHost<'a>) {
        (
            &mut self.engine,
            StripHost {
                pager,
                view: &mut self.view,
            },
        )
    }
}

/// Style of the self-sizing strip: bold titles that grow when selected.
pub fn headline_style() -> ItemStyle {
    ItemStyle::default()
        .normal_color(Color::gray(0.4, 1.0))
        .selected_color(Color::from_rgb_u8(0x21, 0x96, 0xf3))
        .normal_font_size(TabViewDefaults::FONT_SIZE)
        .selected_font_size(20.0)
        .selected_bold(true)
}

pub fn headline_config() -> TabViewConfig {
    TabViewConfig::default()
        .width_type(WidthType::SelfSizing)
        .indicator_gesture_driven(true)
        .item_gesture_driven(true)
}

pub fn compact_config() -> TabViewConfig {
    TabViewConfig::default().width_type(WidthType::Fixed(80.0))
}
