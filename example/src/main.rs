//! Headless walkthrough of two tab strips following one pager.
//!
//! The headline strip sizes itself to its titles and tracks the drag
//! continuously. The compact strip uses fixed-width items and animates once a
//! drag passes the halfway point. Tapping a tab in either strip selects the
//! same tab in the other.
//!
//! Run with `RUST_LOG=tabview=trace` to see every resolved scroll sample.

mod pager;
mod strip;

use std::time::{Duration, Instant};

use tracing::info;

use crate::{
    pager::Pager,
    strip::{Strip, StripEvent, compact_config, headline_config, headline_style},
};

const PAGE_COUNT: usize = 10;
const VIEWPORT_WIDTH: f32 = 390.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct App {
    pager: Pager,
    strips: Vec<Strip>,
    clock: Instant,
}

impl App {
    fn new() -> tabview::Result<Self> {
        let mut pager = Pager::new(PAGE_COUNT, VIEWPORT_WIDTH);
        let strips = vec![
            Strip::new(
                "headline",
                headline_config(),
                VIEWPORT_WIDTH,
                headline_style(),
                &mut pager,
            )?,
            Strip::new(
                "compact",
                compact_config(),
                VIEWPORT_WIDTH,
                Default::default(),
                &mut pager,
            )?,
        ];
        Ok(Self {
            pager,
            strips,
            clock: Instant::now(),
        })
    }

    /// Forwards the pager's offset to every strip.
    fn on_scroll(&mut self) {
        for strip in &mut self.strips {
            let (engine, mut host) = strip.host(&mut self.pager);
            engine.on_offset_changed(&mut host);
        }
        self.dispatch_events();
    }

    fn tap(&mut self, strip: usize, index: usize) -> tabview::Result<()> {
        info!(strip, index, "tap");
        if let Some(target) = self.strips.get_mut(strip) {
            let (engine, mut host) = target.host(&mut self.pager);
            engine.select_item(index, &mut host)?;
        }
        self.dispatch_events();
        Ok(())
    }

    /// Mirrors explicit selections into the other strips.
    fn dispatch_events(&mut self) {
        let mut selections = Vec::new();
        for strip in &mut self.strips {
            for event in strip.view.take_events() {
                match event {
                    StripEvent::Selected(index) => selections.push(index),
                    StripEvent::Settled(index) => {
                        info!(strip = strip.view.name, index, "selection settled")
                    }
                }
            }
        }

        while let Some(index) = selections.pop() {
            for strip in &mut self.strips {
                if strip.engine.selected_index() == index {
                    continue;
                }
                let (engine, mut host) = strip.host(&mut self.pager);
                if let Err(err) = engine.select_item(index, &mut host) {
                    tracing::warn!(strip = strip.view.name, %err, "could not mirror selection");
                    continue;
                }
                selections.extend(strip.view.take_events().into_iter().filter_map(
                    |event| match event {
                        StripEvent::Selected(index) => Some(index),
                        StripEvent::Settled(_) => None,
                    },
                ));
            }
        }
    }

    /// Steps the frame clock until every strip is at rest.
    fn run_frames(&mut self) {
        let mut frames = 0;
        while self
            .strips
            .iter()
            .any(|strip| strip.engine.has_pending_animation_frame())
        {
            for strip in &mut self.strips {
                let (engine, mut host) = strip.host(&mut self.pager);
                engine.tick(self.clock, &mut host);
            }
            self.clock += FRAME_INTERVAL;
            frames += 1;
        }
        info!(frames, "animations finished");
    }

    fn drag(&mut self, from: f32, to: f32, steps: usize) {
        self.pager.begin_drag();
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.pager.drag_to(from + (to - from) * t);
            self.on_scroll();
        }
        self.pager.end_drag();
        self.run_frames();
    }

    fn report(&self) {
        info!(page = ?self.pager.visible_page(), "pager");
        for strip in &self.strips {
            let selected = strip.engine.selected_index();
            let state = strip.view.item(selected);
            info!(
                strip = strip.view.name,
                selected,
                indicator = ?strip.view.indicator(),
                emphasis = strip.view.emphasis(),
                scroll_offset = strip.view.scroll_offset(),
                rendered_size = state.map(|state| state.rendered_size()),
                "strip"
            );
        }
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,tabview=debug,example=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> tabview::Result<()> {
    init_tracing();

    let mut app = App::new()?;
    app.run_frames();
    app.report();

    // Drag from page 0 across page 1 and let go on page 2.
    let page = VIEWPORT_WIDTH;
    app.drag(0.0, 2.0 * page, 24);
    app.report();

    // A short drag that returns to the same page keeps the selection.
    app.drag(2.0 * page, 2.0 * page + 40.0, 4);
    app.drag(2.0 * page + 40.0, 2.0 * page, 4);

    // Bouncing past the first page produces no updates.
    app.tap(0, 0)?;
    app.run_frames();
    app.drag(0.0, -60.0, 3);
    app.drag(-60.0, 0.0, 3);
    app.report();

    app.tap(1, 7)?;
    app.run_frames();
    app.report();

    app.tap(0, 3)?;
    app.run_frames();
    app.report();

    if let Err(err) = app.tap(0, PAGE_COUNT) {
        info!(%err, "tap rejected");
    }
    Ok(())
}
