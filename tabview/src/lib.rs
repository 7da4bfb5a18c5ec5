//! tabview keeps a tab strip in step with a horizontally paged content view.
//!
//! # Overview
//!
//! Every page of the content view corresponds to one tab item. While the user
//! drags the content, the engine turns each scroll offset into the pair of
//! items it lies between and a blend fraction, then drives:
//!
//! - item appearance (color, weight, scale) through an [`ItemRenderer`],
//! - the selection indicator through an [`IndicatorHost`],
//! - strip scrolling through an [`ItemFrameProvider`].
//!
//! Tapping a tab goes the other way: [`TabSyncEngine::select_item`] moves the
//! content view to the tapped page and animates the strip.
//!
//! The engine owns no views. A host implements the traits in [`host`] on top
//! of whatever toolkit it uses and calls into the engine from its scroll,
//! tap and frame callbacks.
//!
//! # Example
//!
//! ```
//! use tabview::{TabSyncEngine, TabViewConfig};
//!
//! let engine = TabSyncEngine::new(TabViewConfig::default().item_gesture_driven(true), 5)
//!     .unwrap();
//! assert_eq!(engine.selected_index(), 0);
//! assert!(engine.has_pending_animation_frame());
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `debug` for selection, reload and
//! configuration changes, `trace` per scroll sample and skipped frame, `warn`
//! for rejected selections. Install a subscriber to see them.
#![deny(missing_docs, clippy::unwrap_used)]

mod animation;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod host;
pub mod indicator;
pub mod interpolate;
pub mod item_state;
pub mod layout;
pub mod offset;

#[cfg(test)]
mod test;

pub use crate::{
    color::Color,
    config::{TabViewConfig, TabViewDefaults, WidthType},
    engine::{GestureDriven, SyncPhase, SyncState, TabSyncEngine},
    error::{ConfigError, Result, TabViewError},
    geometry::Rect,
    host::{
        IndicatorHost, ItemFrameProvider, ItemRenderer, ScrollSurface, TabDataSource, TabHost,
        TabViewListener,
    },
    interpolate::{Easing, Lerp},
    item_state::{ItemStyle, ItemVisualState},
    layout::StripLayout,
    offset::{ResolveError, ResolvedPosition, ScrollSample},
};
