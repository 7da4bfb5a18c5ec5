//! Converts a paged scroll offset into the pair of items it sits between.
//!
//! Every page of the content view is one viewport wide, so the offset divided
//! by the viewport width is a fractional item index. `1.5` means halfway
//! between item 1 and item 2.

/// A read of the coordinated scroll surface at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    /// Horizontal content offset.
    pub offset_x: f32,
    /// Width of the visible viewport (one page).
    pub viewport_width: f32,
    /// Total scrollable content width.
    pub content_width: f32,
}

impl ScrollSample {
    /// Creates a new sample.
    pub const fn new(offset_x: f32, viewport_width: f32, content_width: f32) -> Self {
        Self {
            offset_x,
            viewport_width,
            content_width,
        }
    }

    /// Offset that shows page `index`.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        self.viewport_width * index as f32
    }
}

/// Where a sample sits relative to the items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPosition {
    /// Item at or left of the offset.
    pub low: usize,
    /// Item at or right of the offset.
    pub high: usize,
    /// Blend weight toward `high`, in `[0, 1)`. Zero when aligned.
    pub fraction: f32,
}

impl ResolvedPosition {
    /// Returns `true` when the offset rests exactly on one item.
    pub fn is_aligned(&self) -> bool {
        self.low == self.high
    }

    /// The item that dominates the blend. Ties go to `low`.
    pub fn nearest(&self) -> usize {
        if self.fraction > 0.5 { self.high } else { self.low }
    }

    /// Triangular 0→1→0 wave across the transition.
    pub fn emphasis(&self) -> f32 {
        crate::indicator::emphasis_progress(self.fraction)
    }
}

/// Why a sample produced no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The sample lies outside the content bounds (overscroll, bounce,
    /// degenerate viewport, or more pages than items).
    OutOfRange,
}

/// Resolves a scroll sample against `item_count` items.
///
/// Pure and idempotent; callers skip the update on `Err`.
///
/// ```
/// use tabview::offset::{ScrollSample, resolve};
///
/// let position = resolve(&ScrollSample::new(150.0, 100.0, 500.0), 5).unwrap();
/// assert_eq!((position.low, position.high, position.fraction), (1, 2, 0.5));
/// ```
pub fn resolve(sample: &ScrollSample, item_count: usize) -> Result<ResolvedPosition, ResolveError> {
    let quotient = sample.offset_x / sample.viewport_width;
    let max_quotient = sample.content_width / sample.viewport_width - 1.0;
    if !quotient.is_finite() || !max_quotient.is_finite() {
        return Err(ResolveError::OutOfRange);
    }
    if quotient < 0.0 || quotient > max_quotient {
        return Err(ResolveError::OutOfRange);
    }

    let low = quotient.floor() as usize;
    let high = quotient.ceil() as usize;
    if high >= item_count {
        return Err(ResolveError::OutOfRange);
    }

    let fraction = if low == high { 0.0 } else { quotient % 1.0 };
    Ok(ResolvedPosition {
        low,
        high,
        fraction,
    })
}
