//! Error types returned by the engine.

use thiserror::Error;

/// Errors surfaced to the host.
///
/// Out-of-range scroll samples and unrealized item frames are not errors;
/// the engine skips them silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabViewError {
    /// An item index outside `[0, count)` was requested.
    #[error("item index {index} is out of range for {count} items")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Number of items at the time of the call.
        count: usize,
    },
    /// The configuration was rejected.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// A single configuration violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `WidthType::Fixed` carries a width that is not a positive finite
    /// number.
    #[error("fixed item width must be positive and finite, got {0}")]
    FixedWidth(f32),
    /// The self-sizing estimate is not a positive finite number.
    #[error("self-sizing width estimate must be positive and finite, got {0}")]
    SelfSizingEstimate(f32),
}

/// Result alias for engine operations.
pub type Result<T, E = TabViewError> = std::result::Result<T, E>;
