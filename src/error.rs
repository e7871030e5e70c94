//! Error types.

use thiserror::Error;

/// Faults in wiring the dispatcher to its collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WiringError {
    /// No renderer was supplied; the dispatcher cannot manage visuals without one.
    #[error("no renderer wired to the marker dispatcher")]
    MissingRenderer,
    /// No info presenter was supplied; content and affordance updates are skipped.
    #[error("no info presenter wired to the marker dispatcher")]
    MissingPresenter,
}

/// Failures while loading marker content configuration.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse marker content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures when pushing tracking changes into a feed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FeedError {
    /// The subscription on the other end has been released.
    #[error("tracking feed subscription has been released")]
    Disconnected,
    /// A bounded feed is at capacity because batches are not being pumped.
    #[error("tracking feed is full")]
    Full,
}
