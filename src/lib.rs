//! Marker-driven AR content control.
//!
//! Reduces batched image-tracking notifications to a single active marker,
//! drives the visual anchored to it through a [`Renderer`], and keeps an
//! information overlay in step through an [`InfoPresenter`].

pub mod error;
pub mod integration;
pub mod presenter;
pub mod spin;
pub mod tracker;

pub use error::{ContentError, FeedError, WiringError};
pub use integration::{
    ChangeFeed, DispatcherBuilder, Renderer, Subscription, TrackedEventBuilder, TrackerPipeline,
    TrackingSource, UiShell, bounded_change_feed, change_feed,
};
pub use presenter::{AffordanceState, ContentConfig, ContentTable, InfoPresenter, MarkerContent};
pub use spin::{SpinConfig, Spinner};
pub use tracker::{
    ActiveMarkerState, ActiveVisual, AnchorPose, ChangeBatch, ChangeReport, DispatcherConfig,
    MarkerDispatcher, MarkerId, TrackedEvent, TrackingQuality,
};
