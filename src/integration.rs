//! Integration module for connecting a tracking source, a renderer and a UI
//! shell to the marker dispatcher.
//!
//! This module provides the collaborator traits, builders for wiring them up,
//! and a channel-backed pipeline that feeds change batches to the dispatcher.

mod builder;
mod pipeline;
mod renderer;

pub use builder::{DispatcherBuilder, TrackedEventBuilder};
pub use pipeline::{
    ChangeFeed, Subscription, TrackerPipeline, TrackingSource, bounded_change_feed, change_feed,
};
pub use renderer::{Renderer, UiShell};
