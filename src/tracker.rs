mod active_marker;
mod anchor;
mod dispatcher;
mod event;
mod tracking_quality;

pub use active_marker::{ActiveMarkerState, ActiveVisual};
pub use anchor::AnchorPose;
pub use dispatcher::{ChangeReport, DispatcherConfig, MarkerDispatcher};
pub use event::{ChangeBatch, MarkerId, TrackedEvent};
pub use tracking_quality::TrackingQuality;
