//! Tracking change notifications delivered by the tracking source.

use std::borrow::Borrow;
use std::fmt;

use crate::tracker::anchor::AnchorPose;
use crate::tracker::tracking_quality::TrackingQuality;

/// Name of a registered reference image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarkerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MarkerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for MarkerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single marker observation inside a change batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEvent {
    /// Which reference image this refers to
    pub marker_id: MarkerId,
    /// Pose estimate quality at the time of the change
    pub quality: TrackingQuality,
    /// Tracked transform the visual is anchored to
    pub anchor: AnchorPose,
}

impl TrackedEvent {
    pub fn new(marker_id: impl Into<MarkerId>, quality: TrackingQuality) -> Self {
        Self {
            marker_id: marker_id.into(),
            quality,
            anchor: AnchorPose::identity(),
        }
    }

    pub fn with_anchor(mut self, anchor: AnchorPose) -> Self {
        self.anchor = anchor;
        self
    }
}

/// One frame's worth of tracking changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeBatch {
    /// Markers seen for the first time
    pub added: Vec<TrackedEvent>,
    /// Markers already known whose state changed
    pub updated: Vec<TrackedEvent>,
    /// Markers no longer tracked at all
    pub removed: Vec<TrackedEvent>,
}

impl ChangeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn added(mut self, event: TrackedEvent) -> Self {
        self.added.push(event);
        self
    }

    pub fn updated(mut self, event: TrackedEvent) -> Self {
        self.updated.push(event);
        self
    }

    pub fn removed(mut self, event: TrackedEvent) -> Self {
        self.removed.push(event);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.updated.len() + self.removed.len()
    }
}
