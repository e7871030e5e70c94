//! Builders for tracked events and for wiring a dispatcher.

use nalgebra::{UnitQuaternion, Vector3};

use crate::error::WiringError;
use crate::presenter::InfoPresenter;
use crate::tracker::{AnchorPose, DispatcherConfig, MarkerDispatcher, TrackedEvent, TrackingQuality};

use super::{Renderer, UiShell};

/// Builder for creating `TrackedEvent` objects from raw tracking output.
#[derive(Debug, Clone, Default)]
pub struct TrackedEventBuilder {
    marker: String,
    quality: TrackingQuality,
    position: [f32; 3],
    rotation: Option<UnitQuaternion<f32>>,
}

impl TrackedEventBuilder {
    /// Create a new event builder.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            ..Self::default()
        }
    }

    /// Set the tracking quality.
    pub fn quality(mut self, quality: TrackingQuality) -> Self {
        self.quality = quality;
        self
    }

    /// Shorthand for `quality(TrackingQuality::Tracking)`.
    pub fn tracking(self) -> Self {
        self.quality(TrackingQuality::Tracking)
    }

    /// Set the anchor position in world space.
    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = [x, y, z];
        self
    }

    /// Set the anchor orientation as a unit quaternion (x, y, z, w).
    pub fn orientation(mut self, qx: f32, qy: f32, qz: f32, qw: f32) -> Self {
        self.rotation = Some(UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(
            qw, qx, qy, qz,
        )));
        self
    }

    /// Set the anchor orientation from roll, pitch and yaw in radians.
    pub fn euler(mut self, roll: f32, pitch: f32, yaw: f32) -> Self {
        self.rotation = Some(UnitQuaternion::from_euler_angles(roll, pitch, yaw));
        self
    }

    /// Build the final `TrackedEvent`.
    pub fn build(self) -> TrackedEvent {
        let [x, y, z] = self.position;
        let anchor = AnchorPose::new(
            Vector3::new(x, y, z),
            self.rotation.unwrap_or_else(UnitQuaternion::identity),
        );
        TrackedEvent::new(self.marker, self.quality).with_anchor(anchor)
    }
}

/// Wires a [`MarkerDispatcher`] to its collaborators and checks the wiring.
pub struct DispatcherBuilder<R: Renderer, U: UiShell> {
    renderer: Option<R>,
    presenter: Option<InfoPresenter<U>>,
    config: DispatcherConfig,
}

impl<R: Renderer, U: UiShell> Default for DispatcherBuilder<R, U> {
    fn default() -> Self {
        Self {
            renderer: None,
            presenter: None,
            config: DispatcherConfig::default(),
        }
    }
}

impl<R: Renderer, U: UiShell> DispatcherBuilder<R, U> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn presenter(mut self, presenter: InfoPresenter<U>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn config(mut self, config: DispatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the dispatcher.
    ///
    /// A missing renderer is an error. A missing presenter is reported and
    /// the dispatcher runs without content or affordance updates.
    pub fn build(self) -> Result<MarkerDispatcher<R, U>, WiringError> {
        let renderer = self.renderer.ok_or(WiringError::MissingRenderer)?;
        if self.presenter.is_none() {
            log::error!("{}; info content will not be shown", WiringError::MissingPresenter);
        }
        Ok(MarkerDispatcher::new(renderer, self.presenter, self.config))
    }
}
