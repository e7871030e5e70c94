//! Constant angular-velocity rotation for showcase models.

use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::tracker::AnchorPose;

/// Configuration for the Spinner.
#[derive(Debug, Clone)]
pub struct SpinConfig {
    /// Rotation speed in degrees per second
    pub speed_deg_per_sec: f32,
    /// Local axis to spin around
    pub axis: Unit<Vector3<f32>>,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            speed_deg_per_sec: 15.0,
            axis: Vector3::y_axis(),
        }
    }
}

/// Rotates a pose about a local axis at a fixed rate.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    config: SpinConfig,
}

impl Spinner {
    pub fn new(config: SpinConfig) -> Self {
        Self { config }
    }

    /// Rotation accumulated over `dt` seconds.
    pub fn delta(&self, dt: f32) -> UnitQuaternion<f32> {
        let angle = (self.config.speed_deg_per_sec * dt).to_radians();
        UnitQuaternion::from_axis_angle(&self.config.axis, angle)
    }

    /// Advance `pose` by one frame of `dt` seconds. The position is kept.
    pub fn advance(&self, pose: &AnchorPose, dt: f32) -> AnchorPose {
        AnchorPose::new(pose.position(), pose.rotation() * self.delta(dt))
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }
}
