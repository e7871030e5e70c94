//! Marker anchor pose.

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

/// Tracked transform of a marker in world space.
///
/// Wraps a rigid transform (rotation + translation) so collaborators can
/// parent a visual to the marker without knowing how the pose was estimated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPose {
    /// World-from-marker transform
    pub isometry: Isometry3<f32>,
}

impl Default for AnchorPose {
    fn default() -> Self {
        Self::identity()
    }
}

impl AnchorPose {
    /// Pose at the world origin with no rotation.
    #[inline]
    pub fn identity() -> Self {
        Self {
            isometry: Isometry3::identity(),
        }
    }

    /// Create a pose from a position and an orientation.
    #[inline]
    pub fn new(position: Vector3<f32>, rotation: UnitQuaternion<f32>) -> Self {
        Self {
            isometry: Isometry3::from_parts(Translation3::from(position), rotation),
        }
    }

    /// Create a pose from a position only (identity rotation).
    #[inline]
    pub fn from_position(x: f32, y: f32, z: f32) -> Self {
        Self::new(Vector3::new(x, y, z), UnitQuaternion::identity())
    }

    /// Create a pose from an array layout: (x, y, z, qx, qy, qz, qw).
    #[inline]
    pub fn from_array(values: [f32; 7]) -> Self {
        let [x, y, z, qx, qy, qz, qw] = values;
        let rotation =
            UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(qw, qx, qy, qz));
        Self::new(Vector3::new(x, y, z), rotation)
    }

    /// Convert to array layout: (x, y, z, qx, qy, qz, qw).
    #[inline]
    pub fn to_array(&self) -> [f32; 7] {
        let t = self.isometry.translation.vector;
        let q = self.isometry.rotation.quaternion();
        [t.x, t.y, t.z, q.i, q.j, q.k, q.w]
    }

    #[inline]
    pub fn position(&self) -> Vector3<f32> {
        self.isometry.translation.vector
    }

    #[inline]
    pub fn rotation(&self) -> UnitQuaternion<f32> {
        self.isometry.rotation
    }

    /// Map a point expressed in the marker's frame into world space.
    #[inline]
    pub fn transform_point(&self, local: &Point3<f32>) -> Point3<f32> {
        self.isometry.transform_point(local)
    }
}
