use std::fmt;

/// Confidence level of a marker's current pose estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingQuality {
    /// Marker is actively seen and its pose is reliable
    Tracking,
    /// Pose is known but degraded (motion blur, partial occlusion)
    Limited,
    /// Marker is not being tracked
    #[default]
    None,
}

impl TrackingQuality {
    pub fn is_tracking(self) -> bool {
        self == TrackingQuality::Tracking
    }
}

impl fmt::Display for TrackingQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackingQuality::Tracking => "Tracking",
            TrackingQuality::Limited => "Limited",
            TrackingQuality::None => "None",
        };
        f.write_str(name)
    }
}
