//! State of the single marker currently allowed to show a visual.

use crate::tracker::event::MarkerId;

/// A visual instantiated for the active marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVisual<H> {
    /// Renderer-owned handle to the instantiated visual
    pub handle: H,
    /// Whether the visual is currently shown
    pub visible: bool,
}

/// Which marker is active and the visual it owns, if any.
///
/// Mutated only by [`MarkerDispatcher`](crate::MarkerDispatcher). A visual is
/// never present without an active marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveMarkerState<H> {
    /// Marker that most recently won detection
    pub active_marker_id: Option<MarkerId>,
    /// Visual anchored to the active marker
    pub visual: Option<ActiveVisual<H>>,
}

impl<H> Default for ActiveMarkerState<H> {
    fn default() -> Self {
        Self {
            active_marker_id: None,
            visual: None,
        }
    }
}

impl<H> ActiveMarkerState<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, marker_id: &MarkerId) -> bool {
        self.active_marker_id.as_ref() == Some(marker_id)
    }

    /// Handle of the visual when it is instantiated and shown.
    pub fn visible_handle(&self) -> Option<&H> {
        match &self.visual {
            Some(visual) if visual.visible => Some(&visual.handle),
            _ => None,
        }
    }

    pub fn has_visual(&self) -> bool {
        self.visual.is_some()
    }

    /// Make `marker_id` active with an optional freshly created visual.
    ///
    /// The previous visual must already have been released.
    pub(crate) fn activate(&mut self, marker_id: MarkerId, handle: Option<H>) {
        debug_assert!(self.visual.is_none());
        self.active_marker_id = Some(marker_id);
        self.visual = handle.map(|handle| ActiveVisual {
            handle,
            visible: true,
        });
    }

    /// Take ownership of the current visual, leaving none behind.
    pub(crate) fn take_visual(&mut self) -> Option<H> {
        self.visual.take().map(|visual| visual.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let state = ActiveMarkerState::<u32>::new();
        assert!(state.active_marker_id.is_none());
        assert!(state.visible_handle().is_none());
        assert!(!state.has_visual());
    }

    #[test]
    fn test_hidden_visual_has_no_visible_handle() {
        let mut state = ActiveMarkerState::new();
        state.activate(MarkerId::new("Marker1"), Some(7u32));
        assert_eq!(state.visible_handle(), Some(&7));

        if let Some(visual) = state.visual.as_mut() {
            visual.visible = false;
        }
        assert!(state.visible_handle().is_none());
        assert!(state.has_visual());
        assert!(state.is_active(&MarkerId::new("Marker1")));
    }

    #[test]
    fn test_take_visual_releases_handle() {
        let mut state = ActiveMarkerState::new();
        state.activate(MarkerId::new("Marker1"), Some(3u32));
        assert_eq!(state.take_visual(), Some(3));
        assert!(!state.has_visual());
        assert_eq!(state.take_visual(), None);
    }
}
