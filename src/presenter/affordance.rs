use crate::tracker::MarkerId;

/// Visibility of the info button and the panel it opens.
///
/// The panel is never expanded while the button is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffordanceState {
    /// Info button is on screen
    pub button_visible: bool,
    /// Info panel is open
    pub panel_expanded: bool,
    /// Marker whose content the panel currently holds
    pub current_marker_for_info: Option<MarkerId>,
}

impl AffordanceState {
    pub fn new() -> Self {
        Self::default()
    }
}
