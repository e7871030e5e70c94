//! Capabilities the dispatcher drives: visuals and the info overlay.

use crate::tracker::{AnchorPose, MarkerId};

/// Scene-side operations for the visual anchored to a marker.
///
/// Implement this trait to connect any rendering engine. Every call is
/// synchronous from the dispatcher's point of view; an implementation that
/// loads assets in the background should hand back a handle immediately.
///
/// # Example
///
/// ```ignore
/// use markertrack_rs::{AnchorPose, MarkerId, Renderer};
///
/// struct MyScene {
///     // Your engine here
/// }
///
/// impl Renderer for MyScene {
///     type Template = PrefabId;
///     type Handle = NodeId;
///
///     fn find_template(&self, marker_id: &MarkerId) -> Option<PrefabId> {
///         self.prefabs.get(marker_id.as_str()).copied()
///     }
///     // ...
/// }
/// ```
pub trait Renderer {
    /// Reference to a loadable visual (prefab, model asset, ...).
    type Template;
    /// Handle to an instantiated visual.
    type Handle;

    /// Find the visual template registered for a marker.
    fn find_template(&self, marker_id: &MarkerId) -> Option<Self::Template>;

    /// Instantiate a template parented to the marker's tracked transform.
    fn instantiate(&mut self, template: &Self::Template, anchor: &AnchorPose) -> Self::Handle;

    /// Show or hide an instantiated visual without releasing it.
    fn set_visible(&mut self, handle: &Self::Handle, visible: bool);

    /// Release a visual. The handle is consumed and must not be reused.
    fn destroy(&mut self, handle: Self::Handle);
}

/// Widget-side operations for the info button and its panel.
///
/// Button clicks are routed back through
/// [`InfoPresenter::toggle_expansion`](crate::InfoPresenter::toggle_expansion).
pub trait UiShell {
    fn set_button_visible(&mut self, visible: bool);

    fn set_panel_visible(&mut self, visible: bool);

    fn set_panel_text(&mut self, text: &str);
}
