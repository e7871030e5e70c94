//! Single-active-marker dispatch.

use crate::integration::{Renderer, UiShell};
use crate::presenter::InfoPresenter;
use crate::tracker::active_marker::ActiveMarkerState;
use crate::tracker::event::{ChangeBatch, MarkerId, TrackedEvent};
use crate::tracker::tracking_quality::TrackingQuality;

/// Configuration for the MarkerDispatcher.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Treat an update with `Limited` quality as a loss of tracking.
    /// When false, `Limited` updates leave the current state untouched.
    pub limited_is_lost: bool,
    /// Collect a per-batch [`ChangeReport`].
    pub debug_report: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            limited_is_lost: true,
            debug_report: true,
        }
    }
}

/// Human-readable summary of one processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeReport {
    pub lines: Vec<String>,
}

impl ChangeReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Report as a newline-terminated block, ready for an on-screen info box.
    pub fn text(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

/// Reduces tracking change batches to one active marker and drives its
/// visual and info overlay.
///
/// Only one visual exists at a time: switching markers destroys the old one
/// before the new one is instantiated, while a marker that merely loses
/// tracking has its visual hidden so a quick recovery can show it again.
pub struct MarkerDispatcher<R: Renderer, U: UiShell> {
    renderer: R,
    presenter: Option<InfoPresenter<U>>,
    state: ActiveMarkerState<R::Handle>,
    config: DispatcherConfig,
}

impl<R: Renderer, U: UiShell> MarkerDispatcher<R, U> {
    pub fn new(renderer: R, presenter: Option<InfoPresenter<U>>, config: DispatcherConfig) -> Self {
        Self {
            renderer,
            presenter,
            state: ActiveMarkerState::new(),
            config,
        }
    }

    /// Apply one batch of tracking changes.
    ///
    /// Added markers are handled first, then updates, then removals, so a
    /// marker that just appeared wins over tracking noise in the same frame.
    pub fn on_change(&mut self, batch: &ChangeBatch) -> ChangeReport {
        let mut report = ChangeReport::default();

        // Step 1: anything newly added counts as detected, whatever its quality
        for event in &batch.added {
            self.handle_detected(event);
            self.note(&mut report, || {
                format!("Added: {} {}", event.marker_id, event.quality)
            });
        }

        // Step 2: updates are detected only while fully tracking
        for event in &batch.updated {
            match event.quality {
                TrackingQuality::Tracking => self.handle_detected(event),
                TrackingQuality::Limited if !self.config.limited_is_lost => {}
                TrackingQuality::Limited | TrackingQuality::None => {
                    self.handle_lost_or_limited(&event.marker_id)
                }
            }
            self.note(&mut report, || {
                format!("Updated: {} {}", event.marker_id, event.quality)
            });
        }

        // Step 3: removals
        for event in &batch.removed {
            self.handle_lost_or_limited(&event.marker_id);
            self.note(&mut report, || format!("Removed: {}", event.marker_id));
        }

        report
    }

    fn note(&self, report: &mut ChangeReport, line: impl FnOnce() -> String) {
        if self.config.debug_report {
            report.lines.push(line());
        }
    }

    fn handle_detected(&mut self, event: &TrackedEvent) {
        let marker_id = &event.marker_id;

        if !self.state.is_active(marker_id) {
            if let Some(handle) = self.state.take_visual() {
                self.renderer.destroy(handle);
                if let Some(previous) = &self.state.active_marker_id {
                    log::info!("Destroyed previous AR model for {}", previous);
                }
            }

            let handle = match self.renderer.find_template(marker_id) {
                Some(template) => {
                    let handle = self.renderer.instantiate(&template, &event.anchor);
                    log::info!("Instantiated new AR model for {}", marker_id);
                    Some(handle)
                }
                None => {
                    log::warn!("No AR template found for reference image: {}", marker_id);
                    None
                }
            };
            self.state.activate(marker_id.clone(), handle);
        } else if let Some(visual) = self.state.visual.as_mut() {
            if !visual.visible {
                self.renderer.set_visible(&visual.handle, true);
                visual.visible = true;
                log::info!("Re-activated AR model for {}", marker_id);
            }
        }

        if let Some(presenter) = self.presenter.as_mut() {
            presenter.display_for(marker_id);
            presenter.show_affordance();
        }
    }

    fn handle_lost_or_limited(&mut self, marker_id: &MarkerId) {
        if !self.state.is_active(marker_id) {
            return;
        }

        if let Some(visual) = self.state.visual.as_mut() {
            if visual.visible {
                self.renderer.set_visible(&visual.handle, false);
                visual.visible = false;
                log::info!("Deactivated AR model for {}", marker_id);
            }
        }

        if let Some(presenter) = self.presenter.as_mut() {
            presenter.hide_affordance();
        }
    }

    /// Route an info button click to the presenter.
    pub fn button_clicked(&mut self) {
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.toggle_expansion();
        }
    }

    pub fn active_marker(&self) -> Option<&MarkerId> {
        self.state.active_marker_id.as_ref()
    }

    pub fn state(&self) -> &ActiveMarkerState<R::Handle> {
        &self.state
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn presenter(&self) -> Option<&InfoPresenter<U>> {
        self.presenter.as_ref()
    }

    pub fn presenter_mut(&mut self) -> Option<&mut InfoPresenter<U>> {
        self.presenter.as_mut()
    }
}
