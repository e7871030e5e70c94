//! Info button and panel control.

use crate::integration::UiShell;
use crate::presenter::affordance::AffordanceState;
use crate::presenter::content_table::ContentTable;
use crate::tracker::MarkerId;

/// Text shown when a detected marker has no authored content.
pub fn fallback_text(marker_id: &MarkerId) -> String {
    format!(
        "Information not found for marker: {}.\nPlease add content for this marker in the content configuration.",
        marker_id
    )
}

/// Owns the content table and the affordance state, and mirrors every
/// state change onto a [`UiShell`].
pub struct InfoPresenter<U: UiShell> {
    table: ContentTable,
    state: AffordanceState,
    shell: U,
}

impl<U: UiShell> InfoPresenter<U> {
    /// Create a presenter with the button and panel both hidden.
    pub fn new(table: ContentTable, mut shell: U) -> Self {
        shell.set_panel_visible(false);
        shell.set_button_visible(false);
        Self {
            table,
            state: AffordanceState::new(),
            shell,
        }
    }

    /// Load the panel with the content for `marker_id` and reveal the button.
    pub fn display_for(&mut self, marker_id: &MarkerId) {
        self.state.current_marker_for_info = Some(marker_id.clone());

        match self.table.get(marker_id.as_str()) {
            Some(content) => {
                self.shell.set_panel_text(content);
                log::debug!("Displaying info content for: {}", marker_id);
            }
            None => {
                self.shell.set_panel_text(&fallback_text(marker_id));
                log::warn!("No information content found for marker: {}", marker_id);
            }
        }

        self.show_affordance();
    }

    pub fn show_affordance(&mut self) {
        if self.state.button_visible {
            return;
        }
        self.state.button_visible = true;
        self.shell.set_button_visible(true);
        match &self.state.current_marker_for_info {
            Some(marker_id) => log::info!("Info button shown for marker: {}", marker_id),
            None => log::info!("Info button shown"),
        }
    }

    /// Hide the button, close the panel and forget the displayed marker.
    pub fn hide_affordance(&mut self) {
        if self.state.button_visible {
            self.state.button_visible = false;
            self.shell.set_button_visible(false);
            log::info!("Info button hidden");
        }

        if self.state.panel_expanded {
            self.state.panel_expanded = false;
            self.shell.set_panel_visible(false);
            log::info!("Info panel closed because the button was hidden");
        }

        self.state.current_marker_for_info = None;
    }

    /// Open or close the panel; ignored while the button is hidden.
    pub fn toggle_expansion(&mut self) {
        if !self.state.button_visible {
            return;
        }
        self.state.panel_expanded = !self.state.panel_expanded;
        self.shell.set_panel_visible(self.state.panel_expanded);
        log::debug!(
            "Info panel toggled, now {}",
            if self.state.panel_expanded { "open" } else { "closed" }
        );
    }

    pub fn current_marker_for_info(&self) -> Option<&MarkerId> {
        self.state.current_marker_for_info.as_ref()
    }

    pub fn state(&self) -> &AffordanceState {
        &self.state
    }

    pub fn table(&self) -> &ContentTable {
        &self.table
    }

    pub fn shell(&self) -> &U {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut U {
        &mut self.shell
    }
}
