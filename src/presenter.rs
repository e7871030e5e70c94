//! Marker content lookup and the info overlay it feeds.

mod affordance;
mod content_table;
mod info_presenter;

pub use affordance::AffordanceState;
pub use content_table::{ContentConfig, ContentTable, MarkerContent};
pub use info_presenter::{InfoPresenter, fallback_text};
