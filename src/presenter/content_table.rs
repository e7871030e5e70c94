//! Static marker-to-text configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::tracker::MarkerId;

/// One authored content entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerContent {
    /// Must match the reference image name exactly
    pub marker: String,
    pub content: String,
}

impl MarkerContent {
    pub fn new(marker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            content: content.into(),
        }
    }
}

/// Content configuration as authored, before deduplication.
///
/// ```json
/// { "markers": [ { "marker": "Marker1", "content": "Text A" } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub markers: Vec<MarkerContent>,
}

impl ContentConfig {
    /// Parse a JSON content configuration.
    ///
    /// Only malformed JSON is an error. Entries with an empty marker name are
    /// logged and skipped.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let mut config: ContentConfig = serde_json::from_str(json)?;
        let mut index = 0;
        config.markers.retain(|m| {
            let keep = !m.marker.is_empty();
            if !keep {
                log::warn!("Marker content entry {} has an empty marker name and is ignored", index);
            }
            index += 1;
            keep
        });
        Ok(config)
    }

    pub fn into_table(self) -> ContentTable {
        ContentTable::build(
            self.markers
                .into_iter()
                .map(|m| (MarkerId::from(m.marker), m.content)),
        )
    }
}

/// Read-only lookup from marker to display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTable {
    entries: HashMap<MarkerId, String>,
}

impl ContentTable {
    /// Build the table, keeping the first entry for each marker.
    ///
    /// Later duplicates are logged and ignored; authored content must not be
    /// able to take the experience down.
    pub fn build<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<MarkerId>,
        T: Into<String>,
    {
        let mut table = HashMap::new();
        for (marker_id, text) in entries {
            let marker_id = marker_id.into();
            if table.contains_key(&marker_id) {
                log::warn!(
                    "Duplicate marker name '{}' in marker content. Only the first entry will be used.",
                    marker_id
                );
                continue;
            }
            table.insert(marker_id, text.into());
        }
        Self { entries: table }
    }

    pub fn get(&self, marker_id: &str) -> Option<&str> {
        self.entries.get(marker_id).map(String::as_str)
    }

    pub fn contains(&self, marker_id: &str) -> bool {
        self.entries.contains_key(marker_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
