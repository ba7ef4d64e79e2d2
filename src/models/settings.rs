//! Per-tag rendering settings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which listing variant a tag requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    /// Full ordered listing of the collection
    #[default]
    Plain,
    /// Bounded random daily rotation
    Daily,
}

/// Settings for a single list rendering, resolved from configuration
/// defaults plus tag attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSettings {
    /// Maximum records in a daily rotation
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Thumbnail size in pixels
    #[serde(default = "default_thumb_size")]
    pub thumb_size: u32,

    /// Truncate descriptions to this many characters, off when absent
    #[serde(default)]
    pub trim_text: Option<usize>,

    /// Marker appended to truncated descriptions
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

fn default_limit() -> usize {
    4
}

fn default_thumb_size() -> u32 {
    180
}

fn default_ellipsis() -> String {
    "...".to_string()
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            thumb_size: default_thumb_size(),
            trim_text: None,
            ellipsis: default_ellipsis(),
        }
    }
}

impl ListSettings {
    /// Apply tag attribute overrides on top of these settings.
    ///
    /// Unparseable numeric attributes are ignored and the base value kept.
    pub fn with_attrs(&self, attrs: &HashMap<String, String>) -> Self {
        let mut settings = self.clone();

        if let Some(limit) = attrs.get("limit").and_then(|v| v.parse().ok()) {
            settings.limit = limit;
        }
        if let Some(size) = attrs.get("thumb_size").and_then(|v| v.parse().ok()) {
            settings.thumb_size = size;
        }
        if let Some(trim) = attrs.get("trim_text").and_then(|v| v.parse().ok()) {
            settings.trim_text = Some(trim);
        }

        settings
    }
}

impl ListKind {
    /// Resolve the list variant from the tag's `type` attribute.
    pub fn from_attrs(attrs: &HashMap<String, String>) -> Self {
        match attrs.get("type").map(String::as_str) {
            Some("daily") => ListKind::Daily,
            _ => ListKind::Plain,
        }
    }
}
