// src/locale.rs

//! Localized message tables for the sort control.
//!
//! English and German tables are built in; a TOML file can override or
//! extend either. Unknown keys fall back to the key itself so a missing
//! translation never breaks rendering.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Localized text lookup used by the sort control renderer.
pub trait Localizer {
    /// Resolve a message key to display text.
    fn text(&self, key: &str) -> String;
}

/// Message table for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    #[serde(default)]
    messages: HashMap<String, String>,
}

impl Locale {
    /// Built-in English table.
    pub fn english() -> Self {
        Self {
            messages: table(&[
                ("sort_asc", "ascending"),
                ("sort_desc", "descending"),
                ("field_alphabetical", "alphabetical"),
                ("field_last_modified", "last change"),
                ("field_creation_order", "creation date"),
            ]),
        }
    }

    /// Built-in German table.
    pub fn german() -> Self {
        Self {
            messages: table(&[
                ("sort_asc", "Aufsteigend"),
                ("sort_desc", "Absteigend"),
                ("field_alphabetical", "Alphabetisch"),
                ("field_last_modified", "Letzte Änderung"),
                ("field_creation_order", "Erstellungsdatum"),
            ]),
        }
    }

    /// Built-in table for a language code, English when unknown.
    pub fn for_language(code: &str) -> Self {
        match code {
            "de" => Self::german(),
            _ => Self::english(),
        }
    }

    /// Load a locale table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load a locale table, falling back to the built-in English table.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Locale load failed from {:?}: {}. Using built-in English.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for Locale {
    fn text(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
