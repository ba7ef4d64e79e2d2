// src/extract.rs

//! Attribute extraction from raw document text.
//!
//! Pulls the `{name, image, description, visible}` field schema out of the
//! first template block found in a document. Missing or malformed input
//! never errors; fields degrade to their defaults.

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{FieldDefaults, Record};

/// Tokens accepted for the `visible` field.
const TRUE_TOKENS: [&str; 3] = ["true", "yes", "1"];
const FALSE_TOKENS: [&str; 3] = ["false", "no", "0"];

/// Extracts record attributes from document text.
pub struct AttributeExtractor {
    block: Regex,
    name: Regex,
    image: Regex,
    description: Regex,
    visible: Regex,
}

impl AttributeExtractor {
    /// Create an extractor for the given template block marker,
    /// e.g. `"Infobox Project"`.
    pub fn new(marker: &str) -> Result<Self> {
        // First closing delimiter wins. The scan is not nesting-aware;
        // a nested template inside the block truncates it.
        let block_pattern = format!(r"(?s)\{{\{{{}(.*?)\}}\}}", regex::escape(marker));
        let block = Regex::new(&block_pattern)
            .map_err(|e| AppError::pattern(&block_pattern, e))?;

        Ok(Self {
            block,
            name: Self::field_pattern("name")?,
            image: Self::field_pattern("image")?,
            description: Self::field_pattern("description")?,
            visible: Self::field_pattern("visible")?,
        })
    }

    fn field_pattern(field: &str) -> Result<Regex> {
        // `|field = value`, value runs to end of line only
        let pattern = format!(r"(?m)\|\s*{}\s*=(.*)$", field);
        Regex::new(&pattern).map_err(|e| AppError::pattern(&pattern, e))
    }

    /// Build a record from document text, applying the given defaults.
    pub fn extract(&self, identifier: &str, text: &str, defaults: &FieldDefaults) -> Record {
        let block = self
            .block
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .unwrap_or("");

        let mut record = Record::defaulted(identifier, defaults);

        if let Some(name) = self.field_value(&self.name, block) {
            record.name = name;
        }
        if let Some(image) = self.field_value(&self.image, block) {
            record.image_ref = image;
        }
        if let Some(description) = self.field_value(&self.description, block) {
            record.description = description;
        }
        if let Some(visible) = self.field_value(&self.visible, block) {
            record.visible = parse_visible(&visible, record.visible);
        }

        record
    }

    /// First matching line wins; empty values keep the default.
    fn field_value(&self, pattern: &Regex, block: &str) -> Option<String> {
        let value = pattern.captures(block)?.get(1)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Tri-state visibility parse: only a recognized token overrides the default.
fn parse_visible(value: &str, default: bool) -> bool {
    let token = value.to_lowercase();
    if TRUE_TOKENS.contains(&token.as_str()) {
        true
    } else if FALSE_TOKENS.contains(&token.as_str()) {
        false
    } else {
        default
    }
}
