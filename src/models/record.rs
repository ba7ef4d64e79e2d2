//! Record data structure.

use serde::{Deserialize, Serialize};

/// A listable item extracted from one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Stable unique key of the source document
    pub identifier: String,

    /// Display name (falls back to the identifier)
    pub name: String,

    /// Opaque image resource reference, empty if none
    pub image_ref: String,

    /// Free-text description, empty if none
    pub description: String,

    /// Whether the record appears in rendered output
    pub visible: bool,
}

impl Record {
    /// Create a fully defaulted record for an identifier.
    pub fn defaulted(identifier: &str, defaults: &FieldDefaults) -> Self {
        Self {
            identifier: identifier.to_string(),
            name: identifier.to_string(),
            image_ref: defaults.image.clone(),
            description: defaults.description.clone(),
            visible: true,
        }
    }

    /// Whether the record carries a usable image reference.
    pub fn has_image(&self) -> bool {
        !self.image_ref.is_empty()
    }
}

/// Per-field default values applied during extraction.
///
/// Passed explicitly into each extraction call; there is no global
/// defaults registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDefaults {
    /// Default image reference for records without one
    pub image: String,

    /// Default description for records without one
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaulted_record() {
        let defaults = FieldDefaults {
            image: "Placeholder.png".to_string(),
            description: "No description yet".to_string(),
        };
        let record = Record::defaulted("Laser Cutter", &defaults);

        assert_eq!(record.identifier, "Laser Cutter");
        assert_eq!(record.name, "Laser Cutter");
        assert_eq!(record.image_ref, "Placeholder.png");
        assert_eq!(record.description, "No description yet");
        assert!(record.visible);
    }

    #[test]
    fn test_has_image() {
        let mut record = Record::defaulted("X", &FieldDefaults::default());
        assert!(!record.has_image());

        record.image_ref = "X.jpg".to_string();
        assert!(record.has_image());
    }
}
