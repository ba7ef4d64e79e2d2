// src/render.rs

//! Markup grid rendering.
//!
//! Emits the host-side list markup for a set of records. The `[[...]]`
//! link and image fragments are opaque to this crate; the host's markup
//! expander turns them into final HTML and handles missing images.

use crate::models::{ListSettings, Record};

/// Render the showcase grid for the given records.
///
/// Non-visible records are skipped entirely. Descriptions are truncated to
/// `trim_text` characters when set, with the full text kept in the span's
/// `title` attribute.
pub fn render_list(records: &[Record], settings: &ListSettings) -> String {
    let mut output = String::from(r#"<div class="showcase-box">"#);
    output.push_str(r#"<ul class="showcase-list clearfix">"#);

    for record in records {
        if !record.visible {
            continue;
        }

        let teaser = match settings.trim_text {
            Some(length) => trim_text(&record.description, length, &settings.ellipsis),
            None => record.description.clone(),
        };

        output.push_str(r#"<li class="showcase-item">"#);
        output.push_str(&format!(
            r#"<span class="showcase-title">[[{}|{}]]</span>"#,
            record.identifier, record.name
        ));
        output.push_str(&format!(
            r#"<span class="showcase-image">[[Image:{img}|{size}px|link={id}|alt={id}]]</span>"#,
            img = record.image_ref,
            size = settings.thumb_size,
            id = record.identifier,
        ));
        output.push_str(&format!(
            r#"<span class="showcase-teaser" title="{}">{}</span>"#,
            record.description, teaser
        ));
        output.push_str("</li>");
    }

    output.push_str("</ul></div>__NOTOC__\n");
    output
}

/// Truncate text to `length` characters, ellipsis included.
pub fn trim_text(text: &str, length: usize, ellipsis: &str) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let keep = length.saturating_sub(ellipsis.chars().count());
    let mut trimmed: String = text.chars().take(keep).collect();
    trimmed.push_str(ellipsis);
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldDefaults;

    fn record(identifier: &str, image: &str, description: &str, visible: bool) -> Record {
        let mut record = Record::defaulted(identifier, &FieldDefaults::default());
        record.image_ref = image.to_string();
        record.description = description.to_string();
        record.visible = visible;
        record
    }

    #[test]
    fn test_trim_text() {
        assert_eq!(trim_text("abcdefghij", 6, "..."), "abc...");
        assert_eq!(trim_text("short", 10, "..."), "short");
        assert_eq!(trim_text("exactly_10", 10, "..."), "exactly_10");
    }

    #[test]
    fn test_trim_text_multibyte() {
        assert_eq!(trim_text("äöüäöüäöüä", 6, "..."), "äöü...");
    }

    #[test]
    fn test_render_basic_item() {
        let records = [record("Mill", "Mill.jpg", "A big mill", true)];
        let markup = render_list(&records, &ListSettings::default());

        assert!(markup.contains("[[Mill|Mill]]"));
        assert!(markup.contains("[[Image:Mill.jpg|180px|link=Mill|alt=Mill]]"));
        assert!(markup.contains(r#"title="A big mill">A big mill</span>"#));
        assert!(markup.ends_with("__NOTOC__\n"));
    }

    #[test]
    fn test_render_skips_invisible() {
        let records = [
            record("Shown", "A.jpg", "", true),
            record("Hidden", "B.jpg", "", false),
        ];
        let markup = render_list(&records, &ListSettings::default());

        assert!(markup.contains("Shown"));
        assert!(!markup.contains("Hidden"));
    }

    #[test]
    fn test_render_empty_image_still_emits_reference() {
        let records = [record("NoPic", "", "", true)];
        let markup = render_list(&records, &ListSettings::default());
        assert!(markup.contains("[[Image:|180px|link=NoPic|alt=NoPic]]"));
    }

    #[test]
    fn test_render_truncates_but_keeps_full_tooltip() {
        let records = [record("P", "P.jpg", "abcdefghij", true)];
        let settings = ListSettings {
            trim_text: Some(6),
            ..ListSettings::default()
        };
        let markup = render_list(&records, &settings);
        assert!(markup.contains(r#"title="abcdefghij">abc...</span>"#));
    }

    #[test]
    fn test_render_thumb_size() {
        let records = [record("P", "P.jpg", "", true)];
        let settings = ListSettings {
            thumb_size: 96,
            ..ListSettings::default()
        };
        let markup = render_list(&records, &settings);
        assert!(markup.contains("|96px|"));
    }
}
