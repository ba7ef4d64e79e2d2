// src/sort.rs

//! Order token handling and the sort picker control.
//!
//! The request supplies a compact order token, `[-]field_name`: a leading
//! `-` selects descending order. Tokens naming a field outside the
//! allow-list fall back to the caller's default pair.

use crate::locale::Localizer;
use crate::models::{SortDirection, SortField};

/// Decode an order token against an allow-list.
///
/// Absent, empty, sign-only and unknown-field tokens all return the
/// fallback pair unchanged.
pub fn decode(
    token: Option<&str>,
    allow_list: &[SortField],
    fallback: (SortField, SortDirection),
) -> (SortField, SortDirection) {
    let Some(token) = token else {
        return fallback;
    };

    let (name, direction) = match token.strip_prefix('-') {
        Some(rest) => (rest, SortDirection::Descending),
        None => (token, SortDirection::Ascending),
    };

    match SortField::parse(name) {
        Some(field) if allow_list.contains(&field) => (field, direction),
        _ => fallback,
    }
}

/// Encode a (field, direction) pair back into an order token.
pub fn encode(field: SortField, direction: SortDirection) -> String {
    match direction {
        SortDirection::Ascending => field.key().to_string(),
        SortDirection::Descending => format!("-{}", field.key()),
    }
}

/// Render the auto-submitting sort picker for the given fields.
///
/// Each field contributes an ascending and a descending option; the option
/// matching `selected` carries the `selected` attribute. Labels come from
/// the `field_*` and `sort_*` locale keys.
pub fn render_control(
    fields: &[SortField],
    selected: Option<&str>,
    param_name: &str,
    locale: &dyn Localizer,
) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let mut output = String::from(r#"<form method="GET" onchange="submit()" class="showcase-sortable">"#);
    output.push_str(&format!(r#"<select name="{}">"#, param_name));

    for field in fields {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let value = encode(*field, direction);
            let marker = if selected == Some(value.as_str()) {
                " selected"
            } else {
                ""
            };
            let direction_key = match direction {
                SortDirection::Ascending => "sort_asc",
                SortDirection::Descending => "sort_desc",
            };
            output.push_str(&format!(
                r#"<option value="{}"{}>{} ({})</option>"#,
                value,
                marker,
                locale.text(&format!("field_{}", field.key())),
                locale.text(direction_key),
            ));
        }
    }

    output.push_str("</select></form>");
    output
}
