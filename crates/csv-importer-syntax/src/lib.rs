//! Message template rules shared by the runtime translator and the
//! `messages!` macro.
//!
//! This crate centralizes the plural separator, the form selection thresholds
//! and the placeholder grammar so compile-time validation (`csv-importer-macros`)
//! and runtime resolution (`csv-importer`) cannot drift apart.

use std::collections::BTreeSet;

/// Literal separator between plural forms: `"item | items"`.
pub const PLURAL_SEPARATOR: &str = " | ";

/// Split a template into its plural forms.
///
/// The split is literal and forms are never trimmed, so
/// `"a  |  b"` yields `["a ", " b"]`. A template without the separator
/// yields a single form.
pub fn split_forms(template: &str) -> Vec<&str> {
    template.split(PLURAL_SEPARATOR).collect()
}

/// Index of the form selected for `count` in a template with `form_count` forms.
///
/// - 1 form: always 0.
/// - 2 forms (`singular | plural`): 0 when `count == 1`, otherwise 1.
/// - 3+ forms (`zero | one | other`): 0 for 0, 1 for 1, otherwise 2.
///   Forms past the third are never selected.
pub fn select_form_index(form_count: usize, count: i64) -> usize {
    match form_count {
        0 | 1 => 0,
        2 => usize::from(count != 1),
        _ => match count {
            0 => 0,
            1 => 1,
            _ => 2,
        },
    }
}

/// Reduce `template` to the single form selected for `count`.
///
/// ```
/// use csv_importer_syntax::select_form;
///
/// assert_eq!(select_form("item | items", 1), "item");
/// assert_eq!(select_form("item | items", 0), "items");
/// assert_eq!(select_form("none | one | many", 7), "many");
/// assert_eq!(select_form("no separator", 3), "no separator");
/// ```
pub fn select_form(template: &str, count: i64) -> &str {
    let forms = split_forms(template);
    forms
        .get(select_form_index(forms.len(), count))
        .copied()
        .unwrap_or(template)
}

/// Whether `c` may appear in a placeholder name (`[A-Za-z0-9_]`).
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A well-formed `{name}` placeholder found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Name between the braces.
    pub name: &'a str,
    /// Byte offset of the opening brace.
    pub start: usize,
    /// Byte offset one past the closing brace.
    pub end: usize,
}

/// Find all well-formed placeholders in `template`, left to right.
///
/// A placeholder is `{` followed by one or more name characters and `}`.
/// Empty braces and braces around other characters are not placeholders.
/// Matches never overlap; scanning resumes after each closing brace.
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    let mut found = Vec::new();
    let mut offset = 0;

    while let Some(relative) = template[offset..].find('{') {
        let start = offset + relative;
        let name_start = start + 1;
        let name_len = template[name_start..]
            .find(|c: char| !is_name_char(c))
            .unwrap_or(template.len() - name_start);
        let name_end = name_start + name_len;

        if name_len > 0 && template[name_end..].starts_with('}') {
            found.push(Placeholder {
                name: &template[name_start..name_end],
                start,
                end: name_end + 1,
            });
            offset = name_end + 1;
        } else {
            offset = name_start;
        }
    }

    found
}

/// Distinct placeholder names used anywhere in `template`, sorted.
pub fn placeholder_names(template: &str) -> BTreeSet<&str> {
    placeholders(template).into_iter().map(|p| p.name).collect()
}
