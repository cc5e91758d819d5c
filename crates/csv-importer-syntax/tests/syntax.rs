use csv_importer_syntax::{
    PLURAL_SEPARATOR, Placeholder, placeholder_names, placeholders, select_form,
    select_form_index, split_forms,
};

#[test]
fn split_preserves_whitespace() {
    assert_eq!(
        split_forms("Multiple  |  spaces  |  test"),
        vec!["Multiple ", " spaces ", " test"]
    );
}

#[test]
fn split_without_separator_is_single_form() {
    assert_eq!(split_forms("a|b"), vec!["a|b"]);
    assert_eq!(split_forms(""), vec![""]);
}

#[test]
fn separator_is_space_pipe_space() {
    assert_eq!(PLURAL_SEPARATOR, " | ");
}

#[test]
fn two_forms_pick_singular_only_for_one() {
    assert_eq!(select_form_index(2, 1), 0);
    assert_eq!(select_form_index(2, 0), 1);
    assert_eq!(select_form_index(2, 5), 1);
    assert_eq!(select_form_index(2, -1), 1);
}

#[test]
fn three_forms_pick_zero_one_other() {
    assert_eq!(select_form_index(3, 0), 0);
    assert_eq!(select_form_index(3, 1), 1);
    assert_eq!(select_form_index(3, 2), 2);
    assert_eq!(select_form_index(3, -4), 2);
}

#[test]
fn forms_past_third_are_never_selected() {
    assert_eq!(select_form("a | b | c | d", 3), "c");
    assert_eq!(select_form("a | b | c | d", 100), "c");
}

#[test]
fn single_form_ignores_count() {
    assert_eq!(select_form_index(1, 42), 0);
    assert_eq!(select_form("Hello World", 5), "Hello World");
}

#[test]
fn placeholders_reports_names_and_offsets() {
    assert_eq!(
        placeholders("Page {current} of {total}"),
        vec![
            Placeholder {
                name: "current",
                start: 5,
                end: 14,
            },
            Placeholder {
                name: "total",
                start: 18,
                end: 25,
            },
        ]
    );
}

#[test]
fn malformed_braces_are_not_placeholders() {
    assert!(placeholders("{} { name } {a-b} {open").is_empty());
}

#[test]
fn nested_open_brace_matches_inner_token() {
    let found = placeholders("{{name}}");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "name");
    assert_eq!(found[0].start, 1);
}

#[test]
fn placeholder_names_are_distinct_and_sorted() {
    let names: Vec<&str> = placeholder_names("{b} {a} {b}").into_iter().collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn unicode_around_placeholders_is_handled() {
    let found = placeholders("💎 {gem} 💎");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "gem");
}
