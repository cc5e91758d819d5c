//! Tests for label overrides and the label resolver.

use csv_importer::messages::{Message, default_translator, translator_with};
use csv_importer::{Catalog, LabelResolver, Labels};
use tracing_test::traced_test;

fn labels(json: &str) -> Labels {
    serde_json::from_str(json).unwrap()
}

// =========================================================================
// Labels
// =========================================================================

#[test]
fn labels_deserialize_from_camel_case() {
    let labels = labels(
        r#"{ "noFileSelected": "Nothing yet", "errorNavigatorPlural": "problems" }"#,
    );
    assert_eq!(labels.no_file_selected.as_deref(), Some("Nothing yet"));
    assert_eq!(labels.error_navigator_plural.as_deref(), Some("problems"));
    assert_eq!(labels.title, None);
}

#[test]
fn every_key_is_readable() {
    let mut json = serde_json::Map::new();
    for key in Labels::KEYS {
        json.insert((*key).to_string(), serde_json::Value::String(format!("<{key}>")));
    }
    let labels: Labels = serde_json::from_value(serde_json::Value::Object(json)).unwrap();

    for key in Labels::KEYS {
        assert_eq!(labels.get(key), Some(format!("<{key}>").as_str()), "{key}");
    }
}

#[test]
fn unknown_key_reads_as_none() {
    assert_eq!(Labels::default().get("nope"), None);
}

#[test]
fn merge_prefers_overrides() {
    let global = labels(r#"{ "title": "Global", "cancelButton": "Back" }"#);
    let component = labels(r#"{ "title": "Component" }"#);

    let merged = global.merge(component);
    assert_eq!(merged.get("title"), Some("Component"));
    assert_eq!(merged.get("cancelButton"), Some("Back"));
    assert_eq!(merged.get("submitButton"), None);
}

#[test]
fn serializes_only_set_labels() {
    let json = serde_json::to_string(&labels(r#"{ "closeButton": "X" }"#)).unwrap();
    assert!(json.contains(r#""closeButton":"X""#));
}

// =========================================================================
// Resolver
// =========================================================================

#[test]
fn component_then_global_then_messages() {
    let resolver = LabelResolver::new(
        default_translator("en"),
        labels(r#"{ "title": "Global title", "submitButton": "Global submit" }"#),
        labels(r#"{ "title": "Modal title" }"#),
    );

    assert_eq!(resolver.label("title"), "Modal title");
    assert_eq!(resolver.label("submitButton"), "Global submit");
    assert_eq!(resolver.label("cancelButton"), "Cancel");
    assert_eq!(resolver.message(Message::ReuploadButton), "Upload another file");
}

#[test]
fn label_uses_active_locale() {
    let overrides = Catalog::new().with_locale("fr", [("closeButton", "Fermer")]);
    let resolver = LabelResolver::new(
        translator_with("fr", &overrides),
        Labels::default(),
        Labels::default(),
    );
    assert_eq!(resolver.message(Message::CloseButton), "Fermer");
    assert_eq!(resolver.message(Message::Title), "CSV Import");
}

#[traced_test]
#[test]
fn label_without_message_returns_key() {
    let resolver = LabelResolver::new(default_translator("en"), Labels::default(), Labels::default());
    assert_eq!(resolver.label("jumpToFirstError"), "jumpToFirstError");
    assert!(logs_contain("jumpToFirstError"));
}

#[test]
fn error_count_pluralizes() {
    let resolver = LabelResolver::new(default_translator("en"), Labels::default(), Labels::default());
    assert_eq!(resolver.error_count(0), "0 errors");
    assert_eq!(resolver.error_count(1), "1 error");
    assert_eq!(resolver.error_count(12), "12 errors");
}

#[test]
fn error_word_prefers_navigator_labels() {
    let resolver = LabelResolver::new(
        default_translator("en"),
        labels(r#"{ "errorNavigatorSingular": "issue" }"#),
        Labels::default(),
    );
    assert_eq!(resolver.error_word(1), "issue");
    assert_eq!(resolver.error_word(2), "errors");
    assert_eq!(resolver.error_word(0), "errors");
}

#[test]
fn error_navigation_combines_counts_and_word() {
    let resolver = LabelResolver::new(default_translator("en"), Labels::default(), Labels::default());
    assert_eq!(resolver.error_navigation(1, 1), "1/1 error");
    assert_eq!(resolver.error_navigation(2, 5), "2/5 errors");

    let custom = LabelResolver::new(
        default_translator("en"),
        Labels::default(),
        labels(r#"{ "errorNavigatorPlural": "problems" }"#),
    );
    assert_eq!(custom.error_navigation(3, 4), "3/4 problems");
}

#[test]
fn pagination_text() {
    let resolver = LabelResolver::new(default_translator("en"), Labels::default(), Labels::default());
    assert_eq!(resolver.page_of(1, 3), "Page 1 of 3");
    assert_eq!(resolver.show_size(25), "Show 25");
}
