//! Tests for catalog loading, validation and coverage.

use std::io::Write;

use csv_importer::{Catalog, CatalogWarning, LoadError};
use tempfile::NamedTempFile;

fn source_and_translation() -> Catalog {
    Catalog::new()
        .with_locale(
            "en",
            [
                ("title", "CSV Import"),
                ("errorCount", "{count} error | {count} errors"),
                ("pageOf", "Page {current} of {total}"),
                ("cancel", "Cancel"),
            ],
        )
        .with_locale(
            "es",
            [
                ("title", "Importar CSV"),
                ("errorCount", "{count} error | {count} errores | {count} errores"),
                ("pageOf", "Página {actual} de {total}"),
                ("extra", "Extra"),
            ],
        )
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn parses_json_catalog() {
    let catalog = Catalog::from_json_str(
        r#"{ "en": { "a": "A", "b": "B {x}" }, "de": { "a": "Ä" } }"#,
    )
    .unwrap();

    assert_eq!(catalog.locales(), vec!["de", "en"]);
    assert_eq!(catalog.keys("en"), vec!["a", "b"]);
    assert_eq!(catalog.get("de", "a"), Some("Ä"));
    assert_eq!(catalog.get("de", "b"), None);
}

#[test]
fn rejects_non_string_templates() {
    let err = Catalog::from_json_str(r#"{ "en": { "a": 1 } }"#).unwrap_err();
    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path.to_string_lossy(), "<string>");
            assert_eq!(line, 1);
        }
        LoadError::Io { .. } => panic!("expected a parse error"),
    }
}

#[test]
fn loads_catalog_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "en": {{ "title": "CSV Import" }} }}"#).unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.get("en", "title"), Some("CSV Import"));
}

#[test]
fn reports_missing_file() {
    let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read '/nonexistent/catalog.json'"));
}

#[test]
fn parse_error_names_file_and_position() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\n  \"en\": [\n}}").unwrap();

    let err = Catalog::load(file.path()).unwrap_err();
    let LoadError::Parse { path, line, .. } = err else {
        panic!("expected a parse error");
    };
    assert_eq!(path, file.path());
    assert_eq!(line, 2);
}

#[test]
fn insert_replaces_and_creates_locales() {
    let mut catalog = Catalog::new();
    catalog.insert("en", "a", "first");
    catalog.insert("en", "a", "second");
    catalog.insert("it", "a", "primo");

    assert_eq!(catalog.get("en", "a"), Some("second"));
    assert!(catalog.has_locale("it"));
    assert!(catalog.keys("fr").is_empty());
}

#[test]
fn serializes_as_plain_object() {
    let catalog = Catalog::new().with_locale("en", [("a", "A")]);
    let json = serde_json::to_string(&catalog).unwrap();
    insta::assert_snapshot!(json, @r#"{"en":{"a":"A"}}"#);
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn validation_reports_each_problem_in_key_order() {
    let warnings = source_and_translation().validate("en", "es");

    assert_eq!(
        warnings,
        vec![
            CatalogWarning::PluralFormMismatch {
                key: "errorCount".to_string(),
                locale: "es".to_string(),
                source_forms: 2,
                target_forms: 3,
            },
            CatalogWarning::UnknownKey {
                key: "extra".to_string(),
                locale: "es".to_string(),
            },
            CatalogWarning::PlaceholderMismatch {
                key: "pageOf".to_string(),
                locale: "es".to_string(),
                missing: vec!["current".to_string()],
                extra: vec!["actual".to_string()],
            },
        ]
    );
}

#[test]
fn validation_messages_are_readable() {
    let warnings = source_and_translation().validate("en", "es");
    let text: Vec<String> = warnings.iter().map(ToString::to_string).collect();

    insta::assert_snapshot!(text.join("\n"), @r"
    [es] 'errorCount' has 3 plural form(s), source has 2
    [es] 'extra' is not defined in the source locale
    [es] 'pageOf' placeholders differ from the source; missing: current; unknown: actual
    ");
}

#[test]
fn validation_of_absent_locale_is_empty() {
    let catalog = source_and_translation();
    assert!(catalog.validate("en", "fr").is_empty());
    assert!(catalog.validate("fr", "es").is_empty());
}

#[test]
fn identical_locales_validate_cleanly() {
    let catalog = source_and_translation();
    assert!(catalog.validate("en", "en").is_empty());
}

#[test]
fn warning_key_accessor() {
    let warnings = source_and_translation().validate("en", "es");
    let keys: Vec<&str> = warnings.iter().map(CatalogWarning::key).collect();
    assert_eq!(keys, vec!["errorCount", "extra", "pageOf"]);
}

// =========================================================================
// Coverage
// =========================================================================

#[test]
fn coverage_counts_translated_source_keys() {
    let coverage = source_and_translation().coverage("en", "es");

    assert_eq!(coverage.locale, "es");
    assert_eq!(coverage.total, 4);
    assert_eq!(coverage.translated, 3);
    assert_eq!(coverage.missing, vec!["cancel".to_string()]);
    assert!(!coverage.is_complete());
}

#[test]
fn coverage_of_absent_locale_misses_everything() {
    let coverage = source_and_translation().coverage("en", "fr");
    assert_eq!(coverage.translated, 0);
    assert_eq!(coverage.missing.len(), 4);
}

#[test]
fn source_covers_itself() {
    assert!(source_and_translation().coverage("en", "en").is_complete());
}
