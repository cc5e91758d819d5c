//! Tests for the built-in messages and the typed translator.

use csv_importer::messages::{Message, SOURCE_LOCALE, catalog, default_translator, translator_with};
use csv_importer::{Catalog, MessageKey, TranslatorOptions, TypedTranslator, params};

#[test]
fn every_builtin_message_resolves() {
    let i18n = default_translator("en");
    assert!(i18n.missing_keys().is_empty());
    assert_eq!(Message::ALL.len(), 19);
}

#[test]
fn builtin_keys_keep_their_catalog_names() {
    assert_eq!(Message::NoFileSelected.key(), "noFileSelected");
    assert_eq!(Message::PaginationPageOf.as_str(), "paginationPageOf");
    assert_eq!(Message::Title.to_string(), "title");
    assert_eq!(SOURCE_LOCALE, "en");
}

#[test]
fn typed_translation_matches_untyped() {
    let i18n = default_translator("en");
    assert_eq!(i18n.t(Message::Title), "CSV Import");
    assert_eq!(i18n.untyped().t("title"), "CSV Import");
}

#[test]
fn error_count_pluralizes() {
    let i18n = default_translator("en");
    assert_eq!(
        i18n.t_plural(Message::ErrorCount, &params! { "count" => 1 }, 1),
        "1 error"
    );
    assert_eq!(
        i18n.t_plural(Message::ErrorCount, &params! { "count" => 4 }, 4),
        "4 errors"
    );
}

#[test]
fn pagination_interpolates() {
    let i18n = default_translator("en");
    assert_eq!(
        i18n.t_with(
            Message::PaginationPageOf,
            &params! { "current" => 2, "total" => 7 }
        ),
        "Page 2 of 7"
    );
}

#[test]
fn unknown_locale_falls_back_to_english() {
    let i18n = default_translator("ja");
    assert_eq!(i18n.t(Message::CancelButton), "Cancel");
}

#[test]
fn overrides_merge_key_by_key() {
    let overrides = Catalog::new()
        .with_locale("es", [("title", "Importar CSV"), ("cancelButton", "Cancelar")])
        .with_locale("en", [("submitButton", "Send")]);
    let i18n = translator_with("es", &overrides);

    assert_eq!(i18n.t(Message::Title), "Importar CSV");
    assert_eq!(i18n.t(Message::SubmitButton), "Send");
    assert_eq!(i18n.t(Message::CloseButton), "Close");
    assert!(i18n.missing_keys().is_empty());
}

#[test]
fn typed_global_is_detached() {
    let t = default_translator("en").global().t;
    assert_eq!(t(Message::SubmitButtonProcessing, &params! {}, None), "Importing...");
}

#[test]
fn missing_keys_lists_unresolved_messages() {
    let partial = Catalog::new().with_locale("en", [("title", "CSV Import")]);
    let i18n: TypedTranslator<Message> =
        TypedTranslator::new(TranslatorOptions::builder().messages(partial).build());

    let missing = i18n.missing_keys();
    assert_eq!(missing.len(), Message::ALL.len() - 1);
    assert!(!missing.contains(&Message::Title));
}

#[test]
fn builtin_catalog_contains_only_source_locale() {
    assert_eq!(catalog().locales(), vec!["en"]);
}
