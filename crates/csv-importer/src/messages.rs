//! Built-in messages for the import modal.
//!
//! Hosts can translate the UI by supplying their own catalog for another
//! locale; anything missing falls back to these English messages.

use csv_importer_macros::messages;

use crate::i18n::{Catalog, TranslatorOptions, TypedTranslator, create_typed_i18n};

messages! {
    en {
        title = "CSV Import";
        noFileSelected = "No file selected";
        missingColumnsTitle = "The following columns are missing:";
        columnCountMismatchTitle = "The CSV has an unexpected number of columns";
        submitButton = "Import";
        submitButtonProcessing = "Importing...";
        cancelButton = "Cancel";
        reuploadButton = "Upload another file";
        closeButton = "Close";
        uploadButton = "Choose CSV File";
        rowTooltipReady = "Ready to import";
        rowTooltipError = "Click to jump to first error";
        rowTooltipProcessed = "Already imported";
        rowsHaveErrors = "One or more rows have error.";
        paginationPageOf = "Page {current} of {total}";
        paginationShowSize = "Show {size}";
        errorCount = "{count} error | {count} errors";
        errorWord = "error | errors";
        errorNavigation = "{current}/{total} {word}";
    }
}

/// Translator over the built-in messages with `locale` active.
///
/// English is the fallback, so every [`Message`] resolves.
pub fn default_translator(locale: &str) -> TypedTranslator<Message> {
    translator_with(locale, &Catalog::new())
}

/// Translator over the built-in messages plus host-supplied `overrides`.
///
/// Overrides win key by key; built-in messages they do not mention stay in
/// place, so English remains a complete fallback.
pub fn translator_with(locale: &str, overrides: &Catalog) -> TypedTranslator<Message> {
    let mut messages = catalog();
    for name in overrides.locales() {
        for key in overrides.keys(name) {
            if let Some(template) = overrides.get(name, key) {
                messages.insert(name, key, template);
            }
        }
    }

    create_typed_i18n(
        TranslatorOptions::builder()
            .locale(locale)
            .fallback_locale(SOURCE_LOCALE)
            .messages(messages)
            .build(),
    )
}
