//! UI label overrides.
//!
//! Labels are resolved in three layers: labels passed to a single modal,
//! then labels configured globally for the importer, then the translator.

use serde::{Deserialize, Serialize};

use crate::i18n::TypedTranslator;
use crate::messages::Message;
use crate::params;

/// Optional label overrides, keyed in JSON by camelCase names.
///
/// ```
/// use csv_importer::Labels;
///
/// let labels: Labels = serde_json::from_str(r#"{ "submitButton": "Send" }"#).unwrap();
/// assert_eq!(labels.get("submitButton"), Some("Send"));
/// assert_eq!(labels.get("cancelButton"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    /// Modal title.
    pub title: Option<String>,
    /// Upload area text when no file is selected.
    pub no_file_selected: Option<String>,
    pub upload_button: Option<String>,
    /// Heading of the missing columns alert.
    pub missing_columns_title: Option<String>,
    /// Heading shown when the column count does not match.
    pub column_count_mismatch_title: Option<String>,
    pub submit_button: Option<String>,
    /// Submit button text while processing.
    pub submit_button_processing: Option<String>,
    pub cancel_button: Option<String>,
    pub reupload_button: Option<String>,
    /// Close button aria-label.
    pub close_button: Option<String>,
    /// Tooltip for a row with no errors.
    pub row_tooltip_ready: Option<String>,
    /// Tooltip for a row with validation errors.
    pub row_tooltip_error: Option<String>,
    /// Tooltip for a row already imported.
    pub row_tooltip_processed: Option<String>,
    /// Alert shown when rows still have errors after submit.
    pub rows_have_errors: Option<String>,
    /// Action text to jump to the first row error.
    pub jump_to_first_error: Option<String>,
    /// Error navigator word for exactly one error.
    pub error_navigator_singular: Option<String>,
    /// Error navigator word for zero or several errors.
    pub error_navigator_plural: Option<String>,
}

impl Labels {
    /// Every label key, as used in JSON and by [`Labels::get`].
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "noFileSelected",
        "uploadButton",
        "missingColumnsTitle",
        "columnCountMismatchTitle",
        "submitButton",
        "submitButtonProcessing",
        "cancelButton",
        "reuploadButton",
        "closeButton",
        "rowTooltipReady",
        "rowTooltipError",
        "rowTooltipProcessed",
        "rowsHaveErrors",
        "jumpToFirstError",
        "errorNavigatorSingular",
        "errorNavigatorPlural",
    ];

    /// The override for a camelCase label key, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        let label = match key {
            "title" => &self.title,
            "noFileSelected" => &self.no_file_selected,
            "uploadButton" => &self.upload_button,
            "missingColumnsTitle" => &self.missing_columns_title,
            "columnCountMismatchTitle" => &self.column_count_mismatch_title,
            "submitButton" => &self.submit_button,
            "submitButtonProcessing" => &self.submit_button_processing,
            "cancelButton" => &self.cancel_button,
            "reuploadButton" => &self.reupload_button,
            "closeButton" => &self.close_button,
            "rowTooltipReady" => &self.row_tooltip_ready,
            "rowTooltipError" => &self.row_tooltip_error,
            "rowTooltipProcessed" => &self.row_tooltip_processed,
            "rowsHaveErrors" => &self.rows_have_errors,
            "jumpToFirstError" => &self.jump_to_first_error,
            "errorNavigatorSingular" => &self.error_navigator_singular,
            "errorNavigatorPlural" => &self.error_navigator_plural,
            _ => return None,
        };
        label.as_deref()
    }

    /// Layer `over` on top of `self`; labels set in `over` win.
    pub fn merge(self, over: Labels) -> Labels {
        Labels {
            title: over.title.or(self.title),
            no_file_selected: over.no_file_selected.or(self.no_file_selected),
            upload_button: over.upload_button.or(self.upload_button),
            missing_columns_title: over.missing_columns_title.or(self.missing_columns_title),
            column_count_mismatch_title: over
                .column_count_mismatch_title
                .or(self.column_count_mismatch_title),
            submit_button: over.submit_button.or(self.submit_button),
            submit_button_processing: over
                .submit_button_processing
                .or(self.submit_button_processing),
            cancel_button: over.cancel_button.or(self.cancel_button),
            reupload_button: over.reupload_button.or(self.reupload_button),
            close_button: over.close_button.or(self.close_button),
            row_tooltip_ready: over.row_tooltip_ready.or(self.row_tooltip_ready),
            row_tooltip_error: over.row_tooltip_error.or(self.row_tooltip_error),
            row_tooltip_processed: over.row_tooltip_processed.or(self.row_tooltip_processed),
            rows_have_errors: over.rows_have_errors.or(self.rows_have_errors),
            jump_to_first_error: over.jump_to_first_error.or(self.jump_to_first_error),
            error_navigator_singular: over
                .error_navigator_singular
                .or(self.error_navigator_singular),
            error_navigator_plural: over.error_navigator_plural.or(self.error_navigator_plural),
        }
    }
}

/// Resolves UI text: component labels, then global labels, then messages.
#[derive(Debug, Clone)]
pub struct LabelResolver {
    translator: TypedTranslator<Message>,
    labels: Labels,
}

impl LabelResolver {
    /// Combine global and per-component labels over a translator.
    pub fn new(translator: TypedTranslator<Message>, global: Labels, component: Labels) -> Self {
        Self {
            translator,
            labels: global.merge(component),
        }
    }

    /// The effective overrides after merging.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Text for a camelCase label key.
    ///
    /// Falls back to the translator, which returns the key itself (and logs
    /// a warning) when no message exists either.
    pub fn label(&self, key: &str) -> String {
        match self.labels.get(key) {
            Some(label) => label.to_string(),
            None => self.translator.untyped().t(key),
        }
    }

    /// Text for a built-in message, honouring a label override of the same key.
    pub fn message(&self, message: Message) -> String {
        self.label(message.key())
    }

    /// "N error(s)" summary.
    pub fn error_count(&self, count: usize) -> String {
        self.translator.t_plural(
            Message::ErrorCount,
            &params! { "count" => count },
            plural_count(count),
        )
    }

    /// The error navigator's noun for `count` errors.
    pub fn error_word(&self, count: usize) -> String {
        let label = if count == 1 {
            &self.labels.error_navigator_singular
        } else {
            &self.labels.error_navigator_plural
        };
        match label {
            Some(word) => word.clone(),
            None => self
                .translator
                .t_plural(Message::ErrorWord, &params! {}, plural_count(count)),
        }
    }

    /// Error navigator text, e.g. "2/5 errors".
    pub fn error_navigation(&self, current: usize, total: usize) -> String {
        self.translator.t_with(
            Message::ErrorNavigation,
            &params! {
                "current" => current,
                "total" => total,
                "word" => self.error_word(total),
            },
        )
    }

    /// Pagination text, e.g. "Page 1 of 3".
    pub fn page_of(&self, current: usize, total: usize) -> String {
        self.translator.t_with(
            Message::PaginationPageOf,
            &params! { "current" => current, "total" => total },
        )
    }

    /// Page size selector text, e.g. "Show 25".
    pub fn show_size(&self, size: usize) -> String {
        self.translator
            .t_with(Message::PaginationShowSize, &params! { "size" => size })
    }
}

fn plural_count(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
