//! Consistency checks between a source locale and its translations.

use std::fmt::{Display, Formatter, Result as FmtResult};

use csv_importer_syntax::{placeholder_names, split_forms};
use serde::Serialize;

use crate::i18n::catalog::Catalog;

/// A problem found when comparing a translation against its source locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    /// The translation defines a key the source locale does not have.
    UnknownKey { key: String, locale: String },

    /// Placeholder names differ between the source and the translation.
    PlaceholderMismatch {
        key: String,
        locale: String,
        /// Used in the source, absent from the translation.
        missing: Vec<String>,
        /// Used in the translation, absent from the source.
        extra: Vec<String>,
    },

    /// The number of `" | "`-separated plural forms differs.
    PluralFormMismatch {
        key: String,
        locale: String,
        source_forms: usize,
        target_forms: usize,
    },
}

impl CatalogWarning {
    /// The message key the warning is about.
    pub fn key(&self) -> &str {
        match self {
            CatalogWarning::UnknownKey { key, .. }
            | CatalogWarning::PlaceholderMismatch { key, .. }
            | CatalogWarning::PluralFormMismatch { key, .. } => key,
        }
    }
}

impl Display for CatalogWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CatalogWarning::UnknownKey { key, locale } => {
                write!(f, "[{locale}] '{key}' is not defined in the source locale")
            }
            CatalogWarning::PlaceholderMismatch {
                key,
                locale,
                missing,
                extra,
            } => {
                write!(f, "[{locale}] '{key}' placeholders differ from the source")?;
                if !missing.is_empty() {
                    write!(f, "; missing: {}", missing.join(", "))?;
                }
                if !extra.is_empty() {
                    write!(f, "; unknown: {}", extra.join(", "))?;
                }
                Ok(())
            }
            CatalogWarning::PluralFormMismatch {
                key,
                locale,
                source_forms,
                target_forms,
            } => write!(
                f,
                "[{locale}] '{key}' has {target_forms} plural form(s), source has {source_forms}"
            ),
        }
    }
}

/// How much of a source locale a translation covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCoverage {
    /// Locale identifier of the translation.
    pub locale: String,
    /// Source keys present in the translation.
    pub translated: usize,
    /// Keys in the source locale.
    pub total: usize,
    /// Source keys absent from the translation, sorted.
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    /// Whether every source key is translated.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Catalog {
    /// Validate `target` against `source`.
    ///
    /// Reports keys unknown to the source, placeholder drift and plural form
    /// count drift, ordered by key. Returns nothing when either locale is
    /// absent. Missing keys are not warnings here; see [`Catalog::coverage`].
    ///
    /// ```
    /// use csv_importer::{Catalog, CatalogWarning};
    ///
    /// let catalog = Catalog::new()
    ///     .with_locale("en", [("hello", "Hello {name}")])
    ///     .with_locale("es", [("hello", "Hola {nombre}"), ("extra", "Extra")]);
    ///
    /// let warnings = catalog.validate("en", "es");
    /// assert_eq!(warnings.len(), 2);
    /// assert!(matches!(warnings[0], CatalogWarning::UnknownKey { .. }));
    /// ```
    pub fn validate(&self, source: &str, target: &str) -> Vec<CatalogWarning> {
        let mut warnings = Vec::new();

        let (Some(source_messages), Some(target_messages)) =
            (self.messages(source), self.messages(target))
        else {
            return warnings;
        };

        for key in self.keys(target) {
            let translated = &target_messages[key];
            let Some(original) = source_messages.get(key) else {
                warnings.push(CatalogWarning::UnknownKey {
                    key: key.to_string(),
                    locale: target.to_string(),
                });
                continue;
            };

            let expected = placeholder_names(original);
            let found = placeholder_names(translated);
            if expected != found {
                warnings.push(CatalogWarning::PlaceholderMismatch {
                    key: key.to_string(),
                    locale: target.to_string(),
                    missing: expected.difference(&found).map(ToString::to_string).collect(),
                    extra: found.difference(&expected).map(ToString::to_string).collect(),
                });
            }

            let source_forms = split_forms(original).len();
            let target_forms = split_forms(translated).len();
            if source_forms != target_forms {
                warnings.push(CatalogWarning::PluralFormMismatch {
                    key: key.to_string(),
                    locale: target.to_string(),
                    source_forms,
                    target_forms,
                });
            }
        }

        warnings
    }

    /// Coverage of `source` keys by `target`.
    ///
    /// An absent target locale has every source key missing.
    pub fn coverage(&self, source: &str, target: &str) -> LocaleCoverage {
        let source_keys = self.keys(source);
        let missing: Vec<String> = source_keys
            .iter()
            .filter(|key| self.get(target, key).is_none())
            .map(ToString::to_string)
            .collect();

        LocaleCoverage {
            locale: target.to_string(),
            translated: source_keys.len() - missing.len(),
            total: source_keys.len(),
            missing,
        }
    }
}
