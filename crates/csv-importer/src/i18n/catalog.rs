//! Locale -> key -> template storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::error::LoadError;

/// Raw message templates for one locale, keyed by message key.
pub type Messages = HashMap<String, String>;

/// All message templates, keyed by locale identifier.
///
/// Serializes as a plain JSON object:
///
/// ```
/// use csv_importer::Catalog;
///
/// let catalog = Catalog::from_json_str(r#"{
///     "en": { "title": "CSV Import" },
///     "es": { "title": "Importar CSV" }
/// }"#).unwrap();
///
/// assert_eq!(catalog.get("es", "title"), Some("Importar CSV"));
/// assert_eq!(catalog.get("fr", "title"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    locales: HashMap<String, Messages>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        serde_json::from_str(content)
            .map_err(|e| LoadError::from_json(PathBuf::from("<string>"), &e))
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| LoadError::from_json(path.to_path_buf(), &e))
    }

    /// Insert a single template, creating the locale if needed.
    ///
    /// Replaces any existing template for the same locale and key.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Add (or replace) all messages for a locale.
    pub fn with_locale<K, V>(
        mut self,
        locale: impl Into<String>,
        messages: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let messages = messages
            .into_iter()
            .map(|(key, template)| (key.into(), template.into()))
            .collect();
        self.locales.insert(locale.into(), messages);
        self
    }

    /// Look up a raw template.
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }

    /// All messages for a locale, if it is present.
    pub fn messages(&self, locale: &str) -> Option<&Messages> {
        self.locales.get(locale)
    }

    /// Whether the catalog has an entry for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locale identifiers, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Keys defined for a locale, sorted. Empty when the locale is absent.
    pub fn keys(&self, locale: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .locales
            .get(locale)
            .map(|messages| messages.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}

impl FromIterator<(String, Messages)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Messages)>>(iter: I) -> Self {
        Catalog {
            locales: iter.into_iter().collect(),
        }
    }
}
