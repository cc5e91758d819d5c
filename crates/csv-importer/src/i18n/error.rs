//! Error types for the translation engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a message catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog is not a JSON object of locale -> key -> template strings.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl LoadError {
    /// Build a parse error from a `serde_json` failure.
    pub(crate) fn from_json(path: PathBuf, err: &serde_json::Error) -> Self {
        LoadError::Parse {
            path,
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// A message lookup failure.
///
/// [`Translator::translate`](crate::Translator::translate) never returns this;
/// it degrades to the key instead. It is only surfaced by
/// [`Translator::lookup`](crate::Translator::lookup).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Key not present in the active or the fallback locale.
    #[error("missing translation for key: \"{key}\"")]
    MissingTranslation { key: String },
}
