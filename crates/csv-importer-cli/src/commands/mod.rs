//! CLI command implementations.

mod check;
mod coverage;
mod input_type;
mod translate;

use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use csv_importer::Catalog;
use miette::Diagnostic;
use thiserror::Error;

use crate::output::JsonDiagnostic;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use input_type::{InputTypeArgs, run_input_type};
pub use translate::{TranslateArgs, run_translate};

/// A failure that stops a command before it produces output.
#[derive(Debug, Error, Diagnostic)]
pub enum CommandError {
    #[error("cannot read {}: {source}", path.display())]
    #[diagnostic(code(csvi::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Json(Box<JsonDiagnostic>),

    #[error("locale '{locale}' is not in {}", path.display())]
    #[diagnostic(code(csvi::locale), help("available locales: {available}"))]
    UnknownLocale {
        locale: String,
        path: PathBuf,
        available: String,
    },

    #[error("failed to write output: {0}")]
    #[diagnostic(code(csvi::output))]
    Output(#[from] serde_json::Error),
}

impl CommandError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Read { .. } => exitcode::NOINPUT,
            CommandError::Json(_) | CommandError::UnknownLocale { .. } => exitcode::DATAERR,
            CommandError::Output(_) => exitcode::SOFTWARE,
        }
    }
}

impl From<JsonDiagnostic> for CommandError {
    fn from(diagnostic: JsonDiagnostic) -> Self {
        CommandError::Json(Box::new(diagnostic))
    }
}

/// Read a file to a string.
fn read_input(path: &Path) -> Result<String, CommandError> {
    read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON catalog file.
fn load_catalog(path: &Path) -> Result<Catalog, CommandError> {
    let content = read_input(path)?;
    Catalog::from_json_str(&content)
        .map_err(|e| JsonDiagnostic::from_load_error(path, &content, &e).into())
}

/// Fail unless `catalog` defines `locale`.
fn require_locale(catalog: &Catalog, locale: &str, path: &Path) -> Result<(), CommandError> {
    if catalog.has_locale(locale) {
        return Ok(());
    }
    Err(CommandError::UnknownLocale {
        locale: locale.to_string(),
        path: path.to_path_buf(),
        available: catalog.locales().join(", "),
    })
}
