//! Miette diagnostics for malformed JSON input files.

use std::path::Path;

use csv_importer::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A JSON syntax or shape error pointing into the offending file.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid {kind}: {message}")]
#[diagnostic(code(csvi::json))]
pub struct JsonDiagnostic {
    kind: &'static str,

    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl JsonDiagnostic {
    /// Point at `line`:`column` (both 1-based) of `content`.
    pub fn at(
        kind: &'static str,
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
    ) -> Self {
        let offset = byte_offset(content, line, column);

        JsonDiagnostic {
            kind,
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help: None,
        }
    }

    /// A catalog that failed to parse.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Self {
        let (line, column, message) = match err {
            LoadError::Parse {
                line,
                column,
                message,
                ..
            } => (*line, *column, message.clone()),
            LoadError::Io { .. } => (1, 1, err.to_string()),
        };
        JsonDiagnostic::at("catalog", path, content, line, column, message).with_help(
            "a catalog is an object of locales, each an object of message keys to template strings",
        )
    }

    /// A schema file that is not valid JSON.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        JsonDiagnostic::at(
            "schema",
            path,
            content,
            err.line(),
            err.column(),
            err.to_string(),
        )
    }

    fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }
}

/// Byte offset of a 1-based `line`:`column`, clamped to the content length.
///
/// serde_json reports column 0 for errors at the start of a line.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>()
        + column.saturating_sub(1);
    offset.min(content.len())
}

#[cfg(test)]
mod tests {
    use super::byte_offset;

    #[test]
    fn offset_counts_preceding_lines() {
        let content = "{\n  \"en\": [\n}";
        assert_eq!(byte_offset(content, 1, 1), 0);
        assert_eq!(byte_offset(content, 2, 9), 10);
        assert_eq!(byte_offset(content, 3, 1), 12);
    }

    #[test]
    fn offset_counts_crlf_line_endings() {
        let content = "{\r\n  \"en\": [\r\n}";
        assert_eq!(byte_offset(content, 3, 1), 14);
        assert_eq!(&content[byte_offset(content, 3, 1)..], "}");
        assert_eq!(&content[byte_offset(content, 2, 3)..byte_offset(content, 2, 7)], "\"en\"");
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(byte_offset("{}", 9, 9), 2);
        assert_eq!(byte_offset("", 1, 0), 0);
    }
}
