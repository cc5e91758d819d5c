//! Internal AST types for the messages! macro.

use proc_macro2::Span;
use syn::Ident;
use syn::ext::IdentExt;

/// Top-level macro input: one block per locale, reference locale first.
pub struct MacroInput {
    pub locales: Vec<LocaleBlock>,
}

/// A locale block: `en { key = "template"; ... }`
pub struct LocaleBlock {
    pub name: SpannedIdent,
    pub messages: Vec<MessageDefinition>,
}

/// A single message: `key = "template";`
pub struct MessageDefinition {
    pub key: SpannedIdent,
    pub template: Template,
}

/// A template string literal with its span.
pub struct Template {
    pub value: String,
    pub span: Span,
}

/// Wrapper for identifiers that preserves span information.
#[derive(Clone)]
pub struct SpannedIdent {
    pub name: String,
    pub span: Span,
}

impl SpannedIdent {
    /// Keeps the identifier text without any `r#` prefix.
    pub fn new(ident: &Ident) -> Self {
        Self {
            name: ident.unraw().to_string(),
            span: ident.span(),
        }
    }

    /// Create a SpannedIdent from a string and span.
    pub fn from_str(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}
