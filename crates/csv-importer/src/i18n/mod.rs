//! Lightweight translation engine.
//!
//! Resolves a message key against the active locale, then the fallback
//! locale, reduces the template to one plural form when a count is given and
//! substitutes `{name}` placeholders. Missing keys never fail: the key itself
//! is returned and a warning is logged.

mod catalog;
mod error;
mod template;
mod translator;
mod typed;
mod validate;
mod value;

pub use catalog::{Catalog, Messages};
pub use error::{LoadError, TranslateError};
pub use template::{Segment, Template, interpolate, parse_template};
pub use translator::{Global, Translator, TranslatorOptions, create_i18n};
pub use typed::{MessageKey, TypedTranslator, create_typed_i18n};
pub use validate::{CatalogWarning, LocaleCoverage};
pub use value::{Params, Value};
