//! Non-UI logic behind the CSV import modal.
//!
//! - [`i18n`]: a small translator with locale fallback, `" | "` plural forms
//!   and `{name}` interpolation.
//! - [`messages`]: the importer's built-in message catalog.
//! - [`labels`]: component and global label overrides layered over the translator.
//! - [`input_type`]: JSON Schema to input widget hints.
//! - [`progress`]: submit progress bar state.

// Lets `messages!` expand to `::csv_importer::...` paths inside this crate too.
extern crate self as csv_importer;

pub mod i18n;
pub mod input_type;
pub mod labels;
pub mod messages;
pub mod progress;

pub use i18n::{
    Catalog, CatalogWarning, Global, LoadError, LocaleCoverage, MessageKey, Messages, Params,
    TranslateError, Translator, TranslatorOptions, TypedTranslator, Value, create_i18n,
    create_typed_i18n,
};
pub use input_type::{InputType, InputTypeInfo, SelectOption};
pub use labels::{LabelResolver, Labels};
pub use progress::ProgressBar;

// Re-export the messages! macro
pub use csv_importer_macros::messages;

/// Creates a [`Params`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, booleans,
/// strings and `Option`s can be passed directly.
///
/// # Example
///
/// ```
/// use csv_importer::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Params::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Params::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
