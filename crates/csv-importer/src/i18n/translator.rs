//! The translator: key lookup with locale fallback, plural form selection and
//! interpolation.

use std::sync::Arc;

use bon::Builder;
use csv_importer_syntax::select_form;
use tracing::warn;

use crate::i18n::catalog::Catalog;
use crate::i18n::error::TranslateError;
use crate::i18n::template::interpolate;
use crate::i18n::value::Params;

/// Prefix of the diagnostic logged for a missing key.
const MISSING_KEY_PREFIX: &str = "[i18n] Missing translation for key:";

/// Configuration for a [`Translator`].
///
/// No validation happens here: a locale absent from `messages` simply
/// produces misses at translation time.
///
/// # Example
///
/// ```
/// use csv_importer::{Catalog, TranslatorOptions};
///
/// let options = TranslatorOptions::builder()
///     .locale("es")
///     .fallback_locale("en")
///     .messages(Catalog::new().with_locale("en", [("title", "CSV Import")]))
///     .build();
///
/// assert_eq!(options.locale, "es");
/// assert_eq!(options.fallback_locale, "en");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct TranslatorOptions {
    /// Active locale (e.g., "en", "es").
    #[builder(default = "en".to_string())]
    pub locale: String,

    /// Locale consulted when the active locale lacks a key.
    #[builder(default = "en".to_string())]
    pub fallback_locale: String,

    /// Message templates for every locale.
    #[builder(default)]
    pub messages: Catalog,
}

/// Resolves message keys into display strings.
///
/// A translator is immutable once constructed. It is cheap to clone; clones
/// share the same configuration. To switch locale, build a new translator.
///
/// # Example
///
/// ```
/// use csv_importer::{Catalog, Translator, TranslatorOptions, params};
///
/// let messages = Catalog::new().with_locale("en", [
///     ("greeting", "Hello {name}"),
///     ("rows", "no rows | one row | {count} rows"),
/// ]);
/// let i18n = Translator::new(TranslatorOptions::builder().messages(messages).build());
///
/// assert_eq!(i18n.translate("greeting", &params! { "name" => "Ana" }, None), "Hello Ana");
/// assert_eq!(i18n.translate("rows", &params! { "count" => 4 }, Some(4)), "4 rows");
/// assert_eq!(i18n.translate("rows", &params! {}, Some(0)), "no rows");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    options: Arc<TranslatorOptions>,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        TranslatorOptions::builder().build()
    }
}

/// Translation function detached from its [`Translator`].
///
/// `t` owns a handle on the translator's configuration, so it can be cloned,
/// stored or sent to another thread as a plain callable.
#[derive(Debug, Clone, Copy)]
pub struct Global<F> {
    pub t: F,
}

/// Create a translator from options.
pub fn create_i18n(options: TranslatorOptions) -> Translator {
    Translator::new(options)
}

impl Translator {
    /// Create a translator from options.
    pub fn new(options: TranslatorOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    /// The active locale.
    pub fn locale(&self) -> &str {
        &self.options.locale
    }

    /// The fallback locale.
    pub fn fallback_locale(&self) -> &str {
        &self.options.fallback_locale
    }

    /// The catalog this translator reads from.
    pub fn messages(&self) -> &Catalog {
        &self.options.messages
    }

    /// Resolve the raw template for `key`, without logging.
    ///
    /// Tries the active locale, then the fallback locale.
    pub fn lookup(&self, key: &str) -> Result<&str, TranslateError> {
        let catalog = &self.options.messages;
        catalog
            .get(&self.options.locale, key)
            .or_else(|| catalog.get(&self.options.fallback_locale, key))
            .ok_or_else(|| TranslateError::MissingTranslation {
                key: key.to_string(),
            })
    }

    /// Translate `key` with interpolation `values` and an optional plural `count`.
    ///
    /// When the key is found in neither locale, a warning is logged and the key
    /// itself is returned. When `count` is `Some`, the template is first reduced
    /// to one of its `" | "`-separated forms. Placeholders are then substituted
    /// from `values`; unknown placeholders are left as written.
    pub fn translate(&self, key: &str, values: &Params, count: Option<i64>) -> String {
        let message = match self.lookup(key) {
            Ok(message) => message,
            Err(TranslateError::MissingTranslation { .. }) => {
                warn!(key, "{MISSING_KEY_PREFIX} \"{key}\"");
                return key.to_string();
            }
        };

        let message = match count {
            Some(count) => select_form(message, count),
            None => message,
        };

        interpolate(message, values)
    }

    /// Translate `key` with no values and no count.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &Params::new(), None)
    }

    /// Translate `key` with interpolation values and no count.
    pub fn t_with(&self, key: &str, values: &Params) -> String {
        self.translate(key, values, None)
    }

    /// Translate `key` selecting the plural form for `count`.
    pub fn t_plural(&self, key: &str, values: &Params, count: i64) -> String {
        self.translate(key, values, Some(count))
    }

    /// A translation function that does not borrow this translator.
    ///
    /// ```
    /// use csv_importer::{Catalog, Translator, TranslatorOptions, params};
    ///
    /// let t = {
    ///     let messages = Catalog::new().with_locale("en", [("simple", "Hello World")]);
    ///     Translator::new(TranslatorOptions::builder().messages(messages).build()).global().t
    /// };
    ///
    /// assert_eq!(t("simple", &params! {}, None), "Hello World");
    /// ```
    pub fn global(
        &self,
    ) -> Global<impl Fn(&str, &Params, Option<i64>) -> String + Clone + Send + Sync + use<>>
    {
        let translator = self.clone();
        Global {
            t: move |key: &str, values: &Params, count: Option<i64>| {
                translator.translate(key, values, count)
            },
        }
    }
}
