//! Translator restricted to a fixed set of message keys.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::i18n::translator::{Global, Translator, TranslatorOptions};
use crate::i18n::value::Params;

/// A closed set of message keys, usually generated by
/// [`messages!`](crate::messages).
pub trait MessageKey: Copy + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// The catalog key this value stands for.
    fn as_str(self) -> &'static str;
}

/// A [`Translator`] whose keys are checked at compile time.
///
/// Runtime behavior is identical to the wrapped translator; only the key
/// parameter type differs.
pub struct TypedTranslator<K> {
    translator: Translator,
    _keys: PhantomData<fn(K)>,
}

/// Create a typed translator from options.
pub fn create_typed_i18n<K: MessageKey>(options: TranslatorOptions) -> TypedTranslator<K> {
    TypedTranslator::new(options)
}

impl<K: MessageKey> TypedTranslator<K> {
    /// Create a typed translator from options.
    pub fn new(options: TranslatorOptions) -> Self {
        Self::from_translator(Translator::new(options))
    }

    /// Wrap an existing translator.
    pub fn from_translator(translator: Translator) -> Self {
        Self {
            translator,
            _keys: PhantomData,
        }
    }

    /// The untyped translator underneath.
    pub fn untyped(&self) -> &Translator {
        &self.translator
    }

    /// Translate `key`. See [`Translator::translate`].
    pub fn translate(&self, key: K, values: &Params, count: Option<i64>) -> String {
        self.translator.translate(key.as_str(), values, count)
    }

    /// Translate `key` with no values and no count.
    pub fn t(&self, key: K) -> String {
        self.translate(key, &Params::new(), None)
    }

    /// Translate `key` with interpolation values and no count.
    pub fn t_with(&self, key: K, values: &Params) -> String {
        self.translate(key, values, None)
    }

    /// Translate `key` selecting the plural form for `count`.
    pub fn t_plural(&self, key: K, values: &Params, count: i64) -> String {
        self.translate(key, values, Some(count))
    }

    /// Keys of `K` that resolve in neither the active nor the fallback locale.
    pub fn missing_keys(&self) -> Vec<K> {
        K::ALL
            .iter()
            .copied()
            .filter(|key| self.translator.lookup(key.as_str()).is_err())
            .collect()
    }

    /// A typed translation function that does not borrow this translator.
    pub fn global(
        &self,
    ) -> Global<impl Fn(K, &Params, Option<i64>) -> String + Clone + Send + Sync + use<K>> {
        let translator = self.translator.clone();
        Global {
            t: move |key: K, values: &Params, count: Option<i64>| {
                translator.translate(key.as_str(), values, count)
            },
        }
    }
}

impl<K> Clone for TypedTranslator<K> {
    fn clone(&self) -> Self {
        Self {
            translator: self.translator.clone(),
            _keys: PhantomData,
        }
    }
}

impl<K> Debug for TypedTranslator<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TypedTranslator")
            .field("translator", &self.translator)
            .finish()
    }
}
