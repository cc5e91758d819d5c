//! Code generation for the messages! macro.
//!
//! Produces the `Message` key enum, `SOURCE_LOCALE` and `catalog()`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::input::MacroInput;

/// Main code generation entry point. Expects validated input.
pub fn codegen(input: &MacroInput) -> TokenStream {
    let Some(reference) = input.locales.first() else {
        return TokenStream::new();
    };

    let variants: Vec<_> = reference
        .messages
        .iter()
        .map(|m| format_ident!("{}", variant_name(&m.key.name), span = m.key.span))
        .collect();
    let keys: Vec<&str> = reference
        .messages
        .iter()
        .map(|m| m.key.name.as_str())
        .collect();
    let docs: Vec<String> = reference
        .messages
        .iter()
        .map(|m| format!("`{}`: \"{}\"", m.key.name, m.template.value))
        .collect();
    let source_locale = &reference.name.name;
    let catalog = generate_catalog(input);

    quote! {
        /// Message keys declared by the source locale.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Message {
            #(
                #[doc = #docs]
                #variants,
            )*
        }

        impl Message {
            /// The catalog key for this message.
            pub const fn key(self) -> &'static str {
                match self {
                    #(Message::#variants => #keys,)*
                }
            }
        }

        impl ::csv_importer::MessageKey for Message {
            const ALL: &'static [Self] = &[#(Message::#variants),*];

            fn as_str(self) -> &'static str {
                self.key()
            }
        }

        impl ::core::fmt::Display for Message {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.key())
            }
        }

        /// Locale the message keys were declared in.
        pub const SOURCE_LOCALE: &str = #source_locale;

        #catalog
    }
}

/// Generate `catalog()` inserting every template of every locale.
fn generate_catalog(input: &MacroInput) -> TokenStream {
    let inserts = input.locales.iter().flat_map(|locale| {
        let locale_name = &locale.name.name;
        locale.messages.iter().map(move |message| {
            let key = &message.key.name;
            let template = &message.template.value;
            quote! {
                catalog.insert(#locale_name, #key, #template);
            }
        })
    });

    quote! {
        /// Every declared message, for all locales.
        pub fn catalog() -> ::csv_importer::Catalog {
            let mut catalog = ::csv_importer::Catalog::new();
            #(#inserts)*
            catalog
        }
    }
}

/// CamelCase variant name for a message key.
///
/// `error_count` and `errorCount` both become `ErrorCount`.
pub fn variant_name(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    let mut word = first.to_ascii_uppercase().to_string();
                    word.push_str(chars.as_str());
                    word
                }
                None => String::new(),
            }
        })
        .collect()
}
