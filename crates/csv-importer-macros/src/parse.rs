//! Parse implementations for converting TokenStream to macro AST.

use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitStr, Token};

use crate::input::{LocaleBlock, MacroInput, MessageDefinition, SpannedIdent, Template};

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut locales = Vec::new();
        while !input.is_empty() {
            locales.push(input.parse()?);
        }
        Ok(MacroInput { locales })
    }
}

impl Parse for LocaleBlock {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // Either `en { ... }` or `"pt-BR" { ... }`
        let name = if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            SpannedIdent::from_str(lit.value(), lit.span())
        } else {
            let ident = input.call(Ident::parse_any)?;
            SpannedIdent::new(&ident)
        };

        let content;
        syn::braced!(content in input);

        let mut messages = Vec::new();
        while !content.is_empty() {
            messages.push(content.parse()?);
        }

        Ok(LocaleBlock { name, messages })
    }
}

impl Parse for MessageDefinition {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key = input.call(Ident::parse_any)?;
        input.parse::<Token![=]>()?;
        let lit: LitStr = input.parse()?;
        input.parse::<Token![;]>()?;

        Ok(MessageDefinition {
            key: SpannedIdent::new(&key),
            template: Template {
                value: lit.value(),
                span: lit.span(),
            },
        })
    }
}
