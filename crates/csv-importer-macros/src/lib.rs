use proc_macro::TokenStream;

mod codegen;
mod input;
mod parse;
mod validate;

/// Declares message catalogs with compile-time checked keys.
///
/// The first locale block is the reference shape: its keys become the
/// variants of a generated `Message` enum. Later blocks are translations and
/// may only use keys and placeholders the reference declares.
///
/// # Generated Code
///
/// - `enum Message` with one CamelCase variant per reference key, implementing
///   `::csv_importer::MessageKey` and `Display`
/// - `const SOURCE_LOCALE: &str` naming the reference locale
/// - `fn catalog() -> ::csv_importer::Catalog` holding every block
///
/// Invoke it at most once per module.
///
/// # Example
///
/// ```ignore
/// messages! {
///     en {
///         title = "CSV Import";
///         errorCount = "{count} error | {count} errors";
///     }
///     es {
///         title = "Importar CSV";
///     }
/// }
///
/// // Generated: pub enum Message { Title, ErrorCount }
/// // Generated: pub const SOURCE_LOCALE: &str = "en";
/// // Generated: pub fn catalog() -> ::csv_importer::Catalog
/// ```
#[proc_macro]
pub fn messages(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as input::MacroInput);

    if let Err(e) = validate::validate(&input) {
        return e.to_compile_error().into();
    }

    codegen::codegen(&input).into()
}
