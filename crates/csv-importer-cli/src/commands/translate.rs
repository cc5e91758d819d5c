//! Implementation of the `csvi translate` command.

use std::path::PathBuf;

use csv_importer::messages::{SOURCE_LOCALE, catalog};
use csv_importer::{Params, TranslatorOptions, Value, create_i18n};
use serde::Serialize;

use super::{CommandError, load_catalog};

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Message key to translate
    pub key: String,

    /// Catalog file (JSON); defaults to the built-in messages
    #[arg(long, env = "CSVI_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Active locale
    #[arg(long, env = "CSVI_LOCALE", default_value = SOURCE_LOCALE)]
    pub locale: String,

    /// Locale consulted when the active locale lacks the key
    #[arg(long, default_value = SOURCE_LOCALE)]
    pub fallback: String,

    /// Interpolation values in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Count used to pick a plural form
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
struct TranslateResult<'a> {
    key: &'a str,
    locale: &'a str,
    found: bool,
    result: String,
}

/// Parse a name=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    if name.is_empty() {
        return Err(format!("invalid parameter format '{s}': empty name"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Run the translate command.
///
/// A missing key still prints the key itself, mirroring the translator, but
/// exits with `DATAERR`.
pub fn run_translate(args: TranslateArgs) -> Result<i32, CommandError> {
    let messages = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => catalog(),
    };

    let translator = create_i18n(
        TranslatorOptions::builder()
            .locale(args.locale.as_str())
            .fallback_locale(args.fallback.as_str())
            .messages(messages)
            .build(),
    );

    let params: Params = args
        .params
        .iter()
        .map(|(name, raw)| (name.clone(), Value::parse_literal(raw)))
        .collect();

    let found = translator.lookup(&args.key).is_ok();
    let result = translator.translate(&args.key, &params, args.count);

    if args.json {
        let output = TranslateResult {
            key: &args.key,
            locale: translator.locale(),
            found,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{result}");
    }

    Ok(if found {
        exitcode::OK
    } else {
        exitcode::DATAERR
    })
}
