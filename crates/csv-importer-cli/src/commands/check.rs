//! Implementation of the `csvi check` command.

use std::path::PathBuf;

use csv_importer::CatalogWarning;
use csv_importer::messages::SOURCE_LOCALE;
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use super::{CommandError, load_catalog, require_locale};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog file to check (JSON)
    pub file: PathBuf,

    /// Locale the other locales are translated from
    #[arg(long, default_value = SOURCE_LOCALE)]
    pub source: String,

    /// Exit with a non-zero code if any warning is reported
    #[arg(long)]
    pub strict: bool,

    /// Output warnings as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32, CommandError> {
    let catalog = load_catalog(&args.file)?;
    require_locale(&catalog, &args.source, &args.file)?;

    let warnings: Vec<CatalogWarning> = catalog
        .locales()
        .into_iter()
        .filter(|locale| *locale != args.source)
        .flat_map(|locale| catalog.validate(&args.source, locale))
        .collect();

    debug!(
        file = %args.file.display(),
        warnings = warnings.len(),
        "catalog checked"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&warnings)?);
    } else if warnings.is_empty() {
        println!(
            "{} {}",
            "ok:".if_supports_color(Stream::Stdout, |s| s.green()),
            args.file.display()
        );
    } else {
        for warning in &warnings {
            println!(
                "{} {warning}",
                "warning:".if_supports_color(Stream::Stdout, |s| s.yellow())
            );
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
