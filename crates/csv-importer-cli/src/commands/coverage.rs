//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use csv_importer::LocaleCoverage;
use csv_importer::messages::SOURCE_LOCALE;

use super::{CommandError, load_catalog, require_locale};
use crate::output::table::format_coverage_table;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Catalog file (JSON).
    pub file: PathBuf,

    /// Source locale whose keys define completeness.
    #[arg(long, default_value = SOURCE_LOCALE)]
    pub source: String,

    /// Locales to check coverage for (comma-separated). Defaults to every
    /// other locale in the catalog.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32, CommandError> {
    let catalog = load_catalog(&args.file)?;
    require_locale(&catalog, &args.source, &args.file)?;

    let targets: Vec<String> = if args.lang.is_empty() {
        catalog
            .locales()
            .into_iter()
            .filter(|locale| *locale != args.source)
            .map(ToString::to_string)
            .collect()
    } else {
        args.lang.clone()
    };

    // A requested locale absent from the file reports every key missing
    let coverage: Vec<LocaleCoverage> = targets
        .iter()
        .map(|locale| catalog.coverage(&args.source, locale))
        .collect();

    let any_incomplete = coverage.iter().any(|c| !c.is_complete());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&coverage)?);
    } else {
        println!("{}", format_coverage_table(&coverage));

        for locale in &coverage {
            if !locale.missing.is_empty() {
                println!("\nMissing in {}:", locale.locale);
                for key in &locale.missing {
                    println!("  - {key}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
