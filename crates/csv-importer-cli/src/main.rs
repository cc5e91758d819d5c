//! csv-importer CLI entry point.
//!
//! Provides command-line tools for working with importer message catalogs:
//! - `csvi translate` - Resolve a message key from a catalog file
//! - `csvi check` - Validate a catalog against its source locale
//! - `csvi coverage` - Report translation coverage per locale
//! - `csvi input-type` - Print input widget hints for a JSON Schema

mod commands;
mod output;

use std::io::{IsTerminal, stderr};
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, CoverageArgs, InputTypeArgs, TranslateArgs, run_check, run_coverage,
    run_input_type, run_translate,
};
use tracing_subscriber::EnvFilter;

/// csv-importer catalog and schema tools.
#[derive(Debug, Parser)]
#[command(name = "csvi")]
#[command(about = "csv-importer catalog and schema tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a message key
    Translate(TranslateArgs),
    /// Check a catalog file against its source locale
    Check(CheckArgs),
    /// Report translation coverage across locales
    Coverage(CoverageArgs),
    /// Print input widget hints for a JSON Schema
    InputType(InputTypeArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Translate(args) => run_translate(args),
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::InputType(args) => run_input_type(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            exit(code);
        }
    }
}
