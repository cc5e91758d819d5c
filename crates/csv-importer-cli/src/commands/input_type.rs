//! Implementation of the `csvi input-type` command.

use std::path::PathBuf;

use csv_importer::InputTypeInfo;
use csv_importer::input_type::columns_from_object_schema;

use super::{CommandError, read_input};
use crate::output::JsonDiagnostic;
use crate::output::table::format_columns_table;

/// Arguments for the input-type command.
#[derive(Debug, clap::Args)]
pub struct InputTypeArgs {
    /// JSON Schema file
    pub file: PathBuf,

    /// Treat the schema as an object and classify each property
    #[arg(long)]
    pub columns: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the input-type command.
pub fn run_input_type(args: InputTypeArgs) -> Result<i32, CommandError> {
    let content = read_input(&args.file)?;
    let schema: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| JsonDiagnostic::from_json_error(&args.file, &content, &e))?;

    if args.columns {
        let columns = columns_from_object_schema(&schema);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&columns)?);
        } else {
            println!("{}", format_columns_table(&columns));
        }
        return Ok(exitcode::OK);
    }

    let info = InputTypeInfo::from_json_schema(&schema);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.input_type.as_str());
        if let Some(options) = &info.options {
            for option in options {
                println!("  - {}", option.value);
            }
        }
        if let Some(min) = info.min {
            println!("  min: {min}");
        }
        if let Some(max) = info.max {
            println!("  max: {max}");
        }
    }

    Ok(exitcode::OK)
}
