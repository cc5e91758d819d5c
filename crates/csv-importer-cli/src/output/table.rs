//! Table formatting utilities for CLI output.

use std::collections::BTreeMap;

use comfy_table::{ContentArrangement, Table, presets};
use csv_importer::{InputTypeInfo, LocaleCoverage};

/// Format coverage data as a table.
pub fn format_coverage_table(coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Coverage", "Missing"]);

    for locale in coverage {
        table.add_row(vec![
            locale.locale.clone(),
            format!("{}/{}", locale.translated, locale.total),
            locale.missing.len().to_string(),
        ]);
    }

    table
}

/// Format per-column input hints as a table.
pub fn format_columns_table(columns: &BTreeMap<String, InputTypeInfo>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Column", "Input", "Options", "Min", "Max"]);

    for (name, info) in columns {
        table.add_row(vec![
            name.clone(),
            info.input_type.as_str().to_string(),
            info.options
                .as_ref()
                .map(|options| {
                    options
                        .iter()
                        .map(|option| option.value.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default(),
            format_bound(info.min),
            format_bound(info.max),
        ]);
    }

    table
}

fn format_bound(bound: Option<f64>) -> String {
    bound.map(|b| b.to_string()).unwrap_or_default()
}
