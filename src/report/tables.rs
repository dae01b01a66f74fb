//! Table rendering for DataFrames

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use polars::prelude::*;

/// Render a DataFrame as a comfy-table and print it to stdout.
///
/// Column names become a bold header row; float cells are printed with
/// four decimal places, integer-valued floats without a fraction.
pub fn display_dataframe(df: &DataFrame) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| Cell::new(name.as_str()).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for row_idx in 0..df.height() {
        let cells: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| {
                let value = column
                    .get(row_idx)
                    .unwrap_or(AnyValue::Null);
                Cell::new(format_value(&value))
            })
            .collect();
        table.add_row(cells);
    }

    println!("{table}");
}

/// Format a single cell value for display.
fn format_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format_float(*v),
        AnyValue::Float32(v) => format_float(*v as f64),
        other => other.to_string(),
    }
}

fn format_float(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.4}", v)
    }
}
