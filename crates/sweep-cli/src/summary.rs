use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use sweep_model::{AppliedOperation, CleaningOp, SessionWarning};
use sweep_transform::any_to_string;

use crate::types::BatchReport;

pub fn print_summary(report: &BatchReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Format"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Columns"),
        header_cell("Applied"),
        header_cell("Warnings"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_in = 0usize;
    let mut total_out = 0usize;
    for file in &report.files {
        total_in += file.rows_in;
        total_out += file.rows_out;
        table.add_row(vec![
            Cell::new(&file.file)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(file.format),
            Cell::new(file.rows_in),
            Cell::new(file.rows_out),
            Cell::new(file.columns.join(", ")),
            applied_cell(&file.applied),
            warnings_cell(&file.warnings),
            output_cell(file.output.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_in).add_attribute(Attribute::Bold),
        Cell::new(total_out).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    if !report.errors.is_empty() {
        eprintln!("Skipped:");
        for error in &report.errors {
            eprintln!("- {error}");
        }
    }
}

/// Render the first `limit` rows of a frame as a table.
pub fn frame_table(df: &DataFrame, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let shown = df.height().min(limit);
    for row_idx in 0..shown {
        let row: Vec<String> = df
            .get_columns()
            .iter()
            .map(|column| {
                column
                    .get(row_idx)
                    .map(any_to_string)
                    .unwrap_or_default()
            })
            .collect();
        table.add_row(row);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn applied_cell(applied: &[AppliedOperation]) -> Cell {
    if applied.is_empty() {
        return dim_cell("-");
    }
    let lines: Vec<String> = applied.iter().map(applied_line).collect();
    Cell::new(lines.join("\n"))
}

fn applied_line(record: &AppliedOperation) -> String {
    match record.op {
        CleaningOp::FillMissingNumericWithMean => {
            format!("{} ({} cells)", record.op, record.cells_changed)
        }
        CleaningOp::RemoveDuplicates | CleaningOp::DropRowsWithAnyNull => {
            format!("{} (-{} rows)", record.op, record.rows_removed())
        }
    }
}

fn warnings_cell(warnings: &[SessionWarning]) -> Cell {
    if warnings.is_empty() {
        return dim_cell("-");
    }
    let lines: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            SessionWarning::EmptySelection => "empty selection",
            SessionWarning::NoNumericData => "no numeric data",
        })
        .collect();
    Cell::new(lines.join("\n")).fg(Color::Yellow)
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display().to_string())
            .fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
