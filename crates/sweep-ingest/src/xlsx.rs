//! XLSX parsing via calamine.
//!
//! Only the first worksheet is read. Row 0 is the header; blank header cells
//! receive positional fallback names (`column_1`, `column_2`, ...). Each
//! column's storage type is inferred from its cells before a Polars series is
//! built, so numbers survive as numbers instead of being stringified.

use std::io::Cursor;

use calamine::{Data, DataType, Reader, Xlsx};
use chrono::NaiveTime;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::error::{IngestError, Result};

/// Inferred storage type for one worksheet column.
#[derive(Clone, Copy)]
enum CellColumnType {
    Int64,
    Float64,
    Boolean,
    Text,
    Empty,
}

/// Parse the first worksheet of an XLSX workbook into a `DataFrame`.
pub fn read_xlsx(name: &str, bytes: &[u8]) -> Result<DataFrame> {
    let mut workbook = Xlsx::new(Cursor::new(bytes)).map_err(|e| IngestError::XlsxParse {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            name: name.to_string(),
        })?
        .map_err(|e| IngestError::XlsxParse {
            name: name.to_string(),
            message: e.to_string(),
        })?;

    let rows: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();
    if rows.len() < 2 {
        return Err(IngestError::EmptyDataset {
            name: name.to_string(),
        });
    }

    let headers: Vec<String> = rows[0]
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let header = cell.as_string().unwrap_or_else(|| cell.to_string());
            if header.trim().is_empty() {
                format!("column_{}", idx + 1)
            } else {
                header
            }
        })
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (col_idx, header) in headers.iter().enumerate() {
        let cells: Vec<Option<&Data>> = rows[1..].iter().map(|row| row.get(col_idx)).collect();
        columns.push(column_to_series(header, &cells).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Infer the storage type for a column of cells. Any text-like cell (string,
/// date, duration) makes the whole column text; otherwise numbers win, with
/// Int64 preferred when every value is whole.
fn infer_column_type(cells: &[Option<&Data>]) -> CellColumnType {
    let mut has_number = false;
    let mut has_bool = false;
    for cell in cells.iter().flatten() {
        match cell {
            Data::Empty | Data::Error(_) => {}
            Data::String(_) | Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => {
                return CellColumnType::Text;
            }
            Data::Int(_) | Data::Float(_) => has_number = true,
            Data::Bool(_) => has_bool = true,
        }
    }
    if has_number {
        let all_whole = cells.iter().flatten().all(|cell| {
            cell.as_f64()
                .is_none_or(|v| v.is_finite() && (v - v.trunc()).abs() < 1e-10)
        });
        if all_whole {
            CellColumnType::Int64
        } else {
            CellColumnType::Float64
        }
    } else if has_bool {
        CellColumnType::Boolean
    } else {
        CellColumnType::Empty
    }
}

/// Build a Polars series from a column of cells using the inferred type.
fn column_to_series(name: &str, cells: &[Option<&Data>]) -> Series {
    match infer_column_type(cells) {
        CellColumnType::Int64 => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|c| c.and_then(|cell| cell.as_i64()))
                .collect();
            Series::new(name.into(), values)
        }
        CellColumnType::Float64 => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|c| c.and_then(|cell| cell.as_f64()))
                .collect();
            Series::new(name.into(), values)
        }
        CellColumnType::Boolean => {
            let values: Vec<Option<bool>> = cells
                .iter()
                .map(|c| c.and_then(|cell| cell.get_bool()))
                .collect();
            Series::new(name.into(), values)
        }
        CellColumnType::Text => {
            let values: Vec<Option<String>> = cells.iter().map(|c| c.and_then(cell_to_text)).collect();
            Series::new(name.into(), values)
        }
        CellColumnType::Empty => Series::new_null(name.into(), cells.len()),
    }
}

/// Render a cell as text. Empty and error cells are missing; date cells
/// become ISO-8601 strings (date-only when the time component is midnight).
fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) => Some(v.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(_) => cell.as_datetime().map(format_cell_datetime),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

fn format_cell_datetime(value: chrono::NaiveDateTime) -> String {
    if value.time() == NaiveTime::MIN {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
