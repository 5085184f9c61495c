//! XLSX serialization into an in-memory buffer.

use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::Workbook;
use sweep_transform::{any_to_f64, any_to_string};

use crate::error::Result;

/// Serialize `df` as an XLSX workbook with one worksheet.
///
/// The first row holds the column names; data rows follow. Numbers are
/// written as numbers, booleans as booleans, everything else as text.
/// Missing values leave their cell blank. No index column is written.
pub fn xlsx_bytes(df: &DataFrame) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col_idx, name) in df.get_column_names().iter().enumerate() {
        sheet.write_string(0, col_idx as u16, name.as_str())?;
    }
    let columns = df.get_columns();
    for row_idx in 0..df.height() {
        let sheet_row = (row_idx + 1) as u32;
        for (col_idx, column) in columns.iter().enumerate() {
            let sheet_col = col_idx as u16;
            match column.get(row_idx)? {
                AnyValue::Null => {}
                AnyValue::Boolean(b) => {
                    sheet.write_boolean(sheet_row, sheet_col, b)?;
                }
                AnyValue::String(s) => {
                    sheet.write_string(sheet_row, sheet_col, s)?;
                }
                AnyValue::StringOwned(ref s) => {
                    sheet.write_string(sheet_row, sheet_col, s.as_str())?;
                }
                other => match any_to_f64(other.clone()) {
                    Some(number) => {
                        sheet.write_number(sheet_row, sheet_col, number)?;
                    }
                    None => {
                        sheet.write_string(sheet_row, sheet_col, &any_to_string(other))?;
                    }
                },
            }
        }
    }
    let bytes = workbook.save_to_buffer()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_xlsx_bytes_produces_a_zip_container() {
        let df = DataFrame::new(vec![
            Series::new("a".into(), &[1i64]).into_column(),
        ])
        .unwrap();
        let bytes = xlsx_bytes(&df).unwrap();
        // XLSX is a zip archive; the magic bytes are stable.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_xlsx_bytes_handles_empty_frame_columns() {
        let df = DataFrame::new(vec![
            Series::new("only_header".into(), Vec::<i64>::new()).into_column(),
        ])
        .unwrap();
        assert!(xlsx_bytes(&df).is_ok());
    }
}
