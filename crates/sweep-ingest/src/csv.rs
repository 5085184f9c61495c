//! CSV parsing over in-memory bytes.

use std::io::Cursor;

use polars::prelude::{CsvReadOptions, CsvReader, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Number of leading rows sampled for schema inference.
const INFER_SCHEMA_ROWS: usize = 100;

/// Parse CSV bytes into a `DataFrame`.
///
/// The first row is the header; empty fields parse as null. Column types are
/// inferred from a bounded sample so a numeric column stays numeric without
/// scanning the whole payload.
pub fn read_csv(name: &str, bytes: &[u8]) -> Result<DataFrame> {
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS));
    let df = CsvReader::new(Cursor::new(bytes))
        .with_options(options)
        .finish()
        .map_err(|e| IngestError::CsvParse {
            name: name.to_string(),
            message: e.to_string(),
        })?;
    if df.height() == 0 {
        return Err(IngestError::EmptyDataset {
            name: name.to_string(),
        });
    }
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    #[test]
    fn test_read_csv_basic() {
        let df = read_csv("data.csv", b"A,B\n1,x\n2,y\n").unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        assert_eq!(df.column("A").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("B").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_read_csv_empty_fields_become_null() {
        let df = read_csv("data.csv", b"A,B\n1,x\n,y\n").unwrap();
        assert_eq!(df.column("A").unwrap().null_count(), 1);
        assert_eq!(df.column("B").unwrap().null_count(), 0);
    }

    #[test]
    fn test_read_csv_without_rows_is_an_error() {
        let result = read_csv("data.csv", b"A,B\n");
        assert!(matches!(result, Err(IngestError::EmptyDataset { .. })));
    }

    #[test]
    fn test_read_csv_malformed_payload() {
        let result = read_csv("data.csv", b"");
        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }

    #[test]
    fn test_read_csv_float_column() {
        let df = read_csv("data.csv", b"value\n1.5\n2.5\n").unwrap();
        assert_eq!(df.column("value").unwrap().dtype(), &DataType::Float64);
    }
}
