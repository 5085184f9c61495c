//! CSV serialization into an in-memory buffer.

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::error::Result;

/// Serialize `df` as CSV bytes: header row, comma separator, `\n` record
/// terminator, empty fields for nulls. No index column is written.
///
/// The frame is cloned internally; the caller's data is never touched.
pub fn csv_bytes(df: &DataFrame) -> Result<Vec<u8>> {
    let mut working = df.clone();
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(&mut working)?;
    Ok(buffer)
}
