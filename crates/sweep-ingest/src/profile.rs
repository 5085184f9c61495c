//! Column profiling.
//!
//! Each column is classified once, right after parsing, and the profiles
//! travel with the dataset so later stages never re-inspect dtypes.

use polars::prelude::{DataFrame, DataType};
use sweep_model::{ColumnKind, ColumnProfile};

/// Classify every column of `df` in frame order.
///
/// A column with no values at all is `MissingOnly` regardless of its dtype,
/// so a fully blank spreadsheet column is never treated as numeric.
pub fn profile_columns(df: &DataFrame) -> Vec<ColumnProfile> {
    df.get_columns()
        .iter()
        .map(|column| {
            let null_count = column.null_count();
            let kind = if null_count == column.len() {
                ColumnKind::MissingOnly
            } else if is_numeric_dtype(column.dtype()) {
                ColumnKind::Numeric
            } else {
                ColumnKind::Text
            };
            ColumnProfile::new(column.name().as_str(), kind, null_count)
        })
        .collect()
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
