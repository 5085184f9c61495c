//! Standalone cleaning operations.
//!
//! Pure functions over DataFrames that [`FileSession::apply`] delegates to.
//! Each returns how many rows or cells it touched so callers can report the
//! effect without re-diffing the data.
//!
//! [`FileSession::apply`]: crate::FileSession::apply

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use sweep_model::{ColumnKind, ColumnProfile};
use tracing::debug;

use crate::error::Result;
use crate::value::{any_to_f64, any_to_string};

// Unit separator keeps "a|b" + "c" distinct from "a" + "b|c" in composite keys.
const KEY_SEPARATOR: char = '\u{1f}';
// Stands in for a missing cell: nulls compare equal to each other, never to
// empty text.
const NULL_KEY: char = '\u{0}';
// Prefixes any key metacharacter occurring inside cell text, so a cell
// containing the separator or the null sentinel cannot forge a boundary.
const KEY_ESCAPE: char = '\u{10}';

fn push_escaped(composite: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, KEY_SEPARATOR | NULL_KEY | KEY_ESCAPE) {
            composite.push(KEY_ESCAPE);
        }
        composite.push(c);
    }
}

/// Drop every row whose full set of values matches an earlier row.
///
/// Rows compare on all current columns. Missing values count as equal, so
/// two rows null in the same cells and identical elsewhere collapse to one.
/// The first occurrence is kept. Returns the number of rows removed.
pub fn remove_duplicates(df: &mut DataFrame) -> Result<usize> {
    let row_count = df.height();
    if row_count == 0 || df.width() == 0 {
        return Ok(0);
    }
    let columns = df.get_columns();
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(row_count);
    for idx in 0..row_count {
        let mut composite = String::new();
        for (pos, column) in columns.iter().enumerate() {
            if pos > 0 {
                composite.push(KEY_SEPARATOR);
            }
            match column.get(idx)? {
                AnyValue::Null => composite.push(NULL_KEY),
                value => push_escaped(&mut composite, &any_to_string(value)),
            }
        }
        keep.push(seen.insert(composite));
    }
    let removed = keep.iter().filter(|flag| !**flag).count();
    if removed == 0 {
        return Ok(0);
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    *df = df.filter(&mask)?;
    debug!(removed, "duplicate rows removed");
    Ok(removed)
}

/// Replace missing values in numeric columns with that column's mean.
///
/// Only columns profiled as numeric are touched; text columns pass through
/// even when they hold digit-like strings. The mean is computed over the
/// values present at call time. A column with no values at all has no mean
/// and is left missing. Returns the number of cells filled.
pub fn fill_missing_numeric_with_mean(
    df: &mut DataFrame,
    profiles: &[ColumnProfile],
) -> Result<usize> {
    let mut filled = 0;
    for profile in profiles {
        if profile.kind != ColumnKind::Numeric {
            continue;
        }
        let column = df.column(&profile.name)?;
        if column.null_count() == 0 {
            continue;
        }
        let mut sum = 0.0;
        let mut present = 0usize;
        let mut values: Vec<Option<f64>> = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            let value = any_to_f64(column.get(idx)?);
            if let Some(v) = value {
                sum += v;
                present += 1;
            }
            values.push(value);
        }
        if present == 0 {
            debug!(column = %profile.name, "no observed values, leaving column missing");
            continue;
        }
        let mean = sum / present as f64;
        let missing = values.len() - present;
        let series = Series::new(
            profile.name.as_str().into(),
            values
                .into_iter()
                .map(|v| v.unwrap_or(mean))
                .collect::<Vec<f64>>(),
        );
        df.with_column(series)?;
        filled += missing;
    }
    if filled > 0 {
        debug!(filled, "missing numeric cells filled with column means");
    }
    Ok(filled)
}

/// Drop every row containing at least one missing value.
///
/// Returns the number of rows removed.
pub fn drop_null_rows(df: &mut DataFrame) -> Result<usize> {
    let row_count = df.height();
    if row_count == 0 || df.width() == 0 {
        return Ok(0);
    }
    let columns = df.get_columns();
    if columns.iter().all(|column| column.null_count() == 0) {
        return Ok(0);
    }
    let mut keep = Vec::with_capacity(row_count);
    for idx in 0..row_count {
        let mut complete = true;
        for column in columns {
            if matches!(column.get(idx)?, AnyValue::Null) {
                complete = false;
                break;
            }
        }
        keep.push(complete);
    }
    let removed = keep.iter().filter(|flag| !**flag).count();
    if removed == 0 {
        return Ok(0);
    }
    let mask = BooleanChunked::from_slice("drop_nulls".into(), &keep);
    *df = df.filter(&mask)?;
    debug!(removed, "rows with missing values removed");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataType, IntoColumn};
    use sweep_model::ColumnProfile;

    fn profile(name: &str, kind: ColumnKind) -> ColumnProfile {
        ColumnProfile::new(name, kind, 0)
    }

    #[test]
    fn test_remove_duplicates_keeps_first_occurrence() {
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), &[1i64, 2, 1, 1]).into_column(),
            Series::new("b".into(), &["x", "y", "x", "z"]).into_column(),
        ])
        .unwrap();

        let removed = remove_duplicates(&mut df).unwrap();

        assert_eq!(removed, 1); // only the (1, "x") repeat goes
        assert_eq!(df.height(), 3);
        let a = df.column("a").unwrap().i64().unwrap();
        assert_eq!(a.get(0), Some(1));
        assert_eq!(a.get(1), Some(2));
        assert_eq!(a.get(2), Some(1)); // (1, "z") survives
    }

    #[test]
    fn test_remove_duplicates_treats_nulls_as_equal() {
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), &[Some(1i64), Some(1), Some(1)]).into_column(),
            Series::new("b".into(), &[None::<&str>, None, Some("")]).into_column(),
        ])
        .unwrap();

        let removed = remove_duplicates(&mut df).unwrap();

        // the two null rows collapse; the empty-string row is distinct
        assert_eq!(removed, 1);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_remove_duplicates_keeps_distinct_whole_floats() {
        let mut df = DataFrame::new(vec![
            Series::new("v".into(), &[10.0f64, 1.0, 100.0]).into_column(),
        ])
        .unwrap();

        let removed = remove_duplicates(&mut df).unwrap();

        assert_eq!(removed, 0);
        assert_eq!(df.height(), 3);
        let v = df.column("v").unwrap().f64().unwrap();
        assert_eq!(v.get(0), Some(10.0));
        assert_eq!(v.get(1), Some(1.0));
        assert_eq!(v.get(2), Some(100.0));
    }

    #[test]
    fn test_remove_duplicates_cell_text_cannot_forge_key_boundaries() {
        // A separator inside a cell must not shift the column boundary.
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), &["a\u{1f}b", "a"]).into_column(),
            Series::new("b".into(), &["c", "b\u{1f}c"]).into_column(),
        ])
        .unwrap();
        assert_eq!(remove_duplicates(&mut df).unwrap(), 0);
        assert_eq!(df.height(), 2);

        // Text equal to the null sentinel must not compare equal to a null.
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), &[Some("\u{0}"), None]).into_column(),
        ])
        .unwrap();
        assert_eq!(remove_duplicates(&mut df).unwrap(), 0);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_remove_duplicates_noop_on_unique_rows() {
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), &[1i64, 2, 3]).into_column(),
        ])
        .unwrap();
        assert_eq!(remove_duplicates(&mut df).unwrap(), 0);
        assert_eq!(df.height(), 3);
    }

    #[test]
    fn test_fill_mean_uses_present_values() {
        let mut df = DataFrame::new(vec![
            Series::new("v".into(), &[Some(1.0f64), None, Some(3.0)]).into_column(),
        ])
        .unwrap();
        let profiles = vec![profile("v", ColumnKind::Numeric)];

        let filled = fill_missing_numeric_with_mean(&mut df, &profiles).unwrap();

        assert_eq!(filled, 1);
        let v = df.column("v").unwrap().f64().unwrap();
        assert_eq!(v.get(1), Some(2.0)); // mean of 1 and 3
        assert_eq!(df.column("v").unwrap().null_count(), 0);
    }

    #[test]
    fn test_fill_mean_promotes_int_columns_to_float() {
        let mut df = DataFrame::new(vec![
            Series::new("n".into(), &[Some(1i64), None, Some(2)]).into_column(),
        ])
        .unwrap();
        let profiles = vec![profile("n", ColumnKind::Numeric)];

        fill_missing_numeric_with_mean(&mut df, &profiles).unwrap();

        assert_eq!(df.column("n").unwrap().dtype(), &DataType::Float64);
        let n = df.column("n").unwrap().f64().unwrap();
        assert_eq!(n.get(1), Some(1.5));
    }

    #[test]
    fn test_fill_mean_skips_text_and_missing_only_columns() {
        let mut df = DataFrame::new(vec![
            Series::new("t".into(), &[Some("7"), None]).into_column(),
            Series::new("gone".into(), &[None::<f64>, None]).into_column(),
        ])
        .unwrap();
        let profiles = vec![
            profile("t", ColumnKind::Text),
            profile("gone", ColumnKind::MissingOnly),
        ];

        let filled = fill_missing_numeric_with_mean(&mut df, &profiles).unwrap();

        assert_eq!(filled, 0);
        assert_eq!(df.column("t").unwrap().null_count(), 1);
        assert_eq!(df.column("gone").unwrap().null_count(), 2);
    }

    #[test]
    fn test_fill_mean_leaves_all_null_numeric_column_missing() {
        let mut df = DataFrame::new(vec![
            Series::new("v".into(), &[None::<f64>, None]).into_column(),
        ])
        .unwrap();
        let profiles = vec![profile("v", ColumnKind::Numeric)];

        let filled = fill_missing_numeric_with_mean(&mut df, &profiles).unwrap();

        assert_eq!(filled, 0);
        assert_eq!(df.column("v").unwrap().null_count(), 2);
    }

    #[test]
    fn test_fill_mean_preserves_complete_column_dtype() {
        let mut df = DataFrame::new(vec![
            Series::new("whole".into(), &[1i64, 2, 3]).into_column(),
        ])
        .unwrap();
        let profiles = vec![profile("whole", ColumnKind::Numeric)];

        fill_missing_numeric_with_mean(&mut df, &profiles).unwrap();

        assert_eq!(df.column("whole").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_drop_null_rows_removes_incomplete_rows() {
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), &[Some(1i64), Some(2), None]).into_column(),
            Series::new("b".into(), &[Some("x"), None, Some("z")]).into_column(),
        ])
        .unwrap();

        let removed = drop_null_rows(&mut df).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(df.height(), 1);
        let a = df.column("a").unwrap().i64().unwrap();
        assert_eq!(a.get(0), Some(1));
    }

    #[test]
    fn test_drop_null_rows_noop_on_complete_frame() {
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), &[1i64, 2]).into_column(),
        ])
        .unwrap();
        assert_eq!(drop_null_rows(&mut df).unwrap(), 0);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_ops_never_grow_the_frame() {
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), &[Some(1i64), Some(1), None]).into_column(),
        ])
        .unwrap();
        let profiles = vec![profile("a", ColumnKind::Numeric)];
        let before = df.height();

        remove_duplicates(&mut df).unwrap();
        assert!(df.height() <= before);
        let after_dedupe = df.height();

        fill_missing_numeric_with_mean(&mut df, &profiles).unwrap();
        assert_eq!(df.height(), after_dedupe);

        drop_null_rows(&mut df).unwrap();
        assert!(df.height() <= after_dedupe);
    }
}
