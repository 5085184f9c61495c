//! Removal of `Unnamed`-prefixed columns.
//!
//! Spreadsheets exported with an index column come back with headers like
//! `Unnamed: 0`. Those artifacts carry no data the user named, so they are
//! dropped unconditionally after parsing, before any selection happens.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::Result;

/// Header prefix identifying index artifacts. The match is case sensitive.
pub const UNNAMED_PREFIX: &str = "Unnamed";

/// Drop every column whose name starts with [`UNNAMED_PREFIX`].
///
/// Returns the number of columns removed. Remaining columns keep their
/// relative order and contents.
pub fn strip_unnamed_columns(df: &mut DataFrame) -> Result<usize> {
    let doomed: Vec<String> = df
        .get_column_names()
        .iter()
        .filter(|name| name.starts_with(UNNAMED_PREFIX))
        .map(|name| name.to_string())
        .collect();
    for name in &doomed {
        df.drop_in_place(name)?;
    }
    if !doomed.is_empty() {
        debug!(dropped = doomed.len(), columns = ?doomed, "stripped unnamed columns");
    }
    Ok(doomed.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame_with_index_artifact() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Unnamed: 0".into(), &[0i64, 1]).into_column(),
            Series::new("A".into(), &[1i64, 2]).into_column(),
            Series::new("B".into(), &["x", "y"]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn test_strip_removes_unnamed_columns() {
        let mut df = frame_with_index_artifact();
        let dropped = strip_unnamed_columns(&mut df).unwrap();
        assert_eq!(dropped, 1);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_strip_keeps_remaining_columns_intact() {
        let mut df = frame_with_index_artifact();
        let before_a = df.column("A").unwrap().clone();
        strip_unnamed_columns(&mut df).unwrap();
        assert!(df.column("A").unwrap().as_materialized_series().equals(
            before_a.as_materialized_series()
        ));
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_strip_is_case_sensitive() {
        let mut df = DataFrame::new(vec![
            Series::new("unnamed: 0".into(), &[0i64]).into_column(),
            Series::new("Unnamed: 1".into(), &[1i64]).into_column(),
        ])
        .unwrap();
        let dropped = strip_unnamed_columns(&mut df).unwrap();
        assert_eq!(dropped, 1);
        assert!(df.column("unnamed: 0").is_ok());
    }

    #[test]
    fn test_strip_noop_without_artifacts() {
        let mut df = DataFrame::new(vec![
            Series::new("A".into(), &[1i64]).into_column(),
        ])
        .unwrap();
        assert_eq!(strip_unnamed_columns(&mut df).unwrap(), 0);
        assert_eq!(df.width(), 1);
    }

    #[test]
    fn test_strip_can_remove_every_column() {
        let mut df = DataFrame::new(vec![
            Series::new("Unnamed: 0".into(), &[0i64]).into_column(),
            Series::new("Unnamed: 1".into(), &[1i64]).into_column(),
        ])
        .unwrap();
        assert_eq!(strip_unnamed_columns(&mut df).unwrap(), 2);
        assert_eq!(df.width(), 0);
    }
}
