//! Chart column selection.

use polars::prelude::{Column, DataFrame};
use sweep_model::{ColumnKind, ColumnProfile};

use crate::error::Result;

/// Most numeric columns a quick-look chart will plot. Datasets with more
/// numeric columns chart only the first two.
pub const MAX_CHART_COLUMNS: usize = 2;

/// Numeric columns chosen for a quick-look chart.
#[derive(Debug, Clone)]
pub struct ChartData {
    /// Chosen column names, at most [`MAX_CHART_COLUMNS`], in dataset order.
    pub columns: Vec<String>,
    /// Values of the chosen columns.
    pub data: DataFrame,
}

/// Pick the first numeric columns of `df` for charting.
///
/// Selection follows current dataset order, so a reordering via column
/// selection changes which columns chart. Returns `None` when no column is
/// numeric.
pub fn chart_data(df: &DataFrame, profiles: &[ColumnProfile]) -> Result<Option<ChartData>> {
    let columns: Vec<String> = profiles
        .iter()
        .filter(|p| p.kind == ColumnKind::Numeric)
        .take(MAX_CHART_COLUMNS)
        .map(|p| p.name.clone())
        .collect();
    if columns.is_empty() {
        return Ok(None);
    }
    let mut gathered: Vec<Column> = Vec::with_capacity(columns.len());
    for name in &columns {
        gathered.push(df.column(name)?.clone());
    }
    Ok(Some(ChartData {
        columns,
        data: DataFrame::new(gathered)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame() -> (DataFrame, Vec<ColumnProfile>) {
        let df = DataFrame::new(vec![
            Series::new("t".into(), &["a", "b"]).into_column(),
            Series::new("x".into(), &[1i64, 2]).into_column(),
            Series::new("y".into(), &[0.5f64, 1.5]).into_column(),
            Series::new("z".into(), &[10i64, 20]).into_column(),
        ])
        .unwrap();
        let profiles = vec![
            ColumnProfile::new("t", ColumnKind::Text, 0),
            ColumnProfile::new("x", ColumnKind::Numeric, 0),
            ColumnProfile::new("y", ColumnKind::Numeric, 0),
            ColumnProfile::new("z", ColumnKind::Numeric, 0),
        ];
        (df, profiles)
    }

    #[test]
    fn test_chart_takes_first_two_numeric_columns() {
        let (df, profiles) = frame();
        let chart = chart_data(&df, &profiles).unwrap().unwrap();
        assert_eq!(chart.columns, vec!["x", "y"]);
        assert_eq!(chart.data.width(), 2);
        assert_eq!(chart.data.height(), 2);
    }

    #[test]
    fn test_chart_with_single_numeric_column() {
        let df = DataFrame::new(vec![
            Series::new("only".into(), &[1i64]).into_column(),
        ])
        .unwrap();
        let profiles = vec![ColumnProfile::new("only", ColumnKind::Numeric, 0)];
        let chart = chart_data(&df, &profiles).unwrap().unwrap();
        assert_eq!(chart.columns, vec!["only"]);
    }

    #[test]
    fn test_chart_without_numeric_columns_is_none() {
        let df = DataFrame::new(vec![
            Series::new("t".into(), &["a"]).into_column(),
        ])
        .unwrap();
        let profiles = vec![ColumnProfile::new("t", ColumnKind::Text, 0)];
        assert!(chart_data(&df, &profiles).unwrap().is_none());
    }

    #[test]
    fn test_missing_only_columns_never_chart() {
        let df = DataFrame::new(vec![
            Series::new("gone".into(), &[None::<f64>]).into_column(),
        ])
        .unwrap();
        let profiles = vec![ColumnProfile::new("gone", ColumnKind::MissingOnly, 1)];
        assert!(chart_data(&df, &profiles).unwrap().is_none());
    }
}
