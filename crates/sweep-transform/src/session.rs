//! Session state for one file moving through the pipeline.

use polars::prelude::{Column, DataFrame};
use sweep_model::{AppliedOperation, CleaningOp, ColumnProfile, SessionWarning, SourceFormat};
use tracing::{debug, info};

use crate::chart::{ChartData, chart_data};
use crate::error::{Result, TransformError};
use crate::ops::{drop_null_rows, fill_missing_numeric_with_mean, remove_duplicates};

/// Mutable working state for a single ingested file.
///
/// Selection and cleaning mutate the dataset in place and every applied
/// operation is recorded, so a caller can always report what the current
/// data went through. Reading the state for export never consumes it; a
/// session stays usable for further cleaning and re-export.
#[derive(Debug, Clone)]
pub struct FileSession {
    source_name: String,
    format: SourceFormat,
    data: DataFrame,
    profiles: Vec<ColumnProfile>,
    applied: Vec<AppliedOperation>,
}

impl FileSession {
    /// Start a session over an ingested dataset.
    pub fn new(
        source_name: impl Into<String>,
        format: SourceFormat,
        data: DataFrame,
        profiles: Vec<ColumnProfile>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            format,
            data,
            profiles,
            applied: Vec::new(),
        }
    }

    /// Original file name the session was started from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Format the source file was parsed as.
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Current working dataset.
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Profiles for the current working columns, in dataset order. Kinds are
    /// fixed at ingestion; null counts track the working data.
    pub fn profiles(&self) -> &[ColumnProfile] {
        &self.profiles
    }

    /// Operations applied so far, in application order.
    pub fn applied(&self) -> &[AppliedOperation] {
        &self.applied
    }

    pub fn row_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Narrow the working dataset to `columns`, in the caller's order.
    ///
    /// An empty list is a no-op: the full column set stays in effect and
    /// [`SessionWarning::EmptySelection`] comes back for the caller to
    /// surface. An unknown name fails the whole selection and leaves the
    /// session unchanged.
    pub fn select_columns(&mut self, columns: &[String]) -> Result<Option<SessionWarning>> {
        if columns.is_empty() {
            debug!(
                file = %self.source_name,
                "empty selection, keeping all columns"
            );
            return Ok(Some(SessionWarning::EmptySelection));
        }
        let mut gathered: Vec<Column> = Vec::with_capacity(columns.len());
        for name in columns {
            let column = self
                .data
                .column(name)
                .map_err(|_| TransformError::ColumnNotFound { name: name.clone() })?;
            gathered.push(column.clone());
        }
        self.data = DataFrame::new(gathered)?;
        self.profiles = reorder_profiles(&self.profiles, columns);
        debug!(file = %self.source_name, columns = ?columns, "columns selected");
        Ok(None)
    }

    /// Apply one cleaning operation to the working dataset.
    ///
    /// Operations run in exactly the order the caller asks for them; nothing
    /// here reorders a sequence. The returned record is also appended to
    /// [`applied`](Self::applied).
    pub fn apply(&mut self, op: CleaningOp) -> Result<AppliedOperation> {
        let rows_before = self.data.height();
        let cells_changed = match op {
            CleaningOp::RemoveDuplicates => {
                remove_duplicates(&mut self.data)?;
                0
            }
            CleaningOp::FillMissingNumericWithMean => {
                fill_missing_numeric_with_mean(&mut self.data, &self.profiles)?
            }
            CleaningOp::DropRowsWithAnyNull => {
                drop_null_rows(&mut self.data)?;
                0
            }
        };
        self.refresh_null_counts()?;
        let record = AppliedOperation {
            op,
            rows_before,
            rows_after: self.data.height(),
            cells_changed,
        };
        info!(
            file = %self.source_name,
            op = %op,
            rows_before,
            rows_after = record.rows_after,
            cells_changed,
            "cleaning operation applied"
        );
        self.applied.push(record);
        Ok(record)
    }

    /// Numeric columns chosen for a quick-look chart of the working data.
    ///
    /// `None` means the dataset has no numeric columns; callers surface that
    /// as [`SessionWarning::NoNumericData`].
    pub fn chart_data(&self) -> Result<Option<ChartData>> {
        chart_data(&self.data, &self.profiles)
    }

    fn refresh_null_counts(&mut self) -> Result<()> {
        for profile in &mut self.profiles {
            profile.null_count = self.data.column(&profile.name)?.null_count();
        }
        Ok(())
    }
}

fn reorder_profiles(profiles: &[ColumnProfile], columns: &[String]) -> Vec<ColumnProfile> {
    columns
        .iter()
        .filter_map(|name| profiles.iter().find(|p| &p.name == name).cloned())
        .collect()
}
