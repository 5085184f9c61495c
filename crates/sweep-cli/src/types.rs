use std::path::PathBuf;

use serde::Serialize;

use sweep_cli::pipeline::ProcessedFile;
use sweep_model::{AppliedOperation, SessionWarning, SourceFormat};

/// Per-file entry of the batch report.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub format: SourceFormat,
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns: Vec<String>,
    pub applied: Vec<AppliedOperation>,
    pub warnings: Vec<SessionWarning>,
    pub chart_columns: Option<Vec<String>>,
    pub output: Option<PathBuf>,
}

impl FileReport {
    pub fn new(processed: &ProcessedFile, output: Option<PathBuf>) -> Self {
        Self {
            file: processed.session.source_name().to_string(),
            format: processed.session.format(),
            rows_in: processed.rows_in,
            rows_out: processed.session.row_count(),
            columns: processed.session.column_names(),
            applied: processed.session.applied().to_vec(),
            warnings: processed.warnings.clone(),
            chart_columns: processed.chart.as_ref().map(|c| c.columns.clone()),
            output,
        }
    }
}

/// Full batch report: one entry per processed file plus the messages for
/// every file that was skipped.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub errors: Vec<String>,
}

impl BatchReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
