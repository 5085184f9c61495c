//! File-level ingestion entry points.

use polars::prelude::DataFrame;
use sweep_model::{ColumnProfile, SourceFormat};
use tracing::debug;

use crate::csv::read_csv;
use crate::error::{IngestError, Result};
use crate::profile::profile_columns;
use crate::strip::strip_unnamed_columns;
use crate::xlsx::read_xlsx;

/// A parsed upload, ready for selection and cleaning.
#[derive(Debug, Clone)]
pub struct IngestedFile {
    /// Original file name as supplied by the caller.
    pub name: String,
    /// Format the bytes were parsed as.
    pub format: SourceFormat,
    /// Parsed rows, with index artifacts already stripped.
    pub data: DataFrame,
    /// Per-column classification, computed once at ingestion.
    pub profiles: Vec<ColumnProfile>,
}

impl IngestedFile {
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
}

/// Determine the source format from a file name's extension.
///
/// Matching is case insensitive. Anything other than `.csv` or `.xlsx` is
/// rejected with [`IngestError::UnsupportedFormat`] so a batch caller can
/// skip the file and keep going.
pub fn detect_format(name: &str) -> Result<SourceFormat> {
    let extension = extension_of(name);
    SourceFormat::from_extension(extension.trim_start_matches('.')).ok_or_else(|| {
        IngestError::UnsupportedFormat {
            name: name.to_string(),
            extension,
        }
    })
}

/// Parse one uploaded file into an [`IngestedFile`].
///
/// Dispatches on the detected format, strips `Unnamed`-prefixed columns,
/// then profiles whatever remains.
pub fn ingest_file(name: &str, bytes: &[u8]) -> Result<IngestedFile> {
    let format = detect_format(name)?;
    let mut data = match format {
        SourceFormat::Csv => read_csv(name, bytes)?,
        SourceFormat::Xlsx => read_xlsx(name, bytes)?,
    };
    if data.width() == 0 {
        return Err(IngestError::NoColumns {
            name: name.to_string(),
        });
    }
    let stripped = strip_unnamed_columns(&mut data)?;
    let profiles = profile_columns(&data);
    debug!(
        name,
        format = %format,
        rows = data.height(),
        columns = data.width(),
        stripped_columns = stripped,
        "file ingested"
    );
    Ok(IngestedFile {
        name: name.to_string(),
        format,
        data,
        profiles,
    })
}

/// Extension of `name` including the leading dot, lowercased. Empty when the
/// name has no dot.
fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => name[idx..].to_lowercase(),
        None => String::new(),
    }
}
