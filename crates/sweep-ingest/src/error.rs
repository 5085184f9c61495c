//! Error types for tabular file ingestion.

use thiserror::Error;

/// Errors that can occur while turning an uploaded file into a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Detection Errors ===
    /// File extension is not one of the supported input formats. The batch
    /// driver reports this per file and keeps processing the rest.
    #[error("unsupported file format '{extension}' for {name}: expected .csv or .xlsx")]
    UnsupportedFormat { name: String, extension: String },

    // === Parse Errors ===
    /// Failed to parse CSV content.
    #[error("failed to parse CSV {name}: {message}")]
    CsvParse { name: String, message: String },

    /// Failed to open or parse an XLSX workbook.
    #[error("failed to parse XLSX {name}: {message}")]
    XlsxParse { name: String, message: String },

    /// Workbook contains no worksheets.
    #[error("no worksheet found in {name}")]
    NoWorksheet { name: String },

    /// Parsed content yielded no data rows.
    #[error("no data rows in {name}")]
    EmptyDataset { name: String },

    /// Parsed content yielded no columns.
    #[error("no columns in {name}")]
    NoColumns { name: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = IngestError::UnsupportedFormat {
            name: "notes.txt".to_string(),
            extension: ".txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported file format '.txt' for notes.txt: expected .csv or .xlsx"
        );
    }

    #[test]
    fn test_no_columns_display() {
        let err = IngestError::NoColumns {
            name: "bare.xlsx".to_string(),
        };
        assert_eq!(err.to_string(), "no columns in bare.xlsx");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
