//! Error types for dataset export.

use thiserror::Error;

/// Errors from serializing a dataset to export bytes.
#[derive(Debug, Error)]
pub enum ExportError {
    // === Serialization Errors ===
    /// XLSX workbook construction failed.
    #[error("failed to build XLSX workbook: {message}")]
    XlsxWrite { message: String },

    // === DataFrame Errors ===
    /// Polars operation failed (CSV serialization included).
    #[error("dataframe error: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ExportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::XlsxWrite {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_polars_error() {
        let polars_err = polars::prelude::PolarsError::NoData("empty".into());
        let err = ExportError::from(polars_err);
        assert!(matches!(err, ExportError::DataFrame { .. }));
    }

    #[test]
    fn test_xlsx_write_display() {
        let err = ExportError::XlsxWrite {
            message: "row out of range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to build XLSX workbook: row out of range"
        );
    }
}
