//! Error types for dataset transformation.

use thiserror::Error;

/// Errors from column selection and cleaning operations.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Selection Errors ===
    /// A requested column does not exist in the working dataset.
    #[error("column '{name}' not found in dataset")]
    ColumnNotFound { name: String },

    // === DataFrame Errors ===
    /// Polars operation failed.
    #[error("dataframe error: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
