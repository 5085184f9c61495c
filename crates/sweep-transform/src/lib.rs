//! Column selection and cleaning operations for the datasweep pipeline.
//!
//! This crate owns the mutable middle of the pipeline: a [`FileSession`]
//! wraps one ingested dataset and applies column selection and cleaning
//! operations to it in caller order, recording every step. The operations
//! themselves are standalone DataFrame functions, usable without a session.
//!
//! # Features
//!
//! - **Column Selection**: Subset and reorder the working columns
//! - **Duplicate Removal**: Full-row deduplication, first occurrence wins
//! - **Mean Fill**: Replace missing numeric values with the column mean
//! - **Null-Row Drop**: Remove rows with any missing value
//! - **Chart Picks**: First numeric columns for a quick-look chart
//!
//! # Example
//!
//! ```ignore
//! use sweep_model::CleaningOp;
//! use sweep_transform::FileSession;
//!
//! let mut session = FileSession::new(file.name, file.format, file.data, file.profiles);
//! session.select_columns(&selection)?;
//! let record = session.apply(CleaningOp::RemoveDuplicates)?;
//! println!("removed {} rows", record.rows_removed());
//! ```

mod chart;
mod error;
mod ops;
mod session;
mod value;

// === Error Types ===
pub use error::{Result, TransformError};

// === Session ===
pub use session::FileSession;

// === Cleaning Operations ===
pub use ops::{drop_null_rows, fill_missing_numeric_with_mean, remove_duplicates};

// === Charting ===
pub use chart::{ChartData, MAX_CHART_COLUMNS, chart_data};

// === AnyValue Utilities ===
pub use value::{any_to_f64, any_to_string, format_numeric, parse_f64};
