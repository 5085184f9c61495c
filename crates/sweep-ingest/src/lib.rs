//! Tabular file ingestion for the datasweep pipeline.
//!
//! This crate turns uploaded CSV and XLSX bytes into Polars DataFrames,
//! strips spreadsheet index artifacts, and classifies every column so the
//! cleaning stages downstream never have to re-inspect dtypes.
//!
//! # Features
//!
//! - **Format Detection**: Case-insensitive `.csv` / `.xlsx` extension matching
//! - **CSV Parsing**: Header-row CSV reading with schema inference
//! - **XLSX Parsing**: First-worksheet reading with per-column type inference
//! - **Index Artifact Removal**: Unconditional drop of `Unnamed`-prefixed columns
//! - **Column Profiling**: One-time numeric / text / missing-only classification
//!
//! # Example
//!
//! ```ignore
//! use sweep_ingest::ingest_file;
//!
//! let bytes = std::fs::read("survey.csv")?;
//! let file = ingest_file("survey.csv", &bytes)?;
//! println!("{} rows, {} columns", file.row_count(), file.data.width());
//! ```

mod csv;
mod error;
mod file;
mod profile;
mod strip;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Ingestion ===
pub use file::{IngestedFile, detect_format, ingest_file};

// === Parsing ===
pub use csv::read_csv;
pub use xlsx::read_xlsx;

// === Column Utilities ===
pub use profile::profile_columns;
pub use strip::{UNNAMED_PREFIX, strip_unnamed_columns};
