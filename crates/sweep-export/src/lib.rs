//! Dataset export for the datasweep pipeline.
//!
//! This crate turns a working DataFrame back into downloadable bytes. The
//! caller picks a target format; the crate serializes the frame, derives the
//! output file name from the source name, and pairs the bytes with the
//! format's MIME type. Exporting never mutates the dataset, so a session can
//! clean further and export again.
//!
//! # Features
//!
//! - **CSV Serialization**: Header row, comma-separated, no index column
//! - **XLSX Serialization**: Single worksheet, typed cells, blanks for nulls
//! - **Filename Derivation**: Source name with the extension swapped
//! - **MIME Lookup**: Fixed per-format MIME strings
//!
//! # Example
//!
//! ```ignore
//! use sweep_export::export_dataset;
//! use sweep_model::ExportFormat;
//!
//! let artifact = export_dataset(session.data(), "survey.xlsx", ExportFormat::Csv)?;
//! std::fs::write(&artifact.file_name, &artifact.bytes)?;
//! ```

mod artifact;
mod csv;
mod error;
mod xlsx;

// === Error Types ===
pub use error::{ExportError, Result};

// === Export ===
pub use artifact::{ExportArtifact, derive_file_name, export_dataset};

// === Format Writers ===
pub use csv::csv_bytes;
pub use xlsx::xlsx_bytes;
