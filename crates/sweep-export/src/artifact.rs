//! Export entry point and artifact assembly.

use polars::prelude::DataFrame;
use sweep_model::ExportFormat;
use tracing::debug;

use crate::csv::csv_bytes;
use crate::error::Result;
use crate::xlsx::xlsx_bytes;

/// A finished export: bytes ready for download plus the metadata a caller
/// needs to deliver them.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Serialized dataset.
    pub bytes: Vec<u8>,
    /// Source file name with its extension swapped for the target format's.
    pub file_name: String,
    /// MIME type matching the target format.
    pub mime: &'static str,
}

/// Serialize the working dataset into an [`ExportArtifact`].
///
/// The dataset is read, never mutated; calling this again after further
/// cleaning produces an artifact reflecting the latest data.
pub fn export_dataset(
    df: &DataFrame,
    source_name: &str,
    format: ExportFormat,
) -> Result<ExportArtifact> {
    let bytes = match format {
        ExportFormat::Csv => csv_bytes(df)?,
        ExportFormat::Xlsx => xlsx_bytes(df)?,
    };
    let file_name = derive_file_name(source_name, format);
    debug!(
        source = source_name,
        format = %format,
        output = %file_name,
        bytes = bytes.len(),
        "dataset exported"
    );
    Ok(ExportArtifact {
        bytes,
        file_name,
        mime: format.mime(),
    })
}

/// Replace the final extension of `source_name` with the target format's
/// canonical one. A name without an extension gets the suffix appended.
pub fn derive_file_name(source_name: &str, format: ExportFormat) -> String {
    let stem = match source_name.rfind('.') {
        Some(idx) => &source_name[..idx],
        None => source_name,
    };
    format!("{stem}{}", format.extension())
}
