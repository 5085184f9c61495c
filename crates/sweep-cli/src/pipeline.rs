//! Per-file cleaning pipeline with explicit stages.
//!
//! Every input walks the same stages in order:
//! 1. **Ingest**: Parse bytes, strip index artifacts, profile columns
//! 2. **Select**: Narrow to the requested columns (empty list keeps all)
//! 3. **Clean**: Apply the requested operations in command-line order
//! 4. **Chart**: Optionally pick numeric columns for a quick look
//! 5. **Export**: Serialize the working dataset to the target format
//!
//! A file that fails at any stage is reported and skipped; the batch keeps
//! going and the remaining files are unaffected.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use sweep_export::{ExportArtifact, export_dataset};
use sweep_ingest::ingest_file;
use sweep_model::{CleaningOp, ExportFormat, SessionWarning};
use sweep_transform::{ChartData, FileSession};

/// One batch input: where it came from and its raw bytes.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    /// File name used for format detection and output naming.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// What to do with every file in the batch.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    /// Columns to keep, in order. Empty keeps the full column set.
    pub columns: Vec<String>,
    /// Cleaning operations, applied in exactly this order.
    pub operations: Vec<CleaningOp>,
    /// Target export format.
    pub format: ExportFormat,
    /// Whether to build the numeric chart summary.
    pub chart: bool,
}

/// Everything produced for one successfully processed file.
#[derive(Debug)]
pub struct ProcessedFile {
    /// Path the input was read from (or a synthetic name for in-memory input).
    pub source_path: PathBuf,
    /// Session holding the final working dataset and the operation log.
    pub session: FileSession,
    /// Row count right after ingestion, before any cleaning.
    pub rows_in: usize,
    /// Soft warnings raised along the way, deduplicated.
    pub warnings: Vec<SessionWarning>,
    /// Chart columns, when requested and numeric data exists.
    pub chart: Option<ChartData>,
    /// The export artifact for the final working dataset.
    pub artifact: ExportArtifact,
}

/// Outcome of a whole batch. Failed files land in `errors` as one
/// human-readable message each; they never abort the rest.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub processed: Vec<ProcessedFile>,
    pub errors: Vec<String>,
}

impl BatchResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Read batch inputs from disk. Unreadable paths become error messages, not
/// failures; the caller merges them into the batch result.
pub fn read_inputs(paths: &[PathBuf]) -> (Vec<InputFile>, Vec<String>) {
    let mut inputs = Vec::new();
    let mut errors = Vec::new();
    for path in paths {
        match fs::read(path) {
            Ok(bytes) => inputs.push(InputFile::new(path, bytes)),
            Err(error) => errors.push(format!("{}: {error}", path.display())),
        }
    }
    (inputs, errors)
}

/// Run one file through ingest, select, clean, chart, and export.
pub fn process_file(input: &InputFile, request: &CleanRequest) -> Result<ProcessedFile> {
    let name = input.name();
    let span = info_span!("process_file", file = %name);
    let _guard = span.enter();
    let start = Instant::now();

    let ingested = ingest_file(&name, &input.bytes)?;
    let rows_in = ingested.row_count();
    let mut session = FileSession::new(
        ingested.name,
        ingested.format,
        ingested.data,
        ingested.profiles,
    );

    let mut warnings = Vec::new();
    if let Some(warning) = session.select_columns(&request.columns)? {
        warn!(file = %name, "{warning}");
        push_warning(&mut warnings, warning);
    }

    for op in &request.operations {
        if *op == CleaningOp::FillMissingNumericWithMean
            && !session.profiles().iter().any(|p| p.kind.is_numeric())
        {
            warn!(file = %name, op = %op, "{}", SessionWarning::NoNumericData);
            push_warning(&mut warnings, SessionWarning::NoNumericData);
        }
        session.apply(*op)?;
    }

    let chart = if request.chart {
        let data = session.chart_data()?;
        if data.is_none() {
            warn!(file = %name, "{}", SessionWarning::NoNumericData);
            push_warning(&mut warnings, SessionWarning::NoNumericData);
        }
        data
    } else {
        None
    };

    let artifact = export_dataset(session.data(), session.source_name(), request.format)?;
    info!(
        file = %name,
        rows_in,
        rows_out = session.row_count(),
        operations = session.applied().len(),
        duration_ms = start.elapsed().as_millis(),
        "file processed"
    );
    Ok(ProcessedFile {
        source_path: input.path.clone(),
        session,
        rows_in,
        warnings,
        chart,
        artifact,
    })
}

/// Process every input sequentially, isolating failures per file.
pub fn run_batch(inputs: &[InputFile], request: &CleanRequest) -> BatchResult {
    let mut result = BatchResult::default();
    for input in inputs {
        match process_file(input, request) {
            Ok(file) => result.processed.push(file),
            Err(error) => {
                warn!(file = %input.name(), %error, "file skipped");
                result.errors.push(format!("{}: {error:#}", input.name()));
            }
        }
    }
    info!(
        files = inputs.len(),
        processed = result.processed.len(),
        failed = result.errors.len(),
        "batch complete"
    );
    result
}

/// Write a processed file's artifact to disk and return its path.
///
/// Without an explicit output directory the artifact lands next to its
/// source file.
pub fn write_artifact(file: &ProcessedFile, output_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => file
            .source_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(&file.artifact.file_name);
    fs::write(&path, &file.artifact.bytes).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), bytes = file.artifact.bytes.len(), "artifact written");
    Ok(path)
}

fn push_warning(warnings: &mut Vec<SessionWarning>, warning: SessionWarning) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}
