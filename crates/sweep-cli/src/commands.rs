use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use sweep_cli::pipeline::{CleanRequest, ProcessedFile, read_inputs, run_batch, write_artifact};
use sweep_model::CleaningOp;

use crate::cli::CleanArgs;
use crate::summary::{apply_table_style, frame_table, header_cell};
use crate::types::{BatchReport, FileReport};

/// Rows shown by `--preview`.
const PREVIEW_ROWS: usize = 5;

pub fn run_clean(args: &CleanArgs) -> Result<BatchReport> {
    let batch_span = info_span!("clean", files = args.files.len());
    let _batch_guard = batch_span.enter();

    let request = CleanRequest {
        columns: args.columns.clone(),
        operations: args.apply.iter().map(|op| op.to_op()).collect(),
        format: args.to.to_format(),
        chart: args.chart,
    };

    let (inputs, mut errors) = read_inputs(&args.files);
    let mut batch = run_batch(&inputs, &request);
    errors.append(&mut batch.errors);

    let mut files = Vec::new();
    for processed in &batch.processed {
        if args.preview && !args.json {
            print_preview(processed);
        }
        if args.chart && !args.json {
            print_chart(processed);
        }
        let output = if args.dry_run {
            None
        } else {
            match write_artifact(processed, args.output_dir.as_deref()) {
                Ok(path) => Some(path),
                Err(error) => {
                    errors.push(format!(
                        "{}: {error:#}",
                        processed.session.source_name()
                    ));
                    None
                }
            }
        };
        files.push(FileReport::new(processed, output));
    }
    Ok(BatchReport { files, errors })
}

pub fn run_ops() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Operation"), header_cell("Description")]);
    apply_table_style(&mut table);
    for op in CleaningOp::ALL {
        table.add_row(vec![op.as_str().to_string(), op.description().to_string()]);
    }
    println!("{table}");
    Ok(())
}

fn print_preview(processed: &ProcessedFile) {
    let data = processed.session.data();
    println!(
        "{} ({} rows x {} columns):",
        processed.session.source_name(),
        data.height(),
        data.width()
    );
    println!("{}", frame_table(data, PREVIEW_ROWS));
}

fn print_chart(processed: &ProcessedFile) {
    match &processed.chart {
        Some(chart) => {
            println!(
                "{} chart columns [{}]:",
                processed.session.source_name(),
                chart.columns.join(", ")
            );
            println!("{}", frame_table(&chart.data, chart.data.height()));
        }
        None => {
            println!(
                "{}: no numeric columns to chart",
                processed.session.source_name()
            );
        }
    }
}
