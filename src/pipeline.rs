//! One-shot summary run: aggregate → clean → persist
//!
//! Every stage logs its start, its end and a preview of the first rows.
//! The first error aborts the run; nothing is retried.

use crate::config::{BackendType, SummaryConfig};
use crate::error::SummaryError;
use crate::summary::{clean_summary, preview, SummaryWriter, VendorSummaryReader};
use std::time::{Duration, Instant};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub rows_written: usize,
    pub backend: &'static str,
    pub elapsed: Duration,
}

pub fn run_pipeline(
    config: &SummaryConfig,
    backend: BackendType,
) -> Result<PipelineReport, SummaryError> {
    let started = Instant::now();

    log::info!("Creating Vendor Summary Table.....");
    let reader = VendorSummaryReader::open(&config.source_db_path)?;
    let summary = reader.aggregate()?;
    drop(reader);
    log::info!("\n{}", preview(&summary, config.preview_rows));

    log::info!("Cleaning data.....");
    let clean = clean_summary(summary)?;
    log::info!("\n{}", preview(&clean, config.preview_rows));

    log::info!("Ingesting data.....");
    let mut writer = SummaryWriter::new(backend, config)?;
    let rows_written = writer.write_summary(&clean)?;
    log::info!(
        "📊 {} rows written to {} ({})",
        rows_written,
        match backend {
            BackendType::Sqlite => config.summary_table.as_str(),
            BackendType::Jsonl => "export file",
        },
        writer.backend_type()
    );

    let elapsed = started.elapsed();
    log::info!("Completed in {:.2}s", elapsed.as_secs_f64());

    Ok(PipelineReport {
        rows_written,
        backend: writer.backend_type(),
        elapsed,
    })
}
