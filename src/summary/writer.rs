//! Unified writer interface for the vendor summary
//!
//! Routes writes to either the SQLite table or the JSONL export.

use super::jsonl_writer::JsonlSummaryWriter;
use super::sqlite_writer::SqliteSummaryWriter;
use super::types::VendorBrandSummary;
use super::writer_backend::SummaryWriterBackend;
use crate::config::{BackendType, SummaryConfig};
use crate::error::SummaryError;

pub enum SummaryWriter {
    Jsonl(JsonlSummaryWriter),
    Sqlite(SqliteSummaryWriter),
}

impl SummaryWriter {
    /// Create a summary writer based on backend type
    pub fn new(backend: BackendType, config: &SummaryConfig) -> Result<Self, SummaryError> {
        match backend {
            BackendType::Jsonl => Ok(SummaryWriter::Jsonl(JsonlSummaryWriter::new(
                config.export_path.clone(),
            )?)),
            BackendType::Sqlite => Ok(SummaryWriter::Sqlite(SqliteSummaryWriter::new(
                &config.dest_db_path,
                &config.summary_table,
            )?)),
        }
    }

    fn backend(&mut self) -> &mut dyn SummaryWriterBackend {
        match self {
            SummaryWriter::Jsonl(w) => w,
            SummaryWriter::Sqlite(w) => w,
        }
    }

    pub fn write_summary(&mut self, rows: &[VendorBrandSummary]) -> Result<usize, SummaryError> {
        self.backend().write_summary(rows)
    }

    pub fn backend_type(&self) -> &'static str {
        match self {
            SummaryWriter::Jsonl(w) => w.backend_type(),
            SummaryWriter::Sqlite(w) => w.backend_type(),
        }
    }
}
