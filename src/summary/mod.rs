//! Vendor/brand sales summary
//!
//! # Architecture
//!
//! ```text
//! Inventory SQLite → VendorSummaryReader (CTE aggregation, read-only)
//!     ↓
//! clean_summary (Volume → f64, nulls → 0, trim, derived ratios)
//!     ↓
//! SummaryWriter → SQLite table (replace) or JSONL export
//! ```

pub mod jsonl_writer;
pub mod preview;
pub mod sqlite_reader;
pub mod sqlite_writer;
pub mod transform;
pub mod types;
pub mod writer;
pub mod writer_backend;

pub use jsonl_writer::JsonlSummaryWriter;
pub use preview::{preview, PreviewRow};
pub use sqlite_reader::VendorSummaryReader;
pub use sqlite_writer::SqliteSummaryWriter;
pub use transform::{clean_summary, DerivedMetrics};
pub use types::{RawSummaryRow, SqlKey, VendorBrandSummary, SUMMARY_COLUMNS};
pub use writer::SummaryWriter;
pub use writer_backend::SummaryWriterBackend;
