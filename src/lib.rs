//! Vendor sales summary report
//!
//! Builds the per-vendor, per-brand profitability table from an inventory
//! SQLite database:
//!
//! ```text
//! purchases + purchase_prices + sales + vendor_invoice
//!     ↓
//! VendorSummaryReader (FreightSummary / PurchaseSummary / SalesSummary CTE join)
//!     ↓
//! clean_summary (Volume coercion, null fill, trim, derived ratios)
//!     ↓
//! SummaryWriter → SQLite table or JSONL backend
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod sqlite_pragma;
pub mod summary;

pub use config::{BackendType, SummaryConfig};
pub use error::SummaryError;
pub use pipeline::{run_pipeline, PipelineReport};
