//! Writer backend trait for the finished summary
//!
//! Backends replace whatever a previous run wrote; they never append.

use super::types::VendorBrandSummary;
use crate::error::SummaryError;

/// Backend trait for persisting the vendor sales summary
pub trait SummaryWriterBackend {
    /// Replace the stored summary with `rows`, returning the number written
    fn write_summary(&mut self, rows: &[VendorBrandSummary]) -> Result<usize, SummaryError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}
