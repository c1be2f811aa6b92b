//! Vendor Summary Binary - builds the vendor_sales_summary table
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin vendor_summary -- --backend sqlite
//! ```
//!
//! ## Environment Variables
//!
//! - INVENTORY_DB_PATH - Inventory database (default: inventory.db)
//! - SUMMARY_DB_PATH - Destination database (default: INVENTORY_DB_PATH)
//! - SUMMARY_TABLE - Destination table (default: vendor_sales_summary)
//! - SUMMARY_LOG_PATH - Append-mode log file (default: logs/get_vendor_summary.log, empty = stderr)
//! - SUMMARY_PREVIEW_ROWS - Rows per stage preview (default: 5)
//! - SUMMARY_EXPORT_PATH - Output file for --backend jsonl (default: vendor_sales_summary.jsonl)
//! - RUST_LOG - Logging level (optional, default: debug)

use vendor_summary::{logging, run_pipeline, BackendType, SummaryConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = SummaryConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let backend = BackendType::parse_backend_from_args();

    log::info!("🚀 Starting vendor summary run");
    log::info!("   Inventory: {}", config.source_db_path.display());
    match backend {
        BackendType::Sqlite => log::info!(
            "   Output: {} → {}",
            config.dest_db_path.display(),
            config.summary_table
        ),
        BackendType::Jsonl => log::info!("   Output: {}", config.export_path.display()),
    }

    match run_pipeline(&config, backend) {
        Ok(report) => {
            log::debug!("{:?}", report);
            Ok(())
        }
        Err(e) => {
            log::error!("❌ {}: {}", e.kind(), e);
            Err(e.into())
        }
    }
}
