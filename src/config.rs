use std::env;
use std::path::PathBuf;

pub const DEFAULT_SUMMARY_TABLE: &str = "vendor_sales_summary";

/// Output backend for the finished summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Jsonl,
    Sqlite,
}

impl BackendType {
    /// Parse `--backend <sqlite|jsonl>` from the process arguments
    ///
    /// Unknown or missing values fall back to SQLite, the table the report
    /// is normally consumed from.
    pub fn parse_backend_from_args() -> BackendType {
        let args: Vec<String> = env::args().collect();
        Self::from_args(&args)
    }

    fn from_args(args: &[String]) -> BackendType {
        if let Some(idx) = args.iter().position(|x| x == "--backend") {
            match args.get(idx + 1).map(|s| s.as_str()) {
                Some("sqlite") => return BackendType::Sqlite,
                Some("jsonl") => return BackendType::Jsonl,
                _ => {}
            }
        }

        BackendType::Sqlite
    }
}

/// Configuration for a summary run
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Inventory database holding purchases, purchase_prices, sales, vendor_invoice
    pub source_db_path: PathBuf,

    /// Database receiving the summary table (usually the source database)
    pub dest_db_path: PathBuf,

    /// Name of the summary relation, replaced on every run
    pub summary_table: String,

    /// Append-mode log file; None logs to stderr
    pub log_path: Option<PathBuf>,

    /// Rows shown in each stage preview
    pub preview_rows: usize,

    /// Output file for the JSONL backend
    pub export_path: PathBuf,
}

impl SummaryConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `INVENTORY_DB_PATH` (default: inventory.db)
    /// - `SUMMARY_DB_PATH` (default: same as INVENTORY_DB_PATH)
    /// - `SUMMARY_TABLE` (default: vendor_sales_summary)
    /// - `SUMMARY_LOG_PATH` (default: logs/get_vendor_summary.log, empty = stderr)
    /// - `SUMMARY_PREVIEW_ROWS` (default: 5)
    /// - `SUMMARY_EXPORT_PATH` (default: vendor_sales_summary.jsonl)
    pub fn from_env() -> Self {
        let source_db_path: PathBuf = env::var("INVENTORY_DB_PATH")
            .unwrap_or_else(|_| "inventory.db".to_string())
            .into();

        let dest_db_path = env::var("SUMMARY_DB_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| source_db_path.clone());

        let log_path = match env::var("SUMMARY_LOG_PATH") {
            Ok(s) if s.trim().is_empty() => None,
            Ok(s) => Some(PathBuf::from(s)),
            Err(_) => Some(PathBuf::from("logs/get_vendor_summary.log")),
        };

        Self {
            source_db_path,
            dest_db_path,
            summary_table: env::var("SUMMARY_TABLE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SUMMARY_TABLE.to_string()),
            log_path,
            preview_rows: env::var("SUMMARY_PREVIEW_ROWS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            export_path: env::var("SUMMARY_EXPORT_PATH")
                .unwrap_or_else(|_| "vendor_sales_summary.jsonl".to_string())
                .into(),
        }
    }

    /// Config for a single database file, used by tests and embedding callers
    pub fn for_database(db_path: impl Into<PathBuf>) -> Self {
        let db_path = db_path.into();
        Self {
            dest_db_path: db_path.clone(),
            export_path: db_path.with_extension("jsonl"),
            source_db_path: db_path,
            summary_table: DEFAULT_SUMMARY_TABLE.to_string(),
            log_path: None,
            preview_rows: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "INVENTORY_DB_PATH",
        "SUMMARY_DB_PATH",
        "SUMMARY_TABLE",
        "SUMMARY_LOG_PATH",
        "SUMMARY_PREVIEW_ROWS",
        "SUMMARY_EXPORT_PATH",
    ];

    // Both cases mutate the same process-wide variables, so they run in one test.
    #[test]
    fn test_config_from_env() {
        for var in VARS {
            env::remove_var(var);
        }

        let config = SummaryConfig::from_env();
        assert_eq!(config.source_db_path, PathBuf::from("inventory.db"));
        assert_eq!(config.dest_db_path, PathBuf::from("inventory.db"));
        assert_eq!(config.summary_table, "vendor_sales_summary");
        assert_eq!(
            config.log_path,
            Some(PathBuf::from("logs/get_vendor_summary.log"))
        );
        assert_eq!(config.preview_rows, 5);

        env::set_var("INVENTORY_DB_PATH", "/tmp/inv.db");
        env::set_var("SUMMARY_DB_PATH", "/tmp/out.db");
        env::set_var("SUMMARY_TABLE", "summary_v2");
        env::set_var("SUMMARY_LOG_PATH", "");
        env::set_var("SUMMARY_PREVIEW_ROWS", "10");

        let config = SummaryConfig::from_env();
        assert_eq!(config.source_db_path, PathBuf::from("/tmp/inv.db"));
        assert_eq!(config.dest_db_path, PathBuf::from("/tmp/out.db"));
        assert_eq!(config.summary_table, "summary_v2");
        assert_eq!(config.log_path, None);
        assert_eq!(config.preview_rows, 10);

        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_backend_from_args() {
        let args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(BackendType::from_args(&args(&["bin"])), BackendType::Sqlite);
        assert_eq!(
            BackendType::from_args(&args(&["bin", "--backend", "jsonl"])),
            BackendType::Jsonl
        );
        assert_eq!(
            BackendType::from_args(&args(&["bin", "--backend", "parquet"])),
            BackendType::Sqlite
        );
    }
}
