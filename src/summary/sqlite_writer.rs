//! SQLite backend: replace-on-write summary table

use super::types::{VendorBrandSummary, SUMMARY_COLUMNS};
use super::writer_backend::SummaryWriterBackend;
use crate::error::SummaryError;
use crate::sqlite_pragma::apply_optimized_pragmas;
use rusqlite::{params_from_iter, Connection};
use std::path::Path;

/// Writes the summary into a single table, dropping any previous version
pub struct SqliteSummaryWriter {
    conn: Connection,
    table: String,
}

impl SqliteSummaryWriter {
    pub fn new(db_path: impl AsRef<Path>, table: &str) -> Result<Self, SummaryError> {
        let db_path = db_path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SummaryError::Persistence(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(db_path).map_err(SummaryError::Connection)?;
        apply_optimized_pragmas(&conn).map_err(SummaryError::Connection)?;

        log::info!("✅ SQLite summary writer initialized: {}", db_path.display());

        Ok(Self::from_connection(conn, table))
    }

    /// Use a caller-supplied connection as the destination
    pub fn from_connection(conn: Connection, table: &str) -> Self {
        Self {
            conn,
            table: table.to_string(),
        }
    }

    fn create_table_sql(&self) -> String {
        let columns = SUMMARY_COLUMNS
            .iter()
            .map(|(name, ty)| format!("{} {}", quote_ident(name), ty).trim_end().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        format!("CREATE TABLE {} ({})", quote_ident(&self.table), columns)
    }

    fn insert_sql(&self) -> String {
        let columns = SUMMARY_COLUMNS
            .iter()
            .map(|(name, _)| quote_ident(name))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=SUMMARY_COLUMNS.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_ident(&self.table),
            columns,
            placeholders
        )
    }

    fn replace_table(&mut self, rows: &[VendorBrandSummary]) -> rusqlite::Result<usize> {
        let drop_sql = format!("DROP TABLE IF EXISTS {}", quote_ident(&self.table));
        let create_sql = self.create_table_sql();
        let insert_sql = self.insert_sql();

        let tx = self.conn.transaction()?;
        tx.execute(&drop_sql, [])?;
        tx.execute(&create_sql, [])?;

        {
            let mut stmt = tx.prepare(&insert_sql)?;
            for row in rows {
                stmt.execute(params_from_iter(row.sql_values()))?;
            }
        }

        tx.commit()?;
        Ok(rows.len())
    }
}

impl SummaryWriterBackend for SqliteSummaryWriter {
    fn write_summary(&mut self, rows: &[VendorBrandSummary]) -> Result<usize, SummaryError> {
        let written = self
            .replace_table(rows)
            .map_err(|e| SummaryError::Persistence(format!("table {}: {}", self.table, e)))?;

        log::debug!("✅ Replaced table {} with {} rows", self.table, written);

        Ok(written)
    }

    fn backend_type(&self) -> &'static str {
        "SQLite"
    }
}

/// Double-quote an SQL identifier
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
