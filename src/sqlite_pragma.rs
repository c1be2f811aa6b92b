//! Connection PRAGMAs shared by the summary reader and writer

use rusqlite::Connection;

/// PRAGMAs for the destination connection
///
/// Connection-scoped settings only. The destination is usually the inventory
/// database itself, so its persistent journal mode is left alone.
pub fn apply_optimized_pragmas(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "temp_store", "MEMORY")?;
    conn.pragma_update(None, "cache_size", -64_000)?;
    Ok(())
}

/// PRAGMAs for the read-only source connection
///
/// GROUP BY / ORDER BY over the purchases table spills to temp storage;
/// keep it in memory. `query_only` must come last.
pub fn apply_read_pragmas(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "temp_store", "MEMORY")?;
    conn.pragma_update(None, "cache_size", -64_000)?;
    conn.pragma_update(None, "query_only", "ON")?;
    Ok(())
}
