//! Error kinds for the vendor summary run
//!
//! Every variant is fatal: the run stops at the first error and the binary
//! exits non-zero after logging it.

use std::fmt;

#[derive(Debug)]
pub enum SummaryError {
    /// Source or destination store could not be opened
    Connection(rusqlite::Error),
    /// Aggregation query failed (missing table/column, undecodable row)
    Query(rusqlite::Error),
    /// Volume cell that cannot be read as a number
    TypeCoercion {
        vendor: String,
        brand: String,
        value: String,
    },
    /// Destination write failed
    Persistence(String),
}

impl SummaryError {
    /// Short name of the error kind, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            SummaryError::Connection(_) => "ConnectionError",
            SummaryError::Query(_) => "QueryError",
            SummaryError::TypeCoercion { .. } => "TypeCoercionError",
            SummaryError::Persistence(_) => "PersistenceError",
        }
    }
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::Connection(e) => write!(f, "Connection error: {}", e),
            SummaryError::Query(e) => write!(f, "Query error: {}", e),
            SummaryError::TypeCoercion { vendor, brand, value } => write!(
                f,
                "Type coercion error: Volume {:?} is not numeric (vendor {}, brand {})",
                value, vendor, brand
            ),
            SummaryError::Persistence(e) => write!(f, "Persistence error: {}", e),
        }
    }
}

impl std::error::Error for SummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SummaryError::Connection(e) | SummaryError::Query(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SummaryError {
    fn from(err: std::io::Error) -> Self {
        SummaryError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        SummaryError::Persistence(err.to_string())
    }
}
