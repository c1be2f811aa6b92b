//! Read-only aggregation over the inventory database
//!
//! One query builds three summaries and joins them:
//! - FreightSummary: freight per vendor from `vendor_invoice`
//! - PurchaseSummary: purchases joined to `purchase_prices`, valid prices only
//! - SalesSummary: sales totals per (vendor, brand)

use super::types::RawSummaryRow;
use crate::error::SummaryError;
use crate::sqlite_pragma::apply_read_pragmas;
use rusqlite::types::{Value, ValueRef};
use rusqlite::{Connection, ErrorCode, OpenFlags, Row};
use std::path::Path;

/// Grouping includes the purchase line's PurchasePrice and the catalog Price,
/// so a brand bought at several prices yields several rows. Ties on
/// TotalPurchaseDollars are broken on the group keys so reruns are identical.
pub const VENDOR_SUMMARY_QUERY: &str = "
    WITH FreightSummary AS (
        SELECT
            VendorNumber,
            SUM(Freight) AS FreightCost
        FROM vendor_invoice
        GROUP BY VendorNumber
    ),

    PurchaseSummary AS (
        SELECT
            p.VendorNumber,
            p.VendorName,
            p.Brand,
            p.Description,
            p.PurchasePrice AS LinePurchasePrice,
            pp.PurchasePrice,
            pp.Price AS ActualPrice,
            pp.Volume,
            SUM(p.Quantity) AS TotalPurchaseQuantity,
            SUM(p.Dollars) AS TotalPurchaseDollars
        FROM purchases p
        JOIN purchase_prices pp ON p.Brand = pp.Brand
        WHERE p.PurchasePrice > 0
        GROUP BY
            p.VendorNumber, p.VendorName,
            p.Brand, p.Description,
            p.PurchasePrice, pp.Price, pp.Volume
    ),

    SalesSummary AS (
        SELECT
            VendorNo,
            Brand,
            SUM(SalesQuantity) AS TotalSalesQuantity,
            SUM(SalesDollars) AS TotalSalesDollars,
            SUM(SalesPrice) AS TotalSalesPrice,
            SUM(ExciseTax) AS TotalExciseTax
        FROM sales
        GROUP BY VendorNo, Brand
    )

    SELECT
        ps.VendorNumber,
        ps.VendorName,
        ps.Brand,
        ps.Description,
        ps.PurchasePrice,
        ps.ActualPrice,
        ps.Volume,
        ps.TotalPurchaseQuantity,
        ps.TotalPurchaseDollars,
        ss.TotalSalesQuantity,
        ss.TotalSalesDollars,
        ss.TotalSalesPrice,
        ss.TotalExciseTax,
        fs.FreightCost
    FROM PurchaseSummary ps
    LEFT JOIN SalesSummary ss
        ON ps.VendorNumber = ss.VendorNo AND ps.Brand = ss.Brand
    LEFT JOIN FreightSummary fs
        ON ps.VendorNumber = fs.VendorNumber
    ORDER BY
        ps.TotalPurchaseDollars DESC,
        ps.VendorNumber, ps.Brand, ps.VendorName, ps.Description,
        ps.LinePurchasePrice, ps.ActualPrice, ps.Volume";

/// Aggregation reader over a read-only inventory connection
pub struct VendorSummaryReader {
    conn: Connection,
}

impl VendorSummaryReader {
    /// Open the inventory database read-only
    ///
    /// A missing file is a connection error; the database is never created.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, SummaryError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(SummaryError::Connection)?;

        log::info!("📥 Inventory database opened read-only: {}", db_path.display());

        Self::from_connection(conn)
    }

    /// Wrap a caller-supplied connection; it is switched to query-only mode
    pub fn from_connection(conn: Connection) -> Result<Self, SummaryError> {
        apply_read_pragmas(&conn).map_err(classify)?;
        Ok(Self { conn })
    }

    /// Run the vendor summary aggregation
    ///
    /// Rows come back sorted by TotalPurchaseDollars descending.
    pub fn aggregate(&self) -> Result<Vec<RawSummaryRow>, SummaryError> {
        let mut stmt = self.conn.prepare(VENDOR_SUMMARY_QUERY).map_err(classify)?;

        let rows = stmt
            .query_map([], read_summary_row)
            .map_err(classify)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(SummaryError::Query)?;

        log::debug!("📥 Aggregation returned {} vendor/brand rows", rows.len());

        Ok(rows)
    }
}

/// Unreadable or non-database files are connection failures; everything else
/// (missing tables, missing columns, bad SQL) is a query failure.
fn classify(err: rusqlite::Error) -> SummaryError {
    match err.sqlite_error_code() {
        Some(ErrorCode::CannotOpen) | Some(ErrorCode::NotADatabase) => {
            SummaryError::Connection(err)
        }
        _ => SummaryError::Query(err),
    }
}

fn read_summary_row(row: &Row<'_>) -> rusqlite::Result<RawSummaryRow> {
    Ok(RawSummaryRow {
        vendor_number: row.get(0)?,
        vendor_name: text_cell(row, 1)?,
        brand: row.get(2)?,
        description: text_cell(row, 3)?,
        purchase_price: row.get(4)?,
        actual_price: row.get(5)?,
        volume: row.get::<_, Value>(6)?,
        total_purchase_quantity: row.get(7)?,
        total_purchase_dollars: row.get(8)?,
        total_sales_quantity: row.get(9)?,
        total_sales_dollars: row.get(10)?,
        total_sales_price: row.get(11)?,
        total_excise_tax: row.get(12)?,
        freight_cost: row.get(13)?,
    })
}

/// Categorical column read as text whatever its storage class
fn text_cell(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(r) => Some(r.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}
