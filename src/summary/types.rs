//! Row types for the vendor/brand summary

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use serde::Serialize;
use std::fmt;

/// Column names and declared SQLite types of the persisted summary table,
/// in output order
pub const SUMMARY_COLUMNS: [(&str, &str); 18] = [
    ("VendorNumber", ""),
    ("VendorName", "TEXT"),
    ("Brand", ""),
    ("Description", "TEXT"),
    ("PurchasePrice", "REAL"),
    ("ActualPrice", "REAL"),
    ("Volume", "REAL"),
    ("TotalPurchaseQuantity", "REAL"),
    ("TotalPurchaseDollars", "REAL"),
    ("TotalSalesQuantity", "REAL"),
    ("TotalSalesDollars", "REAL"),
    ("TotalSalesPrice", "REAL"),
    ("TotalExciseTax", "REAL"),
    ("FreightCost", "REAL"),
    ("GrossProfit", "REAL"),
    ("ProfitMargin", "REAL"),
    ("StockTurnover", "REAL"),
    ("SalesToPurchaseRatio", "REAL"),
];

/// Vendor or brand identifier as stored in the source tables
///
/// The reference inventory database uses integers; text keys are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlKey {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl fmt::Display for SqlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlKey::Integer(i) => write!(f, "{}", i),
            SqlKey::Real(r) => write!(f, "{}", r),
            SqlKey::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromSql for SqlKey {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(SqlKey::Integer(i)),
            ValueRef::Real(r) => Ok(SqlKey::Real(r)),
            ValueRef::Text(t) => Ok(SqlKey::Text(String::from_utf8_lossy(t).into_owned())),
            ValueRef::Null | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

impl ToSql for SqlKey {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlKey::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            SqlKey::Real(r) => ToSqlOutput::Owned(Value::Real(*r)),
            SqlKey::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

/// One row of the aggregation query, before cleaning
///
/// Sales and freight columns are `None` when the left joins found no match.
/// Volume keeps whatever storage class the catalog used.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSummaryRow {
    pub vendor_number: Option<SqlKey>,
    pub vendor_name: Option<String>,
    pub brand: Option<SqlKey>,
    pub description: Option<String>,
    pub purchase_price: Option<f64>,
    pub actual_price: Option<f64>,
    pub volume: Value,
    pub total_purchase_quantity: Option<f64>,
    pub total_purchase_dollars: Option<f64>,
    pub total_sales_quantity: Option<f64>,
    pub total_sales_dollars: Option<f64>,
    pub total_sales_price: Option<f64>,
    pub total_excise_tax: Option<f64>,
    pub freight_cost: Option<f64>,
}

/// Cleaned summary row with derived profitability metrics
///
/// Derived ratios follow IEEE-754: a zero denominator yields NaN or ±inf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VendorBrandSummary {
    pub vendor_number: SqlKey,
    pub vendor_name: String,
    pub brand: SqlKey,
    pub description: String,
    pub purchase_price: f64,
    pub actual_price: f64,
    pub volume: f64,
    pub total_purchase_quantity: f64,
    pub total_purchase_dollars: f64,
    pub total_sales_quantity: f64,
    pub total_sales_dollars: f64,
    pub total_sales_price: f64,
    pub total_excise_tax: f64,
    pub freight_cost: f64,
    pub gross_profit: f64,
    pub profit_margin: f64,
    pub stock_turnover: f64,
    pub sales_to_purchase_ratio: f64,
}

impl VendorBrandSummary {
    /// Values in `SUMMARY_COLUMNS` order, for parameter binding
    pub fn sql_values(&self) -> [&dyn ToSql; 18] {
        [
            &self.vendor_number,
            &self.vendor_name,
            &self.brand,
            &self.description,
            &self.purchase_price,
            &self.actual_price,
            &self.volume,
            &self.total_purchase_quantity,
            &self.total_purchase_dollars,
            &self.total_sales_quantity,
            &self.total_sales_dollars,
            &self.total_sales_price,
            &self.total_excise_tax,
            &self.freight_cost,
            &self.gross_profit,
            &self.profit_margin,
            &self.stock_turnover,
            &self.sales_to_purchase_ratio,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_with_column_names() {
        let row = VendorBrandSummary {
            vendor_number: SqlKey::Integer(7),
            vendor_name: "Acme".to_string(),
            brand: SqlKey::Text("BrandA".to_string()),
            description: "Gin".to_string(),
            purchase_price: 5.0,
            actual_price: 8.0,
            volume: 750.0,
            total_purchase_quantity: 10.0,
            total_purchase_dollars: 50.0,
            total_sales_quantity: 0.0,
            total_sales_dollars: 0.0,
            total_sales_price: 0.0,
            total_excise_tax: 0.0,
            freight_cost: 0.0,
            gross_profit: -50.0,
            profit_margin: f64::NEG_INFINITY,
            stock_turnover: 0.0,
            sales_to_purchase_ratio: 0.0,
        };

        let json = serde_json::to_value(&row).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), SUMMARY_COLUMNS.len());
        for (name, _) in SUMMARY_COLUMNS {
            assert!(object.contains_key(name), "missing column {}", name);
        }
        assert_eq!(json["VendorNumber"], 7);
        assert_eq!(json["Brand"], "BrandA");
        // serde_json has no representation for non-finite floats
        assert!(json["ProfitMargin"].is_null());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(SqlKey::Integer(4425).to_string(), "4425");
        assert_eq!(SqlKey::Text("V1".to_string()).to_string(), "V1");
    }
}
