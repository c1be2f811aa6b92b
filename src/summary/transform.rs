//! Cleaning and derived metrics for the aggregated summary
//!
//! Applied per row, in order: Volume coercion, null fill, whitespace trim,
//! derived ratios. Row order is preserved.

use super::types::{RawSummaryRow, SqlKey, VendorBrandSummary};
use crate::error::SummaryError;
use rusqlite::types::Value;

/// Placeholder written into empty categorical cells
const FILL_TEXT: &str = "0";

/// Profitability ratios for one vendor/brand row
///
/// Plain f64 division: a zero denominator gives NaN (0/0) or ±inf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub gross_profit: f64,
    pub profit_margin: f64,
    pub stock_turnover: f64,
    pub sales_to_purchase_ratio: f64,
}

impl DerivedMetrics {
    pub fn compute(
        total_sales_dollars: f64,
        total_purchase_dollars: f64,
        total_sales_quantity: f64,
        total_purchase_quantity: f64,
    ) -> Self {
        let gross_profit = total_sales_dollars - total_purchase_dollars;

        Self {
            gross_profit,
            profit_margin: (gross_profit / total_sales_dollars) * 100.0,
            stock_turnover: total_sales_quantity / total_purchase_quantity,
            sales_to_purchase_ratio: total_sales_dollars / total_purchase_dollars,
        }
    }
}

/// Clean the aggregator output and append derived metrics
///
/// Fails on the first Volume cell that is not numeric.
pub fn clean_summary(rows: Vec<RawSummaryRow>) -> Result<Vec<VendorBrandSummary>, SummaryError> {
    let cleaned = rows
        .into_iter()
        .map(clean_row)
        .collect::<Result<Vec<_>, _>>()?;

    let undefined = cleaned
        .iter()
        .filter(|r| !r.profit_margin.is_finite() || !r.sales_to_purchase_ratio.is_finite())
        .count();
    if undefined > 0 {
        log::debug!("{} rows have undefined margin or sales ratio (zero denominator)", undefined);
    }

    Ok(cleaned)
}

fn clean_row(row: RawSummaryRow) -> Result<VendorBrandSummary, SummaryError> {
    let volume = coerce_volume(&row.volume).map_err(|value| SummaryError::TypeCoercion {
        vendor: key_label(&row.vendor_number),
        brand: key_label(&row.brand),
        value,
    })?;

    let total_purchase_quantity = row.total_purchase_quantity.unwrap_or(0.0);
    let total_purchase_dollars = row.total_purchase_dollars.unwrap_or(0.0);
    let total_sales_quantity = row.total_sales_quantity.unwrap_or(0.0);
    let total_sales_dollars = row.total_sales_dollars.unwrap_or(0.0);

    let metrics = DerivedMetrics::compute(
        total_sales_dollars,
        total_purchase_dollars,
        total_sales_quantity,
        total_purchase_quantity,
    );

    Ok(VendorBrandSummary {
        vendor_number: row.vendor_number.unwrap_or(SqlKey::Integer(0)),
        vendor_name: fill_text(row.vendor_name),
        brand: row.brand.unwrap_or(SqlKey::Integer(0)),
        description: fill_text(row.description),
        purchase_price: row.purchase_price.unwrap_or(0.0),
        actual_price: row.actual_price.unwrap_or(0.0),
        volume: volume.unwrap_or(0.0),
        total_purchase_quantity,
        total_purchase_dollars,
        total_sales_quantity,
        total_sales_dollars,
        total_sales_price: row.total_sales_price.unwrap_or(0.0),
        total_excise_tax: row.total_excise_tax.unwrap_or(0.0),
        freight_cost: row.freight_cost.unwrap_or(0.0),
        gross_profit: metrics.gross_profit,
        profit_margin: metrics.profit_margin,
        stock_turnover: metrics.stock_turnover,
        sales_to_purchase_ratio: metrics.sales_to_purchase_ratio,
    })
}

/// Volume as f64; `Ok(None)` for NULL, `Err(text)` when unparsable
pub fn coerce_volume(value: &Value) -> Result<Option<f64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Integer(i) => Ok(Some(*i as f64)),
        Value::Real(r) => Ok(Some(*r)),
        Value::Text(t) => t.trim().parse::<f64>().map(Some).map_err(|_| t.clone()),
        Value::Blob(b) => Err(String::from_utf8_lossy(b).into_owned()),
    }
}

fn fill_text(value: Option<String>) -> String {
    match value {
        Some(s) => s.trim().to_string(),
        None => FILL_TEXT.to_string(),
    }
}

fn key_label(key: &Option<SqlKey>) -> String {
    key.as_ref()
        .map(|k| k.to_string())
        .unwrap_or_else(|| "NULL".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(volume: Value) -> RawSummaryRow {
        RawSummaryRow {
            vendor_number: Some(SqlKey::Text("V1".to_string())),
            vendor_name: Some("  Acme Spirits  ".to_string()),
            brand: Some(SqlKey::Text("BrandA".to_string())),
            description: Some("\tGin 750ml ".to_string()),
            purchase_price: Some(5.0),
            actual_price: Some(8.0),
            volume,
            total_purchase_quantity: Some(10.0),
            total_purchase_dollars: Some(50.0),
            total_sales_quantity: Some(8.0),
            total_sales_dollars: Some(64.0),
            total_sales_price: Some(8.0),
            total_excise_tax: Some(0.4),
            freight_cost: Some(3.0),
        }
    }

    #[test]
    fn test_derived_metrics_example() {
        let metrics = DerivedMetrics::compute(1000.0, 600.0, 0.0, 1.0);
        assert_eq!(metrics.gross_profit, 400.0);
        assert_eq!(metrics.profit_margin, 40.0);
    }

    #[test]
    fn test_clean_row_end_to_end_values() {
        let cleaned = clean_summary(vec![raw_row(Value::Text("750".to_string()))]).unwrap();
        let row = &cleaned[0];

        assert_eq!(row.vendor_name, "Acme Spirits");
        assert_eq!(row.description, "Gin 750ml");
        assert_eq!(row.volume, 750.0);
        assert_eq!(row.gross_profit, 14.0);
        assert_eq!(row.profit_margin, 21.875);
        assert_eq!(row.stock_turnover, 0.8);
        assert_eq!(row.sales_to_purchase_ratio, 1.28);
    }

    #[test]
    fn test_null_fill_for_unmatched_sales_and_freight() {
        let mut raw = raw_row(Value::Null);
        raw.vendor_name = None;
        raw.total_sales_quantity = None;
        raw.total_sales_dollars = None;
        raw.total_sales_price = None;
        raw.total_excise_tax = None;
        raw.freight_cost = None;

        let row = clean_summary(vec![raw]).unwrap().remove(0);

        assert_eq!(row.vendor_name, "0");
        assert_eq!(row.volume, 0.0);
        assert_eq!(row.total_sales_quantity, 0.0);
        assert_eq!(row.total_sales_dollars, 0.0);
        assert_eq!(row.total_sales_price, 0.0);
        assert_eq!(row.total_excise_tax, 0.0);
        assert_eq!(row.freight_cost, 0.0);
        assert_eq!(row.gross_profit, -50.0);
        // -50 / 0
        assert_eq!(row.profit_margin, f64::NEG_INFINITY);
        assert_eq!(row.stock_turnover, 0.0);
        assert_eq!(row.sales_to_purchase_ratio, 0.0);
    }

    #[test]
    fn test_zero_purchase_totals_give_nan() {
        let mut raw = raw_row(Value::Integer(750));
        raw.total_purchase_quantity = Some(0.0);
        raw.total_purchase_dollars = Some(0.0);
        raw.total_sales_quantity = Some(0.0);
        raw.total_sales_dollars = Some(0.0);

        let row = clean_summary(vec![raw]).unwrap().remove(0);

        assert!(row.profit_margin.is_nan());
        assert!(row.stock_turnover.is_nan());
        assert!(row.sales_to_purchase_ratio.is_nan());
    }

    #[test]
    fn test_volume_coercion() {
        assert_eq!(coerce_volume(&Value::Integer(1750)), Ok(Some(1750.0)));
        assert_eq!(coerce_volume(&Value::Real(375.5)), Ok(Some(375.5)));
        assert_eq!(coerce_volume(&Value::Text(" 50 ".to_string())), Ok(Some(50.0)));
        assert_eq!(coerce_volume(&Value::Null), Ok(None));
        assert_eq!(
            coerce_volume(&Value::Text("Unknown".to_string())),
            Err("Unknown".to_string())
        );
    }

    #[test]
    fn test_unparsable_volume_fails_whole_table() {
        let rows = vec![
            raw_row(Value::Text("750".to_string())),
            raw_row(Value::Text("1.75L".to_string())),
        ];

        let err = clean_summary(rows).unwrap_err();
        assert_eq!(err.kind(), "TypeCoercionError");
        assert!(err.to_string().contains("1.75L"));
    }

    #[test]
    fn test_row_order_preserved() {
        let mut first = raw_row(Value::Integer(750));
        first.total_purchase_dollars = Some(10.0);
        let mut second = raw_row(Value::Integer(750));
        second.total_purchase_dollars = Some(500.0);

        let cleaned = clean_summary(vec![first, second]).unwrap();
        assert_eq!(cleaned[0].total_purchase_dollars, 10.0);
        assert_eq!(cleaned[1].total_purchase_dollars, 500.0);
    }
}
