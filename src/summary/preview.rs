//! Text previews of the first rows at each stage, for the run log

use super::types::{RawSummaryRow, SqlKey, VendorBrandSummary, SUMMARY_COLUMNS};
use rusqlite::types::Value;

/// Rows that can be rendered as a preview table
pub trait PreviewRow {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl PreviewRow for RawSummaryRow {
    fn headers() -> Vec<&'static str> {
        SUMMARY_COLUMNS[..14].iter().map(|(name, _)| *name).collect()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt_key(&self.vendor_number),
            opt_text(&self.vendor_name),
            opt_key(&self.brand),
            opt_text(&self.description),
            opt_num(self.purchase_price),
            opt_num(self.actual_price),
            value_cell(&self.volume),
            opt_num(self.total_purchase_quantity),
            opt_num(self.total_purchase_dollars),
            opt_num(self.total_sales_quantity),
            opt_num(self.total_sales_dollars),
            opt_num(self.total_sales_price),
            opt_num(self.total_excise_tax),
            opt_num(self.freight_cost),
        ]
    }
}

impl PreviewRow for VendorBrandSummary {
    fn headers() -> Vec<&'static str> {
        SUMMARY_COLUMNS.iter().map(|(name, _)| *name).collect()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.vendor_number.to_string(),
            self.vendor_name.clone(),
            self.brand.to_string(),
            self.description.clone(),
            num(self.purchase_price),
            num(self.actual_price),
            num(self.volume),
            num(self.total_purchase_quantity),
            num(self.total_purchase_dollars),
            num(self.total_sales_quantity),
            num(self.total_sales_dollars),
            num(self.total_sales_price),
            num(self.total_excise_tax),
            num(self.freight_cost),
            num(self.gross_profit),
            num(self.profit_margin),
            num(self.stock_turnover),
            num(self.sales_to_purchase_ratio),
        ]
    }
}

/// Render the first `limit` rows as an aligned table with a header line
/// and a trailing `[n rows]` count
pub fn preview<R: PreviewRow>(rows: &[R], limit: usize) -> String {
    let headers = R::headers();
    let body: Vec<Vec<String>> = rows.iter().take(limit).map(|r| r.cells()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(render(headers.iter().map(|h| h.to_string()).collect()));
    for cells in body {
        lines.push(render(cells));
    }
    lines.push(format!("[{} rows]", rows.len()));

    lines.join("\n")
}

fn num(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.2}", v)
    }
}

fn opt_num(v: Option<f64>) -> String {
    v.map(num).unwrap_or_else(|| "NULL".to_string())
}

fn opt_text(v: &Option<String>) -> String {
    v.clone().unwrap_or_else(|| "NULL".to_string())
}

fn opt_key(v: &Option<SqlKey>) -> String {
    v.as_ref().map(|k| k.to_string()).unwrap_or_else(|| "NULL".to_string())
}

fn value_cell(v: &Value) -> String {
    match v {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => num(*r),
        Value::Text(t) => t.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
