//! JSONL backend: one summary row per line, file rewritten on every run

use super::types::VendorBrandSummary;
use super::writer_backend::SummaryWriterBackend;
use crate::error::SummaryError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct JsonlSummaryWriter {
    path: PathBuf,
}

impl JsonlSummaryWriter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SummaryError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        log::info!("📝 Writing vendor summary to: {}", path.display());

        Ok(Self { path })
    }
}

impl SummaryWriterBackend for JsonlSummaryWriter {
    fn write_summary(&mut self, rows: &[VendorBrandSummary]) -> Result<usize, SummaryError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);

        for row in rows {
            serde_json::to_writer(&mut writer, row)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        log::debug!("✅ Wrote {} rows to {}", rows.len(), self.path.display());

        Ok(rows.len())
    }

    fn backend_type(&self) -> &'static str {
        "JSONL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::types::SqlKey;
    use tempfile::tempdir;

    fn create_test_row(vendor: &str) -> VendorBrandSummary {
        VendorBrandSummary {
            vendor_number: SqlKey::Text(vendor.to_string()),
            vendor_name: "Acme".to_string(),
            brand: SqlKey::Integer(100),
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
        }
    }

    #[test]
    fn test_jsonl_write_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exports/summary.jsonl");
        let mut writer = JsonlSummaryWriter::new(&path).unwrap();

        writer
            .write_summary(&[create_test_row("V1"), create_test_row("V2")])
            .unwrap();
        writer.write_summary(&[create_test_row("V3")]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["VendorNumber"], "V3");
        assert_eq!(parsed["Brand"], 100);
        assert_eq!(parsed["GrossProfit"], -50.0);
        assert!(parsed["ProfitMargin"].is_null());
    }
}
