use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::application::Total;
use crate::domain::{format_date, ExpenseRecord};

/// Listing of the ledger with its total, as emitted in JSON
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSnapshot<'a> {
    pub version: &'static str,
    pub exported_at: DateTime<Utc>,
    pub expenses: &'a [ExpenseRecord],
    pub total: Option<&'a Total>,
}

/// Writes ledger records in machine-readable formats
pub struct Exporter<'a> {
    records: &'a [ExpenseRecord],
}

impl<'a> Exporter<'a> {
    pub fn new(records: &'a [ExpenseRecord]) -> Self {
        Self { records }
    }

    /// Export records to CSV, one row per expense in ledger order
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "row",
            "id",
            "amount",
            "currency",
            "category",
            "date",
            "payment_method",
        ])?;

        let mut count = 0;
        for (index, record) in self.records.iter().enumerate() {
            csv_writer.write_record([
                (index + 1).to_string(),
                record.id.to_string(),
                record.amount.clone(),
                record.currency.to_string(),
                record.category.to_string(),
                format_date(record.date),
                record.payment_method.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export records and, when available, the total as pretty JSON
    pub fn export_json<W: Write>(&self, mut writer: W, total: Option<&Total>) -> Result<usize> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION"),
            exported_at: Utc::now(),
            expenses: self.records,
            total,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(self.records.len())
    }
}
