//! Reports

use std::io;

use rust_decimal::Decimal;
use tabled::{builder::Builder, settings::Style};

use crate::{
    money::amount,
    records::{DailySaleRecord, SALE_TIME_FORMAT, SaleRecord},
};

/// Read-only report over the full sale history.
///
/// Records appear in insertion order of the sale log; the grand total is the
/// sum of every recorded sale amount.
#[derive(Debug, Clone)]
pub struct SalesReport<'a> {
    records: &'a [SaleRecord],
    grand_total: Decimal,
}

impl<'a> SalesReport<'a> {
    pub(crate) fn new(records: &'a [SaleRecord]) -> Self {
        let grand_total = records.iter().map(SaleRecord::amount).sum();

        Self {
            records,
            grand_total,
        }
    }

    /// Records in sale-log insertion order.
    #[must_use]
    pub fn records(&self) -> &'a [SaleRecord] {
        self.records
    }

    /// Sum of all sale amounts.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    /// Whether the sale log was empty when the report was derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders the report as human-readable lines.
    ///
    /// An empty sale log yields the distinct "no sales" line instead of a
    /// total.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec!["Sales Report:".to_string()];

        if self.is_empty() {
            lines.push("No sales have been made yet.".to_string());
            return lines;
        }

        for record in self.records {
            lines.push(format!(
                "Product: {}, Quantity Sold: {}, Sale Amount: {}, Time: {}",
                record.product(),
                record.quantity(),
                amount(record.amount()),
                record.sold_at().format(SALE_TIME_FORMAT),
            ));
        }

        lines.push(format!("Total Sales: {}", amount(self.grand_total)));

        lines
    }

    /// Writes the report as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_table(&self, out: &mut dyn io::Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "No sales have been made yet.");
        }

        let mut builder = Builder::default();

        builder.push_record(["Product", "Quantity", "Amount", "Time"]);

        for record in self.records {
            builder.push_record([
                record.product().to_string(),
                record.quantity().to_string(),
                amount(record.amount()).to_string(),
                record.sold_at().format(SALE_TIME_FORMAT).to_string(),
            ]);
        }

        builder.push_record([
            "Total".to_string(),
            String::new(),
            amount(self.grand_total).to_string(),
            String::new(),
        ]);

        let mut table = builder.build();
        table.with(Style::sharp());

        writeln!(out, "{table}")
    }
}

/// Read-only report over the daily sale log.
#[derive(Debug, Clone)]
pub struct DailySalesReport<'a> {
    records: &'a [DailySaleRecord],
    total: Decimal,
}

impl<'a> DailySalesReport<'a> {
    pub(crate) fn new(records: &'a [DailySaleRecord]) -> Self {
        let total = records.iter().map(DailySaleRecord::amount).sum();

        Self { records, total }
    }

    /// Records in daily-log insertion order.
    #[must_use]
    pub fn records(&self) -> &'a [DailySaleRecord] {
        self.records
    }

    /// Sum of all daily sale amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Whether the daily log was empty when the report was derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders the report as human-readable lines.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec!["Daily Sales Report:".to_string()];

        if self.is_empty() {
            lines.push("No sales data available for today.".to_string());
            return lines;
        }

        for record in self.records {
            lines.push(format!(
                "Time: {}, Sale Amount: {}",
                record.sold_at().format(SALE_TIME_FORMAT),
                amount(record.amount()),
            ));
        }

        lines.push(format!("Total Sales for Today: {}", amount(self.total)));

        lines
    }

    /// Writes the report as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_table(&self, out: &mut dyn io::Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "No sales data available for today.");
        }

        let mut builder = Builder::default();

        builder.push_record(["Time", "Amount"]);

        for record in self.records {
            builder.push_record([
                record.sold_at().format(SALE_TIME_FORMAT).to_string(),
                amount(record.amount()).to_string(),
            ]);
        }

        builder.push_record(["Total".to_string(), amount(self.total).to_string()]);

        let mut table = builder.build();
        table.with(Style::sharp());

        writeln!(out, "{table}")
    }
}
