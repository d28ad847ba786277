//! Text reporter - formats a computed report for a console sink
//!
//! Output is deterministic: the same report always renders byte-identical
//! text, so reruns over an unchanged input file diff clean.

use super::pipeline::SalesReport;
use std::io::{self, Write};

/// Rows shown in the dataset preview.
const PREVIEW_ROWS: usize = 5;

/// Write the full text report: dataset shape, a head preview, the three
/// aggregate tables, and the headline metrics.
pub fn write_report<W: Write>(out: &mut W, report: &SalesReport) -> io::Result<()> {
    writeln!(
        out,
        "Dataset size: {} rows x {} fields",
        report.row_count, report.field_count
    )?;

    writeln!(out)?;
    writeln!(out, "First {} rows:", PREVIEW_ROWS.min(report.row_count))?;
    for record in report.records.iter().take(PREVIEW_ROWS) {
        writeln!(
            out,
            "  {}  {:<12} {:<12} qty={:<4} price={:>8.2} revenue={:>10.2}",
            record.date, record.product, record.category, record.quantity, record.price,
            record.revenue
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Sales by product category:")?;
    for (category, quantity) in &report.aggregates.category_totals {
        writeln!(out, "  {:<16} {:>8}", category, quantity)?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly revenue:")?;
    for month in &report.aggregates.monthly_revenue {
        writeln!(out, "  {:<16} {:>12.2}", month.month, month.revenue)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Top {} best-selling products:",
        report.top_products_limit
    )?;
    for (product, quantity) in &report.aggregates.top_products {
        writeln!(out, "  {:<16} {:>8}", product, quantity)?;
    }

    writeln!(out)?;
    writeln!(out, "Key indicators:")?;
    writeln!(out, "  Total sales: {}", report.headline.total_sales)?;
    writeln!(out, "  Total revenue: ${:.2}", report.headline.total_revenue)?;
    writeln!(
        out,
        "  Most popular category: {}",
        report.headline.top_category
    )?;
    writeln!(out, "  Best month: {}", report.headline.best_month)?;
    writeln!(
        out,
        "  Best-selling product: {}",
        report.headline.top_product
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_core::pipeline::{run_pipeline, ReportOptions};

    const SAMPLE_CSV: &str = "Date,Product,Category,Quantity,Price\n\
                              2024-01-05,WidgetA,Tools,3,10.00\n\
                              2024-01-20,WidgetB,Tools,2,5.00\n\
                              2024-02-01,WidgetA,Tools,1,10.00\n";

    fn render() -> String {
        let report = run_pipeline(SAMPLE_CSV.as_bytes(), &ReportOptions::default()).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_contains_headline_metrics() {
        let text = render();
        assert!(text.contains("Total sales: 6"));
        assert!(text.contains("Total revenue: $50.00"));
        assert!(text.contains("Most popular category: Tools"));
        assert!(text.contains("Best month: January"));
        assert!(text.contains("Best-selling product: WidgetA"));
    }

    #[test]
    fn test_report_contains_dataset_shape() {
        let text = render();
        assert!(text.contains("Dataset size: 3 rows x 9 fields"));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_monthly_section_in_calendar_order() {
        let text = render();
        let january = text.find("January").unwrap();
        let february = text.find("February").unwrap();
        assert!(january < february);
    }
}
