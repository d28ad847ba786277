//! Headline metrics - the five scalar summaries of a record set

use super::aggregator::SalesAggregates;
use super::deriver::SalesRecord;
use super::error::ReportError;
use serde::Serialize;

/// The scalar summaries reported at the bottom of every run.
/// `total_revenue` is presented with two-decimal fixed-point formatting.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlineMetrics {
    pub total_sales: u64,
    pub total_revenue: f64,
    pub top_category: String,
    pub best_month: String,
    pub top_product: String,
}

impl HeadlineMetrics {
    /// Compute the headline metrics from the record set and its aggregates.
    ///
    /// A singular result over zero rows is undefined, so an empty record
    /// set fails with `EmptyDataset` instead of returning a sentinel.
    /// Equal-revenue months resolve to the first in chronological order.
    pub fn compute(
        records: &[SalesRecord],
        aggregates: &SalesAggregates,
    ) -> Result<Self, ReportError> {
        let top_category = aggregates
            .category_totals
            .first()
            .map(|(category, _)| category.clone())
            .ok_or(ReportError::EmptyDataset("top category"))?;

        let top_product = aggregates
            .top_products
            .first()
            .map(|(product, _)| product.clone())
            .ok_or(ReportError::EmptyDataset("top product"))?;

        let mut best_month: Option<&super::aggregator::MonthlyRevenue> = None;
        for month in &aggregates.monthly_revenue {
            // Strict comparison keeps the chronologically-first month on ties.
            if best_month.map_or(true, |best| month.revenue > best.revenue) {
                best_month = Some(month);
            }
        }
        let best_month = best_month
            .map(|m| m.month.clone())
            .ok_or(ReportError::EmptyDataset("best month"))?;

        Ok(Self {
            total_sales: records.iter().map(|r| r.quantity).sum(),
            total_revenue: records.iter().map(|r| r.revenue).sum(),
            top_category,
            best_month,
            top_product,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_core::aggregator::DEFAULT_TOP_PRODUCTS;
    use crate::report_core::loader::RawRecord;

    fn record(date: &str, product: &str, category: &str, quantity: u64, price: f64) -> SalesRecord {
        let raw = RawRecord {
            date: date.to_string(),
            product: product.to_string(),
            category: category.to_string(),
            quantity,
            price,
        };
        SalesRecord::from_raw(&raw).unwrap()
    }

    #[test]
    fn test_example_scenario_headlines() {
        let records = vec![
            record("2024-01-05", "WidgetA", "Tools", 3, 10.00),
            record("2024-01-20", "WidgetB", "Tools", 2, 5.00),
            record("2024-02-01", "WidgetA", "Tools", 1, 10.00),
        ];
        let aggregates = SalesAggregates::compute(&records, DEFAULT_TOP_PRODUCTS);
        let headline = HeadlineMetrics::compute(&records, &aggregates).unwrap();

        assert_eq!(headline.total_sales, 6);
        assert!((headline.total_revenue - 50.0).abs() < 1e-9);
        assert_eq!(headline.top_category, "Tools");
        assert_eq!(headline.best_month, "January");
        assert_eq!(headline.top_product, "WidgetA");
    }

    #[test]
    fn test_empty_dataset_is_explicit_error() {
        let aggregates = SalesAggregates::compute(&[], DEFAULT_TOP_PRODUCTS);
        let err = HeadlineMetrics::compute(&[], &aggregates).unwrap_err();
        assert!(matches!(err, ReportError::EmptyDataset(_)), "got {:?}", err);
    }

    #[test]
    fn test_best_month_tie_resolves_chronologically() {
        // March and June both sum to 20.0; March must win.
        let records = vec![
            record("2024-06-10", "A", "Tools", 2, 10.0),
            record("2024-03-05", "A", "Tools", 4, 5.0),
        ];
        let aggregates = SalesAggregates::compute(&records, DEFAULT_TOP_PRODUCTS);
        let headline = HeadlineMetrics::compute(&records, &aggregates).unwrap();

        assert_eq!(headline.best_month, "March");
    }
}
