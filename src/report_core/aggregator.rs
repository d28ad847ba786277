//! Group / sum / sort aggregation over the derived record set

use super::deriver::SalesRecord;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Default N for the top-selling products query.
pub const DEFAULT_TOP_PRODUCTS: usize = 5;

/// One month's summed revenue. `month_num` exists only to carry chronological
/// order; presentation drops it and shows the month name.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRevenue {
    pub month_num: u32,
    pub month: String,
    pub revenue: f64,
}

/// The three aggregate queries, each an ordered (key, value) sequence.
/// Constructed fresh per run and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SalesAggregates {
    /// Category → summed quantity, descending by quantity.
    pub category_totals: Vec<(String, u64)>,
    /// Month → summed revenue, chronological (January → December).
    pub monthly_revenue: Vec<MonthlyRevenue>,
    /// Product → summed quantity, descending, truncated to N.
    pub top_products: Vec<(String, u64)>,
}

impl SalesAggregates {
    /// Compute all three queries. An empty record set yields empty
    /// aggregates; headline metrics are where emptiness becomes an error.
    pub fn compute(records: &[SalesRecord], top_n: usize) -> Self {
        let category_totals = sum_quantity_by(records, |r| r.category.as_str());

        let mut top_products = sum_quantity_by(records, |r| r.product.as_str());
        top_products.truncate(top_n);

        Self {
            category_totals,
            monthly_revenue: monthly_revenue(records),
            top_products,
        }
    }
}

/// Group by a string key and sum `quantity` per bucket. Groups are
/// data-driven: only keys observed in the input produce a row. Sorted
/// descending by summed quantity, ties broken by key name ascending so the
/// output is reproducible.
fn sum_quantity_by<'a, F>(records: &'a [SalesRecord], key_fn: F) -> Vec<(String, u64)>
where
    F: Fn(&'a SalesRecord) -> &'a str,
{
    let mut sums: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *sums.entry(key_fn(record)).or_insert(0) += record.quantity;
    }

    let mut totals: Vec<(String, u64)> = sums
        .into_iter()
        .map(|(key, sum)| (key.to_string(), sum))
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    totals
}

/// Group by (month_num, month) and sum revenue. Keying the map by
/// `month_num` makes the result chronological by construction, regardless
/// of input row order.
fn monthly_revenue(records: &[SalesRecord]) -> Vec<MonthlyRevenue> {
    let mut sums: BTreeMap<u32, (String, f64)> = BTreeMap::new();
    for record in records {
        let entry = sums
            .entry(record.month_num)
            .or_insert_with(|| (record.month.clone(), 0.0));
        entry.1 += record.revenue;
    }

    sums.into_iter()
        .map(|(month_num, (month, revenue))| MonthlyRevenue {
            month_num,
            month,
            revenue,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_core::deriver::SalesRecord;
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

    fn example_records() -> Vec<SalesRecord> {
        vec![
            record("2024-01-05", "WidgetA", "Tools", 3, 10.00),
            record("2024-01-20", "WidgetB", "Tools", 2, 5.00),
            record("2024-02-01", "WidgetA", "Tools", 1, 10.00),
        ]
    }

    #[test]
    fn test_example_scenario() {
        let aggregates = SalesAggregates::compute(&example_records(), DEFAULT_TOP_PRODUCTS);

        assert_eq!(aggregates.category_totals, vec![("Tools".to_string(), 6)]);

        assert_eq!(aggregates.monthly_revenue.len(), 2);
        assert_eq!(aggregates.monthly_revenue[0].month, "January");
        assert!((aggregates.monthly_revenue[0].revenue - 40.0).abs() < 1e-9);
        assert_eq!(aggregates.monthly_revenue[1].month, "February");
        assert!((aggregates.monthly_revenue[1].revenue - 10.0).abs() < 1e-9);

        assert_eq!(aggregates.top_products[0], ("WidgetA".to_string(), 4));
        assert_eq!(aggregates.top_products[1], ("WidgetB".to_string(), 2));
    }

    #[test]
    fn test_category_totals_conserve_quantity() {
        let records = vec![
            record("2024-03-01", "A", "Tools", 3, 1.0),
            record("2024-03-02", "B", "Office", 7, 1.0),
            record("2024-03-03", "C", "Tools", 5, 1.0),
        ];
        let aggregates = SalesAggregates::compute(&records, DEFAULT_TOP_PRODUCTS);

        let summed: u64 = aggregates.category_totals.iter().map(|(_, q)| q).sum();
        let total: u64 = records.iter().map(|r| r.quantity).sum();
        assert_eq!(summed, total);
    }

    #[test]
    fn test_monthly_revenue_conserves_revenue() {
        let records = example_records();
        let aggregates = SalesAggregates::compute(&records, DEFAULT_TOP_PRODUCTS);

        let summed: f64 = aggregates.monthly_revenue.iter().map(|m| m.revenue).sum();
        let total: f64 = records.iter().map(|r| r.revenue).sum();
        assert!((summed - total).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_revenue_chronological_regardless_of_input_order() {
        let records = vec![
            record("2024-11-05", "A", "Tools", 1, 1.0),
            record("2024-02-01", "A", "Tools", 1, 1.0),
            record("2024-07-15", "A", "Tools", 1, 1.0),
            record("2024-02-20", "A", "Tools", 1, 1.0),
        ];
        let aggregates = SalesAggregates::compute(&records, DEFAULT_TOP_PRODUCTS);

        let month_nums: Vec<u32> = aggregates
            .monthly_revenue
            .iter()
            .map(|m| m.month_num)
            .collect();
        assert_eq!(month_nums, vec![2, 7, 11]);
        assert!(month_nums.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_top_products_truncated_to_n() {
        let records: Vec<SalesRecord> = (0..8)
            .map(|i| record("2024-01-01", &format!("P{}", i), "Tools", 8 - i, 1.0))
            .collect();
        let aggregates = SalesAggregates::compute(&records, 5);

        assert_eq!(aggregates.top_products.len(), 5);
        assert_eq!(aggregates.top_products[0], ("P0".to_string(), 8));
    }

    #[test]
    fn test_top_products_fewer_than_n_returns_all() {
        let aggregates = SalesAggregates::compute(&example_records(), 5);
        assert_eq!(aggregates.top_products.len(), 2);
    }

    #[test]
    fn test_tie_break_is_key_ascending() {
        let records = vec![
            record("2024-01-01", "Zeta", "Zebra", 4, 1.0),
            record("2024-01-02", "Alpha", "Apple", 4, 1.0),
        ];
        let aggregates = SalesAggregates::compute(&records, DEFAULT_TOP_PRODUCTS);

        assert_eq!(aggregates.category_totals[0].0, "Apple");
        assert_eq!(aggregates.category_totals[1].0, "Zebra");
        assert_eq!(aggregates.top_products[0].0, "Alpha");
    }

    #[test]
    fn test_empty_record_set_yields_empty_aggregates() {
        let aggregates = SalesAggregates::compute(&[], DEFAULT_TOP_PRODUCTS);
        assert!(aggregates.category_totals.is_empty());
        assert!(aggregates.monthly_revenue.is_empty());
        assert!(aggregates.top_products.is_empty());
    }

    #[test]
    fn test_absent_category_produces_no_row() {
        let aggregates = SalesAggregates::compute(&example_records(), DEFAULT_TOP_PRODUCTS);
        assert_eq!(aggregates.category_totals.len(), 1);
    }
}
