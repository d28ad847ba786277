//! Chart construction - turns aggregate results into renderable bar specs

use super::pipeline::SalesReport;
use serde::Serialize;

/// A backend-independent bar chart: a title, axis labels, and one
/// (label, value) pair per bar. Backends decide the visual form.
#[derive(Debug, Clone, Serialize)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

impl BarChartSpec {
    /// Largest bar value, used by backends to scale bars. Zero for an
    /// empty or all-zero chart.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }
}

/// Build the three summary charts from a computed report: category totals,
/// monthly revenue, and top-selling products.
pub fn chart_specs(report: &SalesReport) -> Vec<BarChartSpec> {
    let category = BarChartSpec {
        title: "Sales by product category".to_string(),
        x_label: "Category".to_string(),
        y_label: "Quantity".to_string(),
        bars: report
            .aggregates
            .category_totals
            .iter()
            .map(|(category, quantity)| (category.clone(), *quantity as f64))
            .collect(),
    };

    let monthly = BarChartSpec {
        title: "Monthly sales".to_string(),
        x_label: "Month".to_string(),
        y_label: "Revenue".to_string(),
        bars: report
            .aggregates
            .monthly_revenue
            .iter()
            .map(|m| (m.month.clone(), m.revenue))
            .collect(),
    };

    let top_products = BarChartSpec {
        title: format!("Top {} best-selling products", report.top_products_limit),
        x_label: "Product".to_string(),
        y_label: "Quantity".to_string(),
        bars: report
            .aggregates
            .top_products
            .iter()
            .map(|(product, quantity)| (product.clone(), *quantity as f64))
            .collect(),
    };

    vec![category, monthly, top_products]
}
