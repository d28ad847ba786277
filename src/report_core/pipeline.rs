//! Pipeline entry point - one call from record source to structured report

use super::aggregator::{SalesAggregates, DEFAULT_TOP_PRODUCTS};
use super::chart::BarChartSpec;
use super::chart_backend::{ChartBackend, ChartError};
use super::deriver::{derive_records, SalesRecord};
use super::error::ReportError;
use super::headline::HeadlineMetrics;
use super::loader::load_records;
use super::terminal_chart::TerminalChartBackend;
use super::text_chart::TextChartBackend;
use crate::config::ChartBackendKind;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

/// Tunables for one pipeline run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// N for the top-N products query.
    pub top_products: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_products: DEFAULT_TOP_PRODUCTS,
        }
    }
}

/// Everything one run computes, in one immutable value. Reporter and
/// renderer both consume this; neither feeds anything back.
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    pub row_count: usize,
    pub field_count: usize,
    pub top_products_limit: usize,
    /// The derived record set; kept for the report preview, not exported.
    #[serde(skip_serializing)]
    pub records: Vec<SalesRecord>,
    pub aggregates: SalesAggregates,
    pub headline: HeadlineMetrics,
}

/// Run the full pipeline over a record source: load, derive, aggregate,
/// compute headline metrics. Fails fast on the first error; an empty
/// source fails when the headline metrics are computed.
pub fn run_pipeline<R: Read>(source: R, options: &ReportOptions) -> Result<SalesReport, ReportError> {
    let raw = load_records(source)?;
    let records = derive_records(&raw)?;

    let aggregates = SalesAggregates::compute(&records, options.top_products);
    let headline = HeadlineMetrics::compute(&records, &aggregates)?;

    log::info!(
        "✅ Pipeline complete: {} rows, {} categories, {} months",
        records.len(),
        aggregates.category_totals.len(),
        aggregates.monthly_revenue.len()
    );

    Ok(SalesReport {
        row_count: records.len(),
        field_count: SalesRecord::FIELD_COUNT,
        top_products_limit: options.top_products,
        records,
        aggregates,
        headline,
    })
}

/// Unified renderer that routes charts to the configured backend.
pub enum ChartRenderer {
    Terminal(TerminalChartBackend),
    Text(TextChartBackend),
}

impl ChartRenderer {
    /// Create a renderer for the configured backend kind.
    pub fn new(kind: ChartBackendKind, base_path: PathBuf) -> Result<Self, ChartError> {
        match kind {
            ChartBackendKind::Terminal => Ok(ChartRenderer::Terminal(TerminalChartBackend::new())),
            ChartBackendKind::Text => Ok(ChartRenderer::Text(TextChartBackend::new(base_path)?)),
        }
    }

    /// Render every chart in sequence through the configured backend.
    pub fn render_all(&mut self, charts: &[BarChartSpec]) -> Result<(), ChartError> {
        for chart in charts {
            match self {
                ChartRenderer::Terminal(b) => b.render(chart)?,
                ChartRenderer::Text(b) => b.render(chart)?,
            }
        }
        Ok(())
    }

    /// Get backend type for logging
    pub fn backend_type(&self) -> &'static str {
        match self {
            ChartRenderer::Terminal(_) => "terminal",
            ChartRenderer::Text(_) => "text",
        }
    }
}
