//! Report Core - One-Shot Sales Analytics Pipeline
//!
//! This module provides the batch pipeline that turns a delimited sales
//! record source into aggregate tables, headline metrics, a text report
//! and three bar charts.
//!
//! # Architecture
//!
//! ```text
//! CSV source → Loader (RawRecord rows)
//!     ↓
//! Deriver (revenue, month, month_num, day_of_week)
//!     ↓
//! Aggregator (category totals, monthly revenue, top-N products)
//!     ↓
//! HeadlineMetrics (total sales/revenue, top category/month/product)
//!     ↓
//! Reporter → text sink        ChartRenderer → terminal or file backend
//! ```
//!
//! The whole pipeline is sequential and runs exactly once per process;
//! any error aborts the run before partial output is produced.

pub mod aggregator;
pub mod chart;
pub mod chart_backend;
pub mod deriver;
pub mod error;
pub mod headline;
pub mod loader;
pub mod pipeline;
pub mod reporter;
pub mod summary_writer;
pub mod terminal_chart;
pub mod text_chart;

pub use aggregator::{MonthlyRevenue, SalesAggregates, DEFAULT_TOP_PRODUCTS};
pub use chart::{chart_specs, BarChartSpec};
pub use chart_backend::{ChartBackend, ChartError};
pub use deriver::{derive_records, SalesRecord};
pub use error::ReportError;
pub use headline::HeadlineMetrics;
pub use loader::{load_file, load_records, RawRecord};
pub use pipeline::{run_pipeline, ChartRenderer, ReportOptions, SalesReport};
pub use reporter::write_report;
pub use summary_writer::SummaryWriter;
pub use terminal_chart::TerminalChartBackend;
pub use text_chart::TextChartBackend;
