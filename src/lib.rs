
pub mod config;
pub mod report_core;

pub use config::{ChartBackendKind, Config};
pub use report_core::{
    run_pipeline, BarChartSpec, ChartBackend, ChartError, ChartRenderer, HeadlineMetrics,
    MonthlyRevenue, RawRecord, ReportError, ReportOptions, SalesAggregates, SalesRecord,
    SalesReport,
};
