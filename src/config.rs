use crate::report_core::DEFAULT_TOP_PRODUCTS;
use std::env;
use std::path::PathBuf;

/// Which chart backend renders the three summary charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBackendKind {
    /// Interactive ratatui charts, one blocking screen per chart.
    Terminal,
    /// ASCII charts written to files (non-interactive runs and tests).
    Text,
}

impl ChartBackendKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "terminal" => Some(ChartBackendKind::Terminal),
            "text" => Some(ChartBackendKind::Text),
            _ => None,
        }
    }
}

/// Configuration loaded from environment variables
pub struct Config {
    pub input_path: PathBuf,
    pub top_products: usize,
    pub chart_backend: ChartBackendKind,
    pub charts_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    pub rust_log: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default, so a bare `sales_report` run reads
    /// `sales_data.csv` from the working directory and opens interactive
    /// charts.
    pub fn from_env() -> Self {
        let input_path = env::var("SALES_DATA_PATH")
            .unwrap_or_else(|_| "sales_data.csv".to_string())
            .into();

        let top_products = env::var("TOP_PRODUCTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TOP_PRODUCTS);

        let chart_backend = env::var("CHART_BACKEND")
            .ok()
            .and_then(|s| ChartBackendKind::from_str(&s))
            .unwrap_or(ChartBackendKind::Terminal);

        let charts_path = env::var("CHARTS_OUTPUT_PATH")
            .unwrap_or_else(|_| "charts".to_string())
            .into();

        let summary_path = env::var("SUMMARY_JSON_PATH").ok().map(PathBuf::from);

        let rust_log = env::var("RUST_LOG").ok();

        Self {
            input_path,
            top_products,
            chart_backend,
            charts_path,
            summary_path,
            rust_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!(
            ChartBackendKind::from_str("terminal"),
            Some(ChartBackendKind::Terminal)
        );
        assert_eq!(
            ChartBackendKind::from_str("text"),
            Some(ChartBackendKind::Text)
        );
        assert_eq!(ChartBackendKind::from_str("svg"), None);
    }
}
