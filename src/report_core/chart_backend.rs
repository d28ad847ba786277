//! Chart backend trait
//!
//! Defines the interface for rendering bar charts to different surfaces.
//! The renderer has no return value consumed downstream; it can never
//! affect computed metrics.

use super::chart::BarChartSpec;

#[derive(Debug)]
pub enum ChartError {
    Io(std::io::Error),
    Terminal(String),
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        ChartError::Io(err)
    }
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "chart IO error: {}", e),
            ChartError::Terminal(e) => write!(f, "terminal error: {}", e),
        }
    }
}

impl std::error::Error for ChartError {}

/// Backend trait for rendering one bar chart at a time.
pub trait ChartBackend {
    /// Render a single chart. Interactive backends block until the user
    /// dismisses the chart.
    fn render(&mut self, chart: &BarChartSpec) -> Result<(), ChartError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}
