//! File-backed chart backend - ASCII bar charts written per chart
//!
//! Used for non-interactive runs and tests; one text file per chart under
//! a base directory.

use super::chart::BarChartSpec;
use super::chart_backend::{ChartBackend, ChartError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Width of the widest bar, in characters.
const BAR_WIDTH: usize = 40;

pub struct TextChartBackend {
    base_path: PathBuf,
}

impl TextChartBackend {
    pub fn new(base_path: PathBuf) -> Result<Self, ChartError> {
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn chart_path(&self, chart: &BarChartSpec) -> PathBuf {
        let slug: String = chart
            .title
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.txt", slug))
    }
}

impl ChartBackend for TextChartBackend {
    fn render(&mut self, chart: &BarChartSpec) -> Result<(), ChartError> {
        let path = self.chart_path(chart);
        let mut out = BufWriter::new(File::create(&path)?);

        writeln!(out, "{}", chart.title)?;
        writeln!(out, "{} vs {}", chart.y_label, chart.x_label)?;
        writeln!(out)?;

        let max = chart.max_value();
        let label_width = chart
            .bars
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);

        for (label, value) in &chart.bars {
            let filled = if max > 0.0 {
                ((value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                out,
                "{:<width$} | {:<bar$} {:.2}",
                label,
                "#".repeat(filled),
                value,
                width = label_width,
                bar = BAR_WIDTH
            )?;
        }

        out.flush()?;
        log::info!("📝 Wrote chart to: {}", path.display());
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "text"
    }
}
