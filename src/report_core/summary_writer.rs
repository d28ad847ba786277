//! JSON summary writer - exports the computed report for other tooling

use super::error::ReportError;
use super::pipeline::SalesReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct SummaryWriter {
    path: PathBuf,
}

impl SummaryWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write the report as pretty-printed JSON (shape, aggregates and
    /// headline metrics; individual records are not exported).
    pub fn write(&self, report: &SalesReport) -> Result<(), ReportError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writeln!(writer)?;
        writer.flush()?;

        log::info!("📝 Wrote JSON summary to: {}", self.path.display());
        Ok(())
    }
}
