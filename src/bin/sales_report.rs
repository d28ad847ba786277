//! Sales Report Binary - One-Shot Batch Analytics
//!
//! Reads a CSV of sales records, prints the text report to stdout and
//! renders three bar charts, then exits.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin sales_report
//! cargo run --release --bin sales_report -- --backend text
//! ```
//!
//! ## Environment Variables
//!
//! - SALES_DATA_PATH - Path to the input CSV (default: sales_data.csv)
//! - TOP_PRODUCTS - N for the top-N products query (default: 5)
//! - CHART_BACKEND - `terminal` or `text` (default: terminal)
//! - CHARTS_OUTPUT_PATH - Output directory for text charts (default: charts)
//! - SUMMARY_JSON_PATH - Optional path for a JSON summary export
//! - RUST_LOG - Logging level (optional, default: info)

use salesflow::report_core::{
    chart_specs, run_pipeline, write_report, ChartRenderer, ReportOptions, SummaryWriter,
};
use salesflow::{ChartBackendKind, Config};
use std::env;

fn parse_backend_from_args() -> Option<ChartBackendKind> {
    let args: Vec<String> = env::args().collect();
    let idx = args.iter().position(|x| x == "--backend")?;
    args.get(idx + 1)
        .and_then(|s| ChartBackendKind::from_str(s))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    if let Err(e) = run() {
        log::error!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::from_env();
    if let Some(backend) = parse_backend_from_args() {
        config.chart_backend = backend;
    }

    log::info!("🚀 Starting sales report");
    log::info!("   Input: {}", config.input_path.display());
    log::info!("   Top products: {}", config.top_products);

    let options = ReportOptions {
        top_products: config.top_products,
    };

    // Load → derive → aggregate, failing fast on the first error
    let source = std::fs::File::open(&config.input_path).map_err(salesflow::ReportError::Load)?;
    let report = run_pipeline(source, &options)?;

    // Text report to stdout
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report)?;

    // Optional JSON summary
    if let Some(path) = &config.summary_path {
        SummaryWriter::new(path.clone()).write(&report)?;
    }

    // Three bar charts through the configured backend
    let mut renderer = ChartRenderer::new(config.chart_backend, config.charts_path.clone())?;
    log::info!("📊 Chart backend: {}", renderer.backend_type());
    renderer.render_all(&chart_specs(&report))?;

    log::info!("✅ Report complete");
    Ok(())
}
