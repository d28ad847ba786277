//! CSV loader - reads the delimited record source into typed rows

use super::error::ReportError;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One raw input row. `Date` stays a string until the deriver parses it;
/// `Quantity` deserializes as u64 so negative quantities are rejected here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Quantity")]
    pub quantity: u64,
    #[serde(rename = "Price")]
    pub price: f64,
}

/// Read every row from a CSV source with a header line.
pub fn load_records<R: Read>(source: R) -> Result<Vec<RawRecord>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawRecord = row?;
        records.push(record);
    }

    log::info!("📖 Loaded {} rows", records.len());
    Ok(records)
}

/// Open a CSV file and load all rows.
pub fn load_file(path: &Path) -> Result<Vec<RawRecord>, ReportError> {
    let file = File::open(path)?;
    load_records(file)
}
