//! Field derivation - augments raw rows with revenue and calendar fields

use super::error::ReportError;
use super::loader::RawRecord;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A fully derived sales record. The derived fields are pure functions of
/// the base fields and are computed exactly once, at load time.
#[derive(Debug, Clone, Serialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub product: String,
    pub category: String,
    pub quantity: u64,
    pub price: f64,
    pub revenue: f64,
    pub month: String,
    pub month_num: u32,
    pub day_of_week: String,
}

impl SalesRecord {
    /// Base fields plus the four derived fields.
    pub const FIELD_COUNT: usize = 9;

    /// Derive a record from one raw row. Dates must be ISO `YYYY-MM-DD`.
    pub fn from_raw(raw: &RawRecord) -> Result<Self, ReportError> {
        let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d").map_err(|e| {
            ReportError::Parse {
                field: "Date".to_string(),
                detail: format!("invalid calendar date `{}`: {}", raw.date, e),
            }
        })?;

        Ok(Self {
            date,
            product: raw.product.clone(),
            category: raw.category.clone(),
            quantity: raw.quantity,
            price: raw.price,
            revenue: raw.quantity as f64 * raw.price,
            month: date.format("%B").to_string(),
            month_num: date.month(),
            day_of_week: date.format("%A").to_string(),
        })
    }
}

/// Derive the whole record set. Fails on the first bad row; no partial set
/// is ever handed downstream.
pub fn derive_records(raw: &[RawRecord]) -> Result<Vec<SalesRecord>, ReportError> {
    raw.iter().map(SalesRecord::from_raw).collect()
}
