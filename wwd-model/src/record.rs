//! Indicator records: one measured value per country, indicator and year.

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};

/// A single water indicator observation.
///
/// Field names follow the published JSON keys (`Country`, `Country_Code`, ...)
/// so the dataset deserializes without a mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    #[serde(rename = "Country")]
    pub country: String,
    /// ISO 3166-1 alpha-3 code, matched against the map features.
    #[serde(rename = "Country_Code")]
    pub country_code: String,
    #[serde(rename = "Indicator")]
    pub indicator: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "Unit", default)]
    pub unit: String,
}

impl IndicatorRecord {
    pub fn is_for(&self, country: &str, indicator: &str) -> bool {
        self.country == country && self.indicator == indicator
    }
}

/// Parse the indicator dataset (a JSON array of records).
pub fn parse_records(json: &str) -> Result<Vec<IndicatorRecord>> {
    let records: Vec<IndicatorRecord> =
        serde_json::from_str(json).map_err(|source| DashboardError::Parse {
            what: "indicator records",
            source,
        })?;
    log::info!("Parsed {} indicator records", records.len());
    Ok(records)
}
