//! View model structs produced by [`crate::views`].
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// Fill color for one map feature.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFill {
    /// Position of the feature in the world collection (matches the D3 path order).
    pub index: usize,
    pub code: Option<String>,
    pub fill: String,
    /// The matched record value, `None` when the country has no data.
    pub value: Option<f64>,
}

/// Continuous gradient legend attached to the map.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub min_label: String,
    pub max_label: String,
    pub unit: String,
    pub color_low: String,
    pub color_high: String,
}

/// Everything the map needs for one recolor pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethView {
    pub year: i32,
    pub indicator: String,
    pub max_value: f64,
    pub fills: Vec<FeatureFill>,
    pub legend: Legend,
    pub has_data: bool,
}

/// One indicator group in the comparison bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub indicator: String,
    /// Value for the first country, `0.0` when it has no record.
    pub value1: f64,
    /// Value for the second country, `0.0` when it has no record.
    pub value2: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub title: String,
    pub year: i32,
    pub countries: [String; 2],
    pub rows: Vec<ComparisonRow>,
    /// Upper bound of the value axis after rounding to nice ticks.
    pub y_max: f64,
}

impl ComparisonView {
    pub fn has_data(&self) -> bool {
        !self.rows.is_empty()
    }
}

/// A single (year, value) point of a line series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePoint {
    pub year: i32,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub title: String,
    pub x_domain: (i32, i32),
    pub y_domain: (f64, f64),
    pub series: Vec<LineSeries>,
}

/// The live line view: either a chart or an explicit no-data message.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LiveLineView {
    NoData { message: String },
    Chart(LineChart),
}
