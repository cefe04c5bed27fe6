//! Dashboard configuration.
//!
//! Chart sub-configs are serialized to JSON and passed straight to the D3.js
//! renderers, so field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// World boundaries used by the map.
pub const DEFAULT_GEO_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";

/// Indicator dataset, served alongside the WASM bundle.
pub const DEFAULT_DATA_URL: &str = "data/water_data.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(30, 30, 30, 30)
    }
}

/// Choropleth map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    pub width: u32,
    pub height: u32,
    /// Natural Earth projection scale.
    pub projection_scale: f64,
    /// Zoom scale extent `[min, max]`.
    pub zoom_extent: [f64; 2],
    /// Bottom of the sequential gradient (value 0).
    pub color_low: String,
    /// Top of the sequential gradient (max value).
    pub color_high: String,
    pub no_data_color: String,
    pub base_fill: String,
    /// Legend title when the filtered records carry no unit.
    pub legend_unit: String,
    pub transition_ms: u32,
    pub marker_color: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            projection_scale: 250.0,
            zoom_extent: [1.0, 8.0],
            color_low: "#222222".to_string(),
            color_high: "#7fff00".to_string(),
            no_data_color: "#222222".to_string(),
            base_fill: "#e0e0e0".to_string(),
            legend_unit: "%".to_string(),
            transition_ms: 500,
            marker_color: "#7fff00".to_string(),
        }
    }
}

/// Grouped bar chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub padding_inner: f64,
    pub padding_group: f64,
    pub colors: [String; 2],
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            margin: Margin::new(30, 20, 300, 200),
            padding_inner: 0.2,
            padding_group: 0.1,
            colors: series_colors(),
        }
    }
}

/// Live line chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub stroke_width: f64,
    /// Duration of the stroke reveal animation.
    pub reveal_ms: u32,
    /// Delay added per series so the second line starts after the first.
    pub stagger_ms: u32,
    pub colors: [String; 2],
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            margin: Margin::default(),
            stroke_width: 4.0,
            reveal_ms: 2000,
            stagger_ms: 300,
            colors: series_colors(),
        }
    }
}

fn series_colors() -> [String; 2] {
    ["#7fff00".to_string(), "#ffffff".to_string()]
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub geo_url: String,
    pub data_url: String,
    /// Initial year when the dataset yields no year range.
    pub default_year: i32,
    pub map: MapConfig,
    pub bar: BarChartConfig,
    pub line: LineChartConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            geo_url: DEFAULT_GEO_URL.to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            default_year: 2020,
            map: MapConfig::default(),
            bar: BarChartConfig::default(),
            line: LineChartConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse an override document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn map_json(&self) -> String {
        serde_json::to_string(&self.map).unwrap_or_default()
    }

    pub fn bar_json(&self) -> String {
        serde_json::to_string(&self.bar).unwrap_or_default()
    }

    pub fn line_json(&self) -> String {
        serde_json::to_string(&self.line).unwrap_or_default()
    }
}
