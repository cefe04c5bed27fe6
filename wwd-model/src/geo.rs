//! World boundary features.
//!
//! Only the identifying properties are typed; geometry stays raw JSON and is
//! handed to D3 unchanged for projection and path generation.

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display name used when a feature carries no `name` property.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_a3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Any other properties, preserved for the JS side.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single country boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    /// Feature identifier; string or number depending on the source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub geometry: Value,
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl GeoFeature {
    /// Country code used to join against indicator records:
    /// `properties.iso_a3`, falling back to the feature `id`.
    pub fn code(&self) -> Option<String> {
        if let Some(code) = non_empty(&self.properties.iso_a3) {
            return Some(code.to_string());
        }
        match &self.id {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Name shown on the map marker and written into the country selectors.
    pub fn display_name(&self) -> &str {
        non_empty(&self.properties.name).unwrap_or(UNKNOWN_COUNTRY)
    }
}

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    pub features: Vec<GeoFeature>,
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

impl FeatureCollection {
    pub fn feature(&self, index: usize) -> Result<&GeoFeature> {
        self.features
            .get(index)
            .ok_or(DashboardError::FeatureIndex(index))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Parse a world boundary GeoJSON document.
pub fn parse_feature_collection(json: &str) -> Result<FeatureCollection> {
    let collection: FeatureCollection =
        serde_json::from_str(json).map_err(|source| DashboardError::Parse {
            what: "world boundaries",
            source,
        })?;
    if collection.is_empty() {
        return Err(DashboardError::EmptyDataset("world boundaries"));
    }
    log::info!("Parsed {} boundary features", collection.len());
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type":"Feature","id":"CAN","properties":{"name":"Canada","iso_a3":"CAN"},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
            {"type":"Feature","id":"MEX","properties":{"name":"Mexico"},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
            {"type":"Feature","id":484,"properties":{"iso_a3":""},"geometry":null}
        ]
    }"#;

    #[test]
    fn code_prefers_iso_a3_then_id() {
        let world = parse_feature_collection(WORLD).unwrap();
        assert_eq!(world.features[0].code().as_deref(), Some("CAN"));
        assert_eq!(world.features[1].code().as_deref(), Some("MEX"));
        // Empty iso_a3 falls through to a numeric id
        assert_eq!(world.features[2].code().as_deref(), Some("484"));
    }

    #[test]
    fn display_name_falls_back_to_unknown() {
        let world = parse_feature_collection(WORLD).unwrap();
        assert_eq!(world.features[0].display_name(), "Canada");
        assert_eq!(world.features[2].display_name(), UNKNOWN_COUNTRY);
    }

    #[test]
    fn feature_index_out_of_range() {
        let world = parse_feature_collection(WORLD).unwrap();
        assert!(world.feature(1).is_ok());
        assert!(matches!(
            world.feature(7),
            Err(DashboardError::FeatureIndex(7))
        ));
    }

    #[test]
    fn extra_properties_survive_reserialization() {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"name":"A","pop_est":12},"geometry":null}
        ]}"#;
        let world = parse_feature_collection(json).unwrap();
        let out = serde_json::to_value(&world).unwrap();
        assert_eq!(out["features"][0]["properties"]["pop_est"], 12);
        assert_eq!(out["features"][0]["properties"]["name"], "A");
    }

    #[test]
    fn empty_collection_is_rejected() {
        let err = parse_feature_collection(r#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap_err();
        assert!(matches!(err, DashboardError::EmptyDataset(_)));
    }
}
