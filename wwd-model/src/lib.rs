//! Core types for the world water dashboard.
//!
//! - `record`: indicator records as published in `water_data.json`
//! - `geo`: world boundary features (GeoJSON feature collection)
//! - `error`: the shared error type

pub mod error;
pub mod geo;
pub mod record;

pub use error::{DashboardError, Result};
pub use geo::{FeatureCollection, GeoFeature};
pub use record::IndicatorRecord;
