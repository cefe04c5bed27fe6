//! The loaded datasets.
//!
//! [`DataContext`] owns the indicator records and world features for the
//! lifetime of the page. It is immutable after construction and cheaply
//! cloneable (via `Rc`) so it can be shared across Dioxus components in a
//! single-threaded WASM environment.

use std::collections::BTreeSet;
use std::rc::Rc;

use wwd_model::geo::parse_feature_collection;
use wwd_model::record::parse_records;
use wwd_model::{FeatureCollection, GeoFeature, IndicatorRecord, Result};

struct Inner {
    records: Vec<IndicatorRecord>,
    world: FeatureCollection,
    indicators: Vec<String>,
    countries: Vec<String>,
}

#[derive(Clone)]
pub struct DataContext {
    inner: Rc<Inner>,
}

// Two handles are equal when they share the same loaded data.
impl PartialEq for DataContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl DataContext {
    pub fn new(records: Vec<IndicatorRecord>, world: FeatureCollection) -> Self {
        let mut indicators: Vec<String> = Vec::new();
        for record in &records {
            if !indicators.contains(&record.indicator) {
                indicators.push(record.indicator.clone());
            }
        }

        let countries: Vec<String> = records
            .iter()
            .map(|r| r.country.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        log::info!(
            "Data context ready: {} records, {} indicators, {} countries, {} features",
            records.len(),
            indicators.len(),
            countries.len(),
            world.len()
        );

        Self {
            inner: Rc::new(Inner {
                records,
                world,
                indicators,
                countries,
            }),
        }
    }

    /// Build a context from the raw JSON bodies of both datasets.
    pub fn from_json(geo_json: &str, records_json: &str) -> Result<Self> {
        let world = parse_feature_collection(geo_json)?;
        let records = parse_records(records_json)?;
        Ok(Self::new(records, world))
    }

    pub fn records(&self) -> &[IndicatorRecord] {
        &self.inner.records
    }

    pub fn world(&self) -> &FeatureCollection {
        &self.inner.world
    }

    pub fn features(&self) -> &[GeoFeature] {
        &self.inner.world.features
    }

    /// Distinct indicators in first-seen order.
    pub fn indicators(&self) -> &[String] {
        &self.inner.indicators
    }

    /// Distinct country names, sorted.
    pub fn countries(&self) -> &[String] {
        &self.inner.countries
    }

    /// `(earliest, latest)` year across all records.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records().iter().map(|r| r.year).min()?;
        let max = self.records().iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &IndicatorRecord> {
        self.records().iter().filter(move |r| r.year == year)
    }

    pub fn for_year_and_indicator<'a>(
        &'a self,
        year: i32,
        indicator: &'a str,
    ) -> impl Iterator<Item = &'a IndicatorRecord> {
        self.for_year(year).filter(move |r| r.indicator == indicator)
    }

    /// All records of one country for one indicator, ordered by year.
    pub fn series(&self, country: &str, indicator: &str) -> Vec<&IndicatorRecord> {
        let mut series: Vec<&IndicatorRecord> = self
            .records()
            .iter()
            .filter(|r| r.is_for(country, indicator))
            .collect();
        series.sort_by_key(|r| r.year);
        series
    }

    /// One-line description for the dashboard header.
    pub fn summary(&self) -> String {
        format!(
            "{} records, {} indicators, {} countries",
            self.records().len(),
            self.indicators().len(),
            self.countries().len()
        )
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn context() -> DataContext {
        DataContext::new(
            vec![
                record("Mexico", "MEX", "Access", 2001, 80.0),
                record("Canada", "CAN", "Stress", 2000, 5.0),
                record("Mexico", "MEX", "Access", 2000, 78.0),
                record("Canada", "CAN", "Access", 2000, 99.0),
            ],
            world(vec![feature("Canada", Some("CAN"), None)]),
        )
    }

    #[test]
    fn indicators_keep_first_seen_order() {
        assert_eq!(context().indicators(), ["Access", "Stress"]);
    }

    #[test]
    fn countries_are_sorted_and_distinct() {
        assert_eq!(context().countries(), ["Canada", "Mexico"]);
    }

    #[test]
    fn year_range_spans_all_records() {
        assert_eq!(context().year_range(), Some((2000, 2001)));
        let empty = DataContext::new(Vec::new(), world(Vec::new()));
        assert_eq!(empty.year_range(), None);
    }

    #[test]
    fn series_is_sorted_by_year() {
        let ctx = context();
        let years: Vec<i32> = ctx.series("Mexico", "Access").iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2000, 2001]);
        assert!(ctx.series("Mexico", "Stress").is_empty());
    }

    #[test]
    fn filters_by_year_and_indicator() {
        let ctx = context();
        assert_eq!(ctx.for_year(2000).count(), 3);
        assert_eq!(ctx.for_year_and_indicator(2000, "Access").count(), 2);
    }

    #[test]
    fn clones_share_data() {
        let ctx = context();
        let other = ctx.clone();
        assert!(ctx == other);
        assert!(ctx != context());
    }

    #[test]
    fn from_json_reports_parse_failures() {
        let geo = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"name":"A"},"geometry":null}]}"#;
        assert!(DataContext::from_json(geo, "[]").is_ok());
        assert!(DataContext::from_json(geo, "oops").is_err());
        assert!(DataContext::from_json("oops", "[]").is_err());
    }

    #[test]
    fn summary_counts() {
        assert_eq!(context().summary(), "4 records, 2 indicators, 2 countries");
    }
}
