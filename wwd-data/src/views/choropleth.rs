//! Choropleth map coloring for the selected year and indicator.

use wwd_model::IndicatorRecord;

use crate::config::{DashboardConfig, MapConfig};
use crate::models::{ChoroplethView, FeatureFill, Legend};
use crate::scale::{Rgb, SequentialColorScale};
use crate::selection::Selection;
use crate::store::DataContext;

const FALLBACK_LOW: Rgb = Rgb::new(0x22, 0x22, 0x22);
const FALLBACK_HIGH: Rgb = Rgb::new(0x7f, 0xff, 0x00);

fn color_scale(max: f64, map: &MapConfig) -> SequentialColorScale {
    let low = Rgb::from_hex(&map.color_low).unwrap_or_else(|| {
        log::warn!("Invalid map low color {:?}, using default", map.color_low);
        FALLBACK_LOW
    });
    let high = Rgb::from_hex(&map.color_high).unwrap_or_else(|| {
        log::warn!("Invalid map high color {:?}, using default", map.color_high);
        FALLBACK_HIGH
    });
    SequentialColorScale::new(max, low, high)
}

/// Color every world feature by its value for `selection.year` and
/// `selection.indicator`.
///
/// Countries without a matching record get `no_data_color`. With no matching
/// records at all the scale domain collapses to `[0, 0]` and the legend tops
/// out at `0.00`.
pub fn build_choropleth(
    ctx: &DataContext,
    selection: &Selection,
    config: &DashboardConfig,
) -> ChoroplethView {
    let filtered: Vec<&IndicatorRecord> = ctx
        .for_year_and_indicator(selection.year, &selection.indicator)
        .collect();

    let max_value = filtered
        .iter()
        .map(|r| r.value)
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0);

    let scale = color_scale(max_value, &config.map);

    let fills: Vec<FeatureFill> = ctx
        .features()
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            let code = feature.code();
            let matched = code
                .as_deref()
                .and_then(|code| filtered.iter().find(|r| r.country_code == code));
            match matched {
                Some(record) => FeatureFill {
                    index,
                    code,
                    fill: scale.color(record.value).to_string(),
                    value: Some(record.value),
                },
                None => FeatureFill {
                    index,
                    code,
                    fill: config.map.no_data_color.clone(),
                    value: None,
                },
            }
        })
        .collect();

    let unit = filtered
        .iter()
        .map(|r| r.unit.as_str())
        .find(|u| !u.is_empty())
        .unwrap_or(config.map.legend_unit.as_str())
        .to_string();

    log::info!(
        "Choropleth {} / {}: {} records, max {:.2}",
        selection.year,
        selection.indicator,
        filtered.len(),
        max_value
    );

    ChoroplethView {
        year: selection.year,
        indicator: selection.indicator.clone(),
        max_value,
        fills,
        legend: Legend {
            min_label: format!("{:.2}", 0.0),
            max_label: format!("{:.2}", max_value),
            unit,
            color_low: config.map.color_low.clone(),
            color_high: config.map.color_high.clone(),
        },
        has_data: !filtered.is_empty(),
    }
}

/// Notice shown above the map when nothing matches the selection.
pub fn no_data_message(selection: &Selection) -> String {
    format!("No data for {} in {}.", selection.indicator, selection.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::*;

    fn context() -> DataContext {
        DataContext::new(
            vec![
                record("A", "AAA", "X", 2000, 10.0),
                record("B", "BBB", "X", 2000, 30.0),
            ],
            world(vec![
                feature("A", Some("AAA"), None),
                feature("B", None, Some("BBB")),
                feature("C", Some("CCC"), None),
            ]),
        )
    }

    fn selection(year: i32, indicator: &str) -> Selection {
        Selection {
            year,
            indicator: indicator.to_string(),
            ..Selection::default()
        }
    }

    #[test]
    fn colors_scale_against_max() {
        let config = DashboardConfig::default();
        let view = build_choropleth(&context(), &selection(2000, "X"), &config);

        assert_eq!(view.max_value, 30.0);
        assert!(view.has_data);
        // A sits at 1/3 of the gradient, B at the top
        assert_eq!(view.fills[0].fill, "rgb(65, 108, 23)");
        assert_eq!(view.fills[0].value, Some(10.0));
        // B matches through its feature id
        assert_eq!(view.fills[1].fill, "rgb(127, 255, 0)");
        assert_eq!(view.fills[2].fill, config.map.no_data_color);
        assert_eq!(view.fills[2].value, None);
        assert_eq!(view.legend.max_label, "30.00");
        assert_eq!(view.legend.unit, "%");
    }

    #[test]
    fn empty_selection_uses_no_data_color_everywhere() {
        let config = DashboardConfig::default();
        for sel in [selection(1999, "X"), selection(2000, "Nope")] {
            let view = build_choropleth(&context(), &sel, &config);
            assert!(!view.has_data);
            assert_eq!(view.max_value, 0.0);
            assert_eq!(view.legend.max_label, "0.00");
            assert_eq!(view.legend.min_label, "0.00");
            assert!(view
                .fills
                .iter()
                .all(|f| f.fill == config.map.no_data_color && f.value.is_none()));
        }
    }

    #[test]
    fn one_fill_per_feature_in_order() {
        let view = build_choropleth(&context(), &selection(2000, "X"), &DashboardConfig::default());
        let indexes: Vec<usize> = view.fills.iter().map(|f| f.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn legend_unit_falls_back_to_config() {
        let mut records = vec![record("A", "AAA", "X", 2000, 10.0)];
        records[0].unit.clear();
        let ctx = DataContext::new(records, world(vec![feature("A", Some("AAA"), None)]));
        let mut config = DashboardConfig::default();
        config.map.legend_unit = "m3".to_string();
        let view = build_choropleth(&ctx, &selection(2000, "X"), &config);
        assert_eq!(view.legend.unit, "m3");
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let ctx = context();
        let config = DashboardConfig::default();
        let sel = selection(2000, "X");
        assert_eq!(
            build_choropleth(&ctx, &sel, &config),
            build_choropleth(&ctx, &sel, &config)
        );
    }

    #[test]
    fn malformed_config_color_falls_back() {
        let config = DashboardConfig::from_json(r##"{"map":{"colorLow":"#é1"}}"##).unwrap();
        let view = build_choropleth(&context(), &selection(2000, "X"), &config);
        // Fallback low color is #222222, so A still sits at 1/3 of the gradient
        assert_eq!(view.fills[0].fill, "rgb(65, 108, 23)");
    }

    #[test]
    fn no_data_message_names_selection() {
        assert_eq!(no_data_message(&selection(2003, "X")), "No data for X in 2003.");
    }
}
