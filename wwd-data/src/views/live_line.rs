//! Time series of one indicator for the two selected countries.

use wwd_model::IndicatorRecord;

use crate::config::LineChartConfig;
use crate::models::{LineChart, LinePoint, LineSeries, LiveLineView};
use crate::scale::nice_upper_bound;
use crate::selection::Selection;
use crate::store::DataContext;

pub const NO_DATA_MESSAGE: &str = "No data for these countries/indicator.";

/// Single-country phrasing when both selectors hold the same country.
pub fn title(selection: &Selection) -> String {
    if selection.same_country() {
        format!("{} : {}", selection.country1, selection.indicator)
    } else {
        format!(
            "{} and {} : {}",
            selection.country1, selection.country2, selection.indicator
        )
    }
}

fn to_series(name: &str, color: &str, records: &[&IndicatorRecord]) -> LineSeries {
    LineSeries {
        name: name.to_string(),
        color: color.to_string(),
        points: records
            .iter()
            .map(|r| LinePoint {
                year: r.year,
                value: r.value,
                unit: r.unit.clone(),
            })
            .collect(),
    }
}

pub fn build_live_line(
    ctx: &DataContext,
    selection: &Selection,
    config: &LineChartConfig,
) -> LiveLineView {
    let first = ctx.series(&selection.country1, &selection.indicator);
    let second = ctx.series(&selection.country2, &selection.indicator);

    if first.is_empty() && second.is_empty() {
        log::info!(
            "Live line: no data for {} / {} / {}",
            selection.country1,
            selection.country2,
            selection.indicator
        );
        return LiveLineView::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        };
    }

    let both = || first.iter().chain(second.iter());
    let min_year = both().map(|r| r.year).min().unwrap_or_default();
    let max_year = both().map(|r| r.year).max().unwrap_or_default();
    let max_value = both().map(|r| r.value).fold(0.0, f64::max);

    let [color1, color2] = &config.colors;

    LiveLineView::Chart(LineChart {
        title: title(selection),
        x_domain: (min_year, max_year),
        y_domain: (0.0, nice_upper_bound(max_value)),
        series: vec![
            to_series(&selection.country1, color1, &first),
            to_series(&selection.country2, color2, &second),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::*;

    fn context() -> DataContext {
        DataContext::new(
            vec![
                record("Canada", "CAN", "Access", 2002, 99.0),
                record("Canada", "CAN", "Access", 2000, 97.0),
                record("Mexico", "MEX", "Access", 2001, 87.0),
                record("Mexico", "MEX", "Access", 2005, 91.0),
                record("Mexico", "MEX", "Stress", 2005, 30.0),
            ],
            world(Vec::new()),
        )
    }

    fn selection(c1: &str, c2: &str, indicator: &str) -> Selection {
        Selection {
            year: 2000,
            indicator: indicator.to_string(),
            country1: c1.to_string(),
            country2: c2.to_string(),
        }
    }

    fn chart(view: LiveLineView) -> LineChart {
        match view {
            LiveLineView::Chart(chart) => chart,
            LiveLineView::NoData { message } => panic!("expected a chart, got {message:?}"),
        }
    }

    #[test]
    fn no_records_for_either_country() {
        let view = build_live_line(
            &context(),
            &selection("Canada", "Mexico", "Reuse"),
            &LineChartConfig::default(),
        );
        assert_eq!(
            view,
            LiveLineView::NoData {
                message: NO_DATA_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn domains_span_both_series() {
        let chart = chart(build_live_line(
            &context(),
            &selection("Canada", "Mexico", "Access"),
            &LineChartConfig::default(),
        ));
        assert_eq!(chart.x_domain, (2000, 2005));
        assert_eq!(chart.y_domain, (0.0, 100.0));
        assert_eq!(chart.title, "Canada and Mexico : Access");
    }

    #[test]
    fn series_are_sorted_and_colored() {
        let config = LineChartConfig::default();
        let chart = chart(build_live_line(
            &context(),
            &selection("Canada", "Mexico", "Access"),
            &config,
        ));
        let years: Vec<i32> = chart.series[0].points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2000, 2002]);
        assert_eq!(chart.series[0].color, config.colors[0]);
        assert_eq!(chart.series[1].color, config.colors[1]);
    }

    #[test]
    fn one_empty_series_still_charts() {
        let chart = chart(build_live_line(
            &context(),
            &selection("Canada", "Mexico", "Stress"),
            &LineChartConfig::default(),
        ));
        assert!(chart.series[0].points.is_empty());
        assert_eq!(chart.series[1].points.len(), 1);
        assert_eq!(chart.x_domain, (2005, 2005));
    }

    #[test]
    fn same_country_uses_single_title_and_shared_data() {
        let chart = chart(build_live_line(
            &context(),
            &selection("Mexico", "Mexico", "Access"),
            &LineChartConfig::default(),
        ));
        assert_eq!(chart.title, "Mexico : Access");
        assert_eq!(chart.series[0].points, chart.series[1].points);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let ctx = context();
        let sel = selection("Canada", "Mexico", "Access");
        let config = LineChartConfig::default();
        assert_eq!(
            build_live_line(&ctx, &sel, &config),
            build_live_line(&ctx, &sel, &config)
        );
    }

    #[test]
    fn no_data_serializes_with_kind_tag() {
        let view = LiveLineView::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "noData");
        assert_eq!(json["message"], NO_DATA_MESSAGE);
    }
}
