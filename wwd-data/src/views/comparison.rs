//! Grouped bar comparison of two countries across every indicator of a year.

use wwd_model::IndicatorRecord;

use crate::models::{ComparisonRow, ComparisonView};
use crate::scale::nice_upper_bound;
use crate::selection::Selection;
use crate::store::DataContext;

fn value_of(subset: &[&IndicatorRecord], indicator: &str) -> Option<f64> {
    subset
        .iter()
        .find(|r| r.indicator == indicator)
        .map(|r| r.value)
}

pub fn title(selection: &Selection) -> String {
    format!(
        "Comparison of {} and {} - Year {}",
        selection.country1, selection.country2, selection.year
    )
}

/// Build one row per indicator reported by either country in the selected
/// year. An indicator reported by only one country gets `0.0` for the other.
pub fn build_comparison(ctx: &DataContext, selection: &Selection) -> ComparisonView {
    let year: Vec<&IndicatorRecord> = ctx.for_year(selection.year).collect();
    let first: Vec<&IndicatorRecord> = year
        .iter()
        .copied()
        .filter(|r| r.country == selection.country1)
        .collect();
    let second: Vec<&IndicatorRecord> = year
        .iter()
        .copied()
        .filter(|r| r.country == selection.country2)
        .collect();

    // Union of both countries' indicators, first-seen order
    let mut indicators: Vec<&str> = Vec::new();
    for record in first.iter().chain(second.iter()) {
        if !indicators.contains(&record.indicator.as_str()) {
            indicators.push(&record.indicator);
        }
    }

    let rows: Vec<ComparisonRow> = indicators
        .into_iter()
        .map(|indicator| {
            let unit = first
                .iter()
                .chain(second.iter())
                .find(|r| r.indicator == indicator)
                .map(|r| r.unit.clone())
                .unwrap_or_default();
            ComparisonRow {
                indicator: indicator.to_string(),
                value1: value_of(&first, indicator).unwrap_or(0.0),
                value2: value_of(&second, indicator).unwrap_or(0.0),
                unit,
            }
        })
        .collect();

    let max = rows
        .iter()
        .map(|row| row.value1.max(row.value2))
        .fold(0.0, f64::max);

    log::info!(
        "Comparison {} vs {} in {}: {} indicators",
        selection.country1,
        selection.country2,
        selection.year,
        rows.len()
    );

    ComparisonView {
        title: title(selection),
        year: selection.year,
        countries: [selection.country1.clone(), selection.country2.clone()],
        rows,
        y_max: nice_upper_bound(max),
    }
}

/// Message shown instead of the bar chart when neither country reports
/// anything for the year.
pub fn no_data_message(selection: &Selection) -> String {
    format!("No data for these countries in {}.", selection.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::*;

    fn context() -> DataContext {
        DataContext::new(
            vec![
                record("Canada", "CAN", "Access", 2000, 99.0),
                record("Canada", "CAN", "Stress", 2000, 4.0),
                record("Mexico", "MEX", "Access", 2000, 87.0),
                record("Mexico", "MEX", "Reuse", 2000, 12.0),
                record("Mexico", "MEX", "Access", 2001, 88.0),
            ],
            world(Vec::new()),
        )
    }

    fn selection(c1: &str, c2: &str, year: i32) -> Selection {
        Selection {
            year,
            indicator: String::new(),
            country1: c1.to_string(),
            country2: c2.to_string(),
        }
    }

    #[test]
    fn rows_cover_union_of_indicators() {
        let view = build_comparison(&context(), &selection("Canada", "Mexico", 2000));
        let indicators: Vec<&str> = view.rows.iter().map(|r| r.indicator.as_str()).collect();
        assert_eq!(indicators, vec!["Access", "Stress", "Reuse"]);
        assert_eq!(view.countries, ["Canada".to_string(), "Mexico".to_string()]);
    }

    #[test]
    fn one_sided_indicators_are_zero_filled() {
        let view = build_comparison(&context(), &selection("Canada", "Mexico", 2000));
        let stress = &view.rows[1];
        assert_eq!((stress.value1, stress.value2), (4.0, 0.0));
        let reuse = &view.rows[2];
        assert_eq!((reuse.value1, reuse.value2), (0.0, 12.0));
    }

    #[test]
    fn y_axis_is_rounded_up() {
        let view = build_comparison(&context(), &selection("Canada", "Mexico", 2000));
        assert_eq!(view.y_max, 100.0);
    }

    #[test]
    fn title_names_both_countries_and_year() {
        let view = build_comparison(&context(), &selection("Canada", "Mexico", 2000));
        assert_eq!(view.title, "Comparison of Canada and Mexico - Year 2000");
    }

    #[test]
    fn no_records_means_no_rows() {
        let view = build_comparison(&context(), &selection("Canada", "Mexico", 1990));
        assert!(!view.has_data());
        assert_eq!(view.y_max, 0.0);

        let view = build_comparison(&context(), &selection("", "", 2000));
        assert!(!view.has_data());
    }

    #[test]
    fn same_country_twice_mirrors_values() {
        let view = build_comparison(&context(), &selection("Mexico", "Mexico", 2000));
        assert_eq!(view.rows.len(), 2);
        assert!(view.rows.iter().all(|r| r.value1 == r.value2));
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let ctx = context();
        let sel = selection("Canada", "Mexico", 2000);
        assert_eq!(build_comparison(&ctx, &sel), build_comparison(&ctx, &sel));
    }
}
