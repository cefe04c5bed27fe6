//! Pure view builders, one per dashboard panel.

pub mod choropleth;
pub mod comparison;
pub mod live_line;

pub use choropleth::build_choropleth;
pub use comparison::build_comparison;
pub use live_line::build_live_line;

use crate::config::DashboardConfig;
use crate::models::{ChoroplethView, ComparisonView, LiveLineView};
use crate::selection::Selection;
use crate::store::DataContext;

/// The three coordinated views for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    pub map: ChoroplethView,
    pub comparison: ComparisonView,
    pub line: LiveLineView,
    /// Notice for the map, `None` when the selection has data.
    pub map_notice: Option<String>,
    /// Message replacing the bar chart, `None` when there is something to draw.
    pub comparison_notice: Option<String>,
}

impl DashboardViews {
    /// Build every view from scratch. No view reads another's output.
    pub fn build(ctx: &DataContext, selection: &Selection, config: &DashboardConfig) -> Self {
        let map = build_choropleth(ctx, selection, config);
        let comparison = build_comparison(ctx, selection);
        let line = build_live_line(ctx, selection, &config.line);

        let map_notice = (!map.has_data).then(|| choropleth::no_data_message(selection));
        let comparison_notice =
            (!comparison.has_data()).then(|| comparison::no_data_message(selection));

        Self {
            map,
            comparison,
            line,
            map_notice,
            comparison_notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LiveLineView;
    use crate::store::fixtures::*;

    fn context() -> DataContext {
        DataContext::new(
            vec![
                record("Canada", "CAN", "Access", 2000, 99.0),
                record("Mexico", "MEX", "Access", 2000, 87.0),
            ],
            world(vec![
                feature("Canada", Some("CAN"), None),
                feature("Mexico", Some("MEX"), None),
            ]),
        )
    }

    #[test]
    fn full_pass_with_data_has_no_notices() {
        let selection = Selection {
            year: 2000,
            indicator: "Access".to_string(),
            country1: "Canada".to_string(),
            country2: "Mexico".to_string(),
        };
        let views = DashboardViews::build(&context(), &selection, &DashboardConfig::default());
        assert!(views.map_notice.is_none());
        assert!(views.comparison_notice.is_none());
        assert!(matches!(views.line, LiveLineView::Chart(_)));
    }

    #[test]
    fn empty_selection_signals_no_data_everywhere() {
        let selection = Selection {
            year: 1990,
            indicator: "Reuse".to_string(),
            ..Selection::default()
        };
        let views = DashboardViews::build(&context(), &selection, &DashboardConfig::default());
        assert_eq!(views.map_notice.as_deref(), Some("No data for Reuse in 1990."));
        assert_eq!(
            views.comparison_notice.as_deref(),
            Some("No data for these countries in 1990.")
        );
        assert!(matches!(views.line, LiveLineView::NoData { .. }));
    }

    #[test]
    fn identical_inputs_give_identical_views() {
        let ctx = context();
        let config = DashboardConfig::default();
        let selection = Selection {
            year: 2000,
            indicator: "Access".to_string(),
            country1: "Canada".to_string(),
            country2: String::new(),
        };
        assert_eq!(
            DashboardViews::build(&ctx, &selection, &config),
            DashboardViews::build(&ctx, &selection, &config)
        );
    }
}
