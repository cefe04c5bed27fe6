//! The update dispatcher: one selection in, three renderer calls out.

use wwd_chart_ui::js_bridge;
use wwd_data::views::DashboardViews;
use wwd_data::DashboardConfig;

use crate::{BAR_CHART_ID, LINE_CHART_ID, MAP_ID};

/// Draw the base world map once. Every later pass only recolors it.
pub fn render_base_map(world_json: &str, config: &DashboardConfig) {
    js_bridge::render_choropleth_base(MAP_ID, world_json, &config.map_json());
}

/// Push freshly built views to the map, the bar chart and the line chart.
pub fn render_all(views: &DashboardViews, config: &DashboardConfig) {
    let map_json = serde_json::to_string(&views.map).unwrap_or_default();
    js_bridge::update_choropleth(MAP_ID, &map_json, &config.map_json());

    match &views.comparison_notice {
        Some(message) => js_bridge::render_no_data(BAR_CHART_ID, message),
        None => {
            let bar_json = serde_json::to_string(&views.comparison).unwrap_or_default();
            js_bridge::render_grouped_bar_chart(BAR_CHART_ID, &bar_json, &config.bar_json());
        }
    }

    let line_json = serde_json::to_string(&views.line).unwrap_or_default();
    js_bridge::render_live_line_chart(LINE_CHART_ID, &line_json, &config.line_json());
}
