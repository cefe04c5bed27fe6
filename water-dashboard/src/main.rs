//! World Water Dashboard
//!
//! Shows national water indicators on a world choropleth map, with a grouped
//! bar chart comparing two countries across all indicators of a year and a
//! line chart following one indicator over time.
//!
//! Data flow:
//! 1. On mount: fetch the world boundaries and `water_data.json` concurrently.
//!    Either failure aborts startup with an error banner and no charts.
//! 2. Build the `DataContext`, seed the selection (latest year, first
//!    indicator, no countries) and draw the base map once.
//! 3. Any change to the year, indicator or country signals rebuilds all three
//!    views and pushes them to D3.js.
//! 4. Map clicks come back from JS as feature indexes and are written into the
//!    country selectors, which in turn triggers step 3.

mod dispatch;
mod loader;

use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use wwd_chart_ui::components::{
    ChartContainer, ChartHeader, ControlPanel, ErrorDisplay, LoadingSpinner, NoDataNotice,
};
use wwd_chart_ui::js_bridge;
use wwd_chart_ui::state::AppState;
use wwd_data::views::DashboardViews;

/// DOM ids for the D3 mount points.
pub const MAP_ID: &str = "map";
pub const BAR_CHART_ID: &str = "compare-bar-chart";
pub const LINE_CHART_ID: &str = "chart-container";

const TITLE: &str = "World Water Indicators";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting world water dashboard");
    dioxus::launch(App);
}

/// Write a clicked country into the first free selector and move the marker.
fn handle_map_click(mut state: AppState, index: usize) {
    let Some(ctx) = state.data.peek().clone() else {
        log::warn!("Map click before data was loaded");
        return;
    };
    let feature = match ctx.world().feature(index) {
        Ok(feature) => feature,
        Err(e) => {
            log::warn!("{}", e);
            return;
        }
    };
    let name = feature.display_name().to_string();

    let mut selection = state.peek_selection();
    let slot = selection.assign_clicked(&name);
    log::info!("Map click on {} -> {:?} selector", name, slot);

    let config = state.config.peek().clone();
    js_bridge::show_map_marker(MAP_ID, index, &name, &config.map_json());

    state.apply_selection(selection);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Map clicks: JS -> channel -> Dioxus task ───
    // Signals are only written from inside the Dioxus runtime.
    use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<usize>();
        js_bridge::register_map_click_handler(move |index| {
            if tx.unbounded_send(index).is_err() {
                log::warn!("Map click channel closed");
            }
        });
        spawn(async move {
            while let Some(index) = rx.next().await {
                handle_map_click(state, index);
            }
        });
    });

    // ─── Effect 1: Load both datasets once on mount ───
    use_effect(move || {
        spawn(async move {
            let config = state.config.peek().clone();
            match loader::load_datasets(&config).await {
                Ok(ctx) => {
                    js_bridge::init_charts();
                    match serde_json::to_string(ctx.world()) {
                        Ok(world_json) => dispatch::render_base_map(&world_json, &config),
                        Err(e) => log::error!("Failed to serialize world boundaries: {}", e),
                    }
                    state.install(ctx);
                }
                Err(e) => {
                    log::error!("Failed to load datasets: {:#}", e);
                    state.fail(format!("{:#}", e));
                }
            }
        });
    });

    // ─── Views: rebuilt whenever any control changes ───
    let views = use_memo(move || {
        let selection = state.selection();
        let config = state.config.read().clone();
        let ctx = state.data.read().clone()?;
        Some(DashboardViews::build(&ctx, &selection, &config))
    });

    // ─── Effect 2: Dispatch the views to the three renderers ───
    use_effect(move || {
        if let Some(views) = views() {
            let config = state.config.peek().clone();
            dispatch::render_all(&views, &config);
        }
    });

    let summary = state
        .data
        .read()
        .as_ref()
        .map(|ctx| ctx.summary())
        .unwrap_or_default();
    let map_notice = views().and_then(|v| v.map_notice);

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1240px; margin: 0 auto; padding: 12px; background: #111; color: #eee; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: TITLE.to_string(),
                summary: summary,
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ControlPanel {}

                if let Some(message) = map_notice {
                    NoDataNotice { message: message }
                }

                ChartContainer {
                    id: MAP_ID.to_string(),
                    min_height: 600,
                }

                ChartContainer {
                    id: BAR_CHART_ID.to_string(),
                    label: "Indicator comparison".to_string(),
                    min_height: 800,
                }

                ChartContainer {
                    id: LINE_CHART_ID.to_string(),
                    label: "Indicator over time".to_string(),
                    min_height: 500,
                }
            }
        }
    }
}
