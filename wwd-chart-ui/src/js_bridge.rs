//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js map and chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals,
//! plus the two pieces of browser plumbing the dashboard needs from Rust:
//! fetching the datasets and receiving map clicks.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wwd_model::DashboardError;

// Embed all D3 chart JS files at compile time
static CHOROPLETH_MAP_JS: &str = include_str!("../assets/js/choropleth-map.js");
static GROUPED_BAR_CHART_JS: &str = include_str!("../assets/js/grouped-bar-chart.js");
static LIVE_LINE_CHART_JS: &str = include_str!("../assets/js/live-line-chart.js");
static NO_DATA_JS: &str = include_str!("../assets/js/no-data.js");

/// Global the map scripts call with the index of a clicked feature.
const MAP_CLICK_GLOBAL: &str = "__wwdMapClick";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WWD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal (JSON strings are valid JS literals).
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderGroupedBarChart(...)` via
/// `function` declarations. To make them globally accessible they are
/// evaluated at global scope via indirect `eval()` once D3 is ready, and each
/// function is then promoted to `window.*`. Safe to call more than once.
pub fn init_charts() {
    let all_js = [
        CHOROPLETH_MAP_JS,
        GROUPED_BAR_CHART_JS,
        LIVE_LINE_CHART_JS,
        NO_DATA_JS,
    ]
    .join("\n");

    let store_js = format!("window.__wwdChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__wwdChartsInitStarted) { return; }
            window.__wwdChartsInitStarted = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__wwdChartScripts);
                    delete window.__wwdChartScripts;
                    if (typeof renderChoroplethBase !== 'undefined') window.renderChoroplethBase = renderChoroplethBase;
                    if (typeof updateChoropleth !== 'undefined') window.updateChoropleth = updateChoropleth;
                    if (typeof showMapMarker !== 'undefined') window.showMapMarker = showMapMarker;
                    if (typeof renderGroupedBarChart !== 'undefined') window.renderGroupedBarChart = renderGroupedBarChart;
                    if (typeof renderLiveLineChart !== 'undefined') window.renderLiveLineChart = renderLiveLineChart;
                    if (typeof renderNoData !== 'undefined') window.renderNoData = renderNoData;
                    window.__wwdChartsReady = true;
                    console.log('WWD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container_id, ...args)` once D3, the chart scripts
/// and the container DOM element are all available.
///
/// Every argument is passed as a JS string; the chart functions `JSON.parse`
/// the ones that carry data.
fn render_when_ready(function: &str, container_id: &str, args: &[&str]) {
    let mut call_args = vec![js_string(container_id)];
    call_args.extend(args.iter().map(|a| js_string(a)));
    let call_args = call_args.join(", ");

    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wwdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({call_args});
                    }} catch(e) {{ console.error('[WWD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        container = js_string(container_id),
    ));
}

/// Draw the base world map: one path per feature, default fill, click-bound.
pub fn render_choropleth_base(container_id: &str, geo_json: &str, config_json: &str) {
    render_when_ready("renderChoroplethBase", container_id, &[geo_json, config_json]);
}

/// Recolor the map paths and rebuild the gradient legend.
pub fn update_choropleth(container_id: &str, view_json: &str, config_json: &str) {
    render_when_ready("updateChoropleth", container_id, &[view_json, config_json]);
}

/// Replace the click marker with one at the centroid of `feature_index`.
pub fn show_map_marker(container_id: &str, feature_index: usize, label: &str, config_json: &str) {
    let index = feature_index.to_string();
    render_when_ready(
        "showMapMarker",
        container_id,
        &[&index, label, config_json],
    );
}

/// Render the grouped bar chart comparing two countries.
pub fn render_grouped_bar_chart(container_id: &str, view_json: &str, config_json: &str) {
    render_when_ready("renderGroupedBarChart", container_id, &[view_json, config_json]);
}

/// Render the animated two-country line chart.
pub fn render_live_line_chart(container_id: &str, view_json: &str, config_json: &str) {
    render_when_ready("renderLiveLineChart", container_id, &[view_json, config_json]);
}

/// Replace the container content with a single no-data paragraph.
pub fn render_no_data(container_id: &str, message: &str) {
    render_when_ready("renderNoData", container_id, &[message]);
}

fn fetch_error(url: &str, err: JsValue) -> DashboardError {
    DashboardError::Fetch {
        url: url.to_string(),
        reason: err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    }
}

/// HTTP GET `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> Result<String, DashboardError> {
    let window = web_sys::window().ok_or_else(|| DashboardError::Fetch {
        url: url.to_string(),
        reason: "no window object".to_string(),
    })?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_error(url, e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| fetch_error(url, e))?;

    if !response.ok() {
        return Err(DashboardError::Fetch {
            url: url.to_string(),
            reason: format!("HTTP {} {}", response.status(), response.status_text()),
        });
    }

    let body = JsFuture::from(response.text().map_err(|e| fetch_error(url, e))?)
        .await
        .map_err(|e| fetch_error(url, e))?;

    let text = body.as_string().ok_or_else(|| DashboardError::Fetch {
        url: url.to_string(),
        reason: "response body is not text".to_string(),
    })?;
    log::info!("Fetched {} ({} bytes)", url, text.len());
    Ok(text)
}

/// Expose `callback` to the map scripts as `window.__wwdMapClick(index)`.
///
/// The closure lives for the rest of the page; registering again replaces
/// the previous handler.
pub fn register_map_click_handler<F>(callback: F)
where
    F: FnMut(usize) + 'static,
{
    let Some(window) = web_sys::window() else {
        log::error!("No window object, map clicks are disabled");
        return;
    };

    let mut callback = callback;
    let closure = Closure::wrap(Box::new(move |index: JsValue| {
        match index.as_f64() {
            Some(i) if i >= 0.0 && i.fract() == 0.0 => callback(i as usize),
            _ => log::warn!("Ignoring map click with invalid feature index {:?}", index),
        }
    }) as Box<dyn FnMut(JsValue)>);

    if let Err(e) = js_sys::Reflect::set(
        &window,
        &JsValue::from_str(MAP_CLICK_GLOBAL),
        closure.as_ref(),
    ) {
        log::error!("Failed to register map click handler: {:?}", e);
        return;
    }
    closure.forget();
}
