//! Startup loading of both datasets.

use anyhow::Context;
use wwd_chart_ui::js_bridge;
use wwd_data::{DashboardConfig, DataContext};

/// Fetch the world boundaries and the indicator records concurrently.
///
/// All-or-nothing: if either request or either parse fails, no data context
/// is produced.
pub async fn load_datasets(config: &DashboardConfig) -> anyhow::Result<DataContext> {
    log::info!(
        "Loading datasets: {} and {}",
        config.geo_url,
        config.data_url
    );

    let (geo_json, records_json) = futures::try_join!(
        js_bridge::fetch_text(&config.geo_url),
        js_bridge::fetch_text(&config.data_url),
    )
    .context("Failed to download dashboard datasets")?;

    let ctx = DataContext::from_json(&geo_json, &records_json)
        .context("Downloaded datasets could not be read")?;
    Ok(ctx)
}
