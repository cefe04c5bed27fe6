//! Startup failure banner.

use dioxus::prelude::*;

use crate::state::AppState;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown instead of every chart when either dataset fails to load. Lists the
/// two sources so a broken URL is easy to spot.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let state = use_context::<AppState>();
    let config = state.config.read();
    let geo_url = config.geo_url.clone();
    let data_url = config.data_url.clone();

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #3b1d1d; color: #ff8a80; border-radius: 4px; border: 1px solid #c62828;",
            strong { "The dashboard could not start" }
            p { style: "margin: 6px 0;", "{props.message}" }
            ul {
                style: "margin: 0; padding-left: 18px; font-size: 12px; color: #e0a0a0;",
                li { "World boundaries: {geo_url}" }
                li { "Indicators: {data_url}" }
            }
        }
    }
}
