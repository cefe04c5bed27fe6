use dioxus::prelude::*;

use crate::state::AppState;

/// Placeholder while both datasets are in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<AppState>();
    let data_url = state.config.read().data_url.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 40px; color: #9e9e9e;",
            span { "Fetching world boundaries and indicators..." }
            span { style: "font-size: 11px; margin-top: 4px;", "{data_url}" }
        }
    }
}
