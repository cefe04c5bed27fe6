//! Dropdown selector for the mapped/line-charted indicator.

use crate::state::AppState;
use dioxus::prelude::*;

/// Indicator dropdown. Options come from the loaded data in first-seen order.
#[component]
pub fn IndicatorSelector() -> Element {
    let mut state = use_context::<AppState>();
    let indicators: Vec<String> = state
        .data
        .read()
        .as_ref()
        .map(|ctx| ctx.indicators().to_vec())
        .unwrap_or_default();
    let selected = (state.indicator)();

    let on_change = move |evt: Event<FormData>| {
        state.indicator.set(evt.value());
    };

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "indicator-select",
                style: "font-weight: bold;",
                "Indicator: "
            }
            select {
                id: "indicator-select",
                onchange: on_change,
                for indicator in indicators.iter() {
                    option {
                        value: "{indicator}",
                        selected: *indicator == selected,
                        "{indicator}"
                    }
                }
            }
        }
    }
}
