//! Year slider with the selected-year readout.

use crate::state::AppState;
use dioxus::prelude::*;

fn set_year(mut state: AppState, raw: String) {
    match raw.parse::<i32>() {
        Ok(value) => {
            if *state.year.peek() != value {
                state.year.set(value);
            }
        }
        Err(_) => log::warn!("Ignoring non-numeric year {:?}", raw),
    }
}

#[component]
pub fn YearSlider() -> Element {
    let state = use_context::<AppState>();
    let (min, max) = (state.year_bounds)();
    let year = (state.year)();

    // React to both dragging (input) and release (change)
    let on_input = move |evt: Event<FormData>| set_year(state, evt.value());
    let on_change = move |evt: Event<FormData>| set_year(state, evt.value());

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "year-slider",
                style: "font-weight: bold;",
                "Year: "
            }
            input {
                id: "year-slider",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{year}",
                oninput: on_input,
                onchange: on_change,
            }
            span {
                id: "selected-year",
                style: "min-width: 3em; color: #7fff00;",
                "{year}"
            }
        }
    }
}
