//! The two country selectors.

use crate::state::AppState;
use dioxus::prelude::*;
use wwd_data::selection::Slot;

#[derive(Props, Clone, PartialEq)]
pub struct CountrySelectorProps {
    pub slot: Slot,
}

/// Country dropdown. Countries are listed alphabetically after an empty option.
///
/// A map click can select a country name that the indicator data spells
/// differently; that name is listed too so the selector reflects the state.
#[component]
pub fn CountrySelector(props: CountrySelectorProps) -> Element {
    let state = use_context::<AppState>();
    let mut signal = match props.slot {
        Slot::First => state.country1,
        Slot::Second => state.country2,
    };
    let selected = signal();

    let mut countries: Vec<String> = state
        .data
        .read()
        .as_ref()
        .map(|ctx| ctx.countries().to_vec())
        .unwrap_or_default();
    if !selected.is_empty() && !countries.contains(&selected) {
        countries.insert(0, selected.clone());
    }

    let on_change = move |evt: Event<FormData>| {
        signal.set(evt.value());
    };

    let id = props.slot.dom_id();
    let caption = props.slot.label();

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "{id}",
                style: "font-weight: bold;",
                "{caption}"
            }
            select {
                id: "{id}",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "-- none --"
                }
                for country in countries.iter() {
                    option {
                        value: "{country}",
                        selected: *country == selected,
                        "{country}"
                    }
                }
            }
        }
    }
}
