//! All selection controls in one bar.

use super::{CountrySelector, IndicatorSelector, Slot, YearSlider};
use dioxus::prelude::*;

#[component]
pub fn ControlPanel() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center; padding: 8px 0; border-bottom: 1px solid #333;",
            YearSlider {}
            IndicatorSelector {}
            CountrySelector { slot: Slot::First }
            CountrySelector { slot: Slot::Second }
        }
    }
}
