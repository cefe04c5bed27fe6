//! Mount point for a D3.js map or chart.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Section heading shown above the chart
    #[props(default = String::new())]
    pub label: String,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A titled section wrapping the div D3.js draws into.
///
/// Dioxus owns only the outer div; everything inside `id` is cleared and
/// redrawn by the chart scripts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; overflow-x: auto;",
        props.min_height
    );

    rsx! {
        section {
            style: "margin: 16px 0;",
            if !props.label.is_empty() {
                h2 {
                    style: "font-size: 15px; margin: 0 0 6px 0; color: #cfcfcf;",
                    "{props.label}"
                }
            }
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
