//! Dashboard title and dataset summary.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Dataset summary line, hidden when empty
    #[props(default = String::new())]
    pub summary: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        header {
            style: "margin-bottom: 12px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px; color: #7fff00;",
                "{props.title}"
            }
            if !props.summary.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #9e9e9e;",
                    "{props.summary}"
                }
            }
        }
    }
}
