//! Inline notice for a selection that matches no records.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoDataNoticeProps {
    pub message: String,
}

#[component]
pub fn NoDataNotice(props: NoDataNoticeProps) -> Element {
    rsx! {
        p {
            class: "no-data",
            style: "margin: 4px 0; font-size: 13px; color: #ffcc80;",
            "{props.message}"
        }
    }
}
