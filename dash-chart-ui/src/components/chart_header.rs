//! Section heading above the active panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Panel title
    pub title: String,
    /// Optional note under the title
    #[props(default = String::new())]
    pub note: String,
}

/// Panel heading with an optional muted note.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px; color: #333;",
                "{props.title}"
            }
            if !props.note.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.note}"
                }
            }
        }
    }
}
