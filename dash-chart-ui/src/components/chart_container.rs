//! Display region a chart backend draws into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the region (Plotly renders into this)
    pub id: String,
    /// Hidden regions stay in the DOM so their chart can still be purged
    #[props(default = true)]
    pub visible: bool,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A container div for Plotly charts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let display = if props.visible { "block" } else { "none" };
    let style = format!(
        "display: {}; min-height: {}px; width: 100%;",
        display, props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
