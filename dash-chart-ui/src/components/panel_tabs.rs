//! Tab bar for choosing the visible panel.

use crate::state::AppState;
use dash_chart::Panel;
use dioxus::prelude::*;

/// One button per panel. Clicking calls `AppState::select`.
#[component]
pub fn PanelTabs() -> Element {
    let mut state = use_context::<AppState>();
    let active = state.active();
    let tabs = Panel::ALL.map(|panel| (panel, panel.label(), panel == active));

    rsx! {
        div {
            role: "tablist",
            style: "display: flex; gap: 4px; border-bottom: 2px solid #e0e0e0; margin: 8px 0;",
            for (panel, label, selected) in tabs {
                button {
                    key: "{panel}",
                    id: "tab-{panel}",
                    role: "tab",
                    "aria-selected": "{selected}",
                    style: tab_style(selected),
                    onclick: move |_| state.select(panel),
                    "{label}"
                }
            }
        }
    }
}

fn tab_style(selected: bool) -> &'static str {
    if selected {
        "padding: 8px 16px; border: none; border-bottom: 3px solid #4285F4; background: #fff; font-weight: bold; cursor: pointer;"
    } else {
        "padding: 8px 16px; border: none; border-bottom: 3px solid transparent; background: #fff; color: #666; cursor: pointer;"
    }
}
