//! Plotly Sales Dashboard
//!
//! Shows the monthly sample dataset as a table and as bar, line and pie
//! charts, one panel at a time behind a tab bar.
//!
//! Data flow:
//! 1. `AppState` holds the active panel; `PanelTabs` switches it.
//! 2. An effect subscribed to the active panel calls `PanelRenderer::render`,
//!    which purges the previous Plotly chart before drawing the next one into
//!    the shared chart region.
//! 3. The table panel is plain RSX; while it shows, the chart region is empty
//!    and hidden.
//! 4. On unmount the renderer is torn down and the last chart purged.

use std::cell::RefCell;
use std::rc::Rc;

use dash_chart::{theme, Panel, PanelRenderer};
use dash_chart_ui::components::{ChartContainer, ChartHeader, DataTable, ErrorDisplay, PanelTabs};
use dash_chart_ui::js_bridge::PlotlyBackend;
use dash_chart_ui::state::AppState;
use dash_data::{Dataset, SAMPLE};
use dioxus::prelude::*;

/// The dataset every panel reads. Fixed for the life of the page.
const DATASET: Dataset = SAMPLE;

type SharedRenderer = Rc<RefCell<PanelRenderer<PlotlyBackend>>>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let renderer: SharedRenderer = use_hook(|| {
        Rc::new(RefCell::new(PanelRenderer::new(
            PlotlyBackend::new(),
            theme::CHART_REGION,
        )))
    });

    // ─── Reconcile the chart region with the active panel ───
    // Runs after the DOM is updated, so the region div exists by now.
    use_effect({
        let renderer = renderer.clone();
        move || {
            let panel = state.active();
            match reconcile(&renderer, panel) {
                Ok(()) => {
                    if state.error_msg.peek().is_some() {
                        state.error_msg.set(None);
                    }
                }
                Err(e) => {
                    log::error!("{:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                }
            }
        }
    });

    // ─── Release the last chart when the app goes away ───
    use_drop(move || {
        if let Err(e) = renderer.borrow_mut().teardown() {
            log::warn!("chart teardown failed: {:#}", e);
        }
    });

    let active = state.active();

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "margin: 8px 0; font-size: 24px;",
                "Plotly Sales Dashboard"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            PanelTabs {}

            ChartHeader {
                title: active.title().to_string(),
                note: panel_note(active).to_string(),
            }

            if active == Panel::Table {
                DataTable { dataset: DATASET }
            }

            ChartContainer {
                id: theme::CHART_REGION.to_string(),
                visible: active.is_chart(),
                min_height: theme::CHART_HEIGHT,
            }
        }
    }
}

fn reconcile(renderer: &SharedRenderer, panel: Panel) -> anyhow::Result<()> {
    renderer.borrow_mut().render(panel, &DATASET)
}

/// Short caption under the panel title.
fn panel_note(panel: Panel) -> &'static str {
    match panel {
        Panel::Table => "All figures in US dollars.",
        Panel::Bar => "Sales and expenses per month.",
        Panel::Line => "Profit per month, smoothed.",
        Panel::Pie => "Share of revenue by product. Not derived from the monthly figures.",
    }
}
