//! Plotly.js bridge.
//!
//! Plotly is loaded as a page script (see the app's `index.html`) and reached
//! through the global `Plotly` namespace. Figures are serialized with
//! `serde_json`, parsed into JS objects with `JSON.parse`, and passed to
//! `Plotly.newPlot`. JS exceptions are caught by `wasm-bindgen` and returned
//! as errors instead of aborting the app.

use anyhow::{anyhow, bail, Context};
use dash_chart::{ChartHandle, Figure, PlotBackend};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn plotly_new_plot(
        region: &str,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = purge)]
    fn plotly_purge(region: &str) -> Result<(), JsValue>;
}

/// Draws figures with Plotly.js into DOM elements by id.
#[derive(Debug, Default)]
pub struct PlotlyBackend {
    next_id: u64,
}

impl PlotlyBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlotBackend for PlotlyBackend {
    fn draw(&mut self, region: &str, figure: &Figure) -> anyhow::Result<ChartHandle> {
        if !region_exists(region) {
            bail!("display region '{}' is not in the document", region);
        }

        let data = parse_json(&figure.data_json()?).context("trace data")?;
        let layout = parse_json(&figure.layout_json()?).context("layout")?;
        let config = parse_json(&figure.config_json()?).context("plot config")?;

        // The returned promise is not awaited; purge is safe on a plot that is
        // still finishing.
        plotly_new_plot(region, &data, &layout, &config).map_err(js_error)?;

        self.next_id += 1;
        Ok(ChartHandle::new(self.next_id, region))
    }

    fn release(&mut self, handle: ChartHandle) -> anyhow::Result<()> {
        plotly_purge(handle.region()).map_err(js_error)
    }
}

fn region_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

fn parse_json(json: &str) -> anyhow::Result<JsValue> {
    js_sys::JSON::parse(json).map_err(js_error)
}

fn js_error(err: JsValue) -> anyhow::Error {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => anyhow!("Plotly: {}", String::from(e.message())),
        None => anyhow!("Plotly: {:?}", err),
    }
}
