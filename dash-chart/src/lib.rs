//! Panel selection and chart lifecycle for the sales dashboard.
//!
//! This crate provides:
//! - `panel`: the fixed set of dashboard panels
//! - `selector`: the view selector holding the active panel
//! - `figure` and `figures`: the Plotly figure model and per-panel builders
//! - `backend`: the plotting capability (`draw`/`release`) and `ChartHandle`
//! - `renderer`: the per-region reconciler that owns chart handles
//!
//! Nothing here touches the DOM; the browser backend lives in `dash-chart-ui`.
//!
//! ```rust
//! use dash_chart::{figures, Panel};
//! use dash_data::SAMPLE;
//!
//! let line = figures::build(Panel::Line, &SAMPLE).unwrap();
//! assert_eq!(line.data.len(), 1);
//! assert!(figures::build(Panel::Table, &SAMPLE).is_none());
//! ```

pub mod backend;
pub mod figure;
pub mod figures;
pub mod panel;
pub mod renderer;
pub mod selector;
pub mod theme;

#[cfg(test)]
mod recording;

pub use backend::{ChartHandle, PlotBackend};
pub use figure::Figure;
pub use panel::Panel;
pub use renderer::PanelRenderer;
pub use selector::ViewSelector;
