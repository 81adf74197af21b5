//! Dioxus components and Plotly.js bridge for the sales dashboard.
//!
//! This crate provides:
//! - `js_bridge`: a `PlotBackend` that draws through Plotly.js via `wasm-bindgen`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: RSX components (tabs, table, chart container, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
