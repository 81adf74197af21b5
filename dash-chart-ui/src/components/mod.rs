//! Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod data_table;
mod error_display;
mod panel_tabs;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use data_table::DataTable;
pub use error_display::ErrorDisplay;
pub use panel_tabs::PanelTabs;
