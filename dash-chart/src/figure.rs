//! Plotly figure model.
//!
//! All structs derive `Serialize` and follow Plotly.js attribute names, so a
//! serialized [`Figure`] can be handed to `Plotly.newPlot` as-is.

use serde::Serialize;

/// A complete chart: traces, layout and plot config.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

impl Figure {
    /// JSON for the `data` argument of `Plotly.newPlot`.
    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.data)
    }

    /// JSON for the `layout` argument of `Plotly.newPlot`.
    pub fn layout_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.layout)
    }

    /// JSON for the `config` argument of `Plotly.newPlot`.
    pub fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.config)
    }
}

/// One Plotly trace. The variant becomes the trace's `type` attribute.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Pie(PieTrace),
}

impl Trace {
    /// The Plotly trace type name.
    pub fn kind(&self) -> &'static str {
        match self {
            Trace::Bar(_) => "bar",
            Trace::Scatter(_) => "scatter",
            Trace::Pie(_) => "pie",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub marker: Marker,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub mode: String,
    pub marker: Marker,
    pub line: Line,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieTrace {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    pub marker: PieMarker,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

/// Line styling for scatter traces.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Line {
    pub shape: LineShape,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineShape {
    Linear,
    /// Smoothed interpolation between points.
    Spline,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub autosize: bool,
    pub height: u32,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
    Stack,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
    pub pad: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: String,
}

/// Plotly's third `newPlot` argument.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlotConfig {
    pub responsive: bool,
}
