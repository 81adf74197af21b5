//! Per-panel figure builders.
//!
//! Each builder maps the dataset straight onto Plotly traces in dataset
//! order. No aggregation, sorting or filtering happens here.

use crate::figure::{
    Axis, BarMode, BarTrace, Figure, Layout, Line, LineShape, Margin, Marker, PieMarker,
    PieTrace, PlotConfig, ScatterTrace, Trace,
};
use crate::panel::Panel;
use crate::theme;
use dash_data::Dataset;

/// Revenue share per product, in percent.
///
/// These do not come from the dataset: the pie always shows the same four
/// slices whatever monthly figures are loaded.
pub const PIE_VALUES: [f64; 4] = [40.0, 25.0, 20.0, 15.0];
pub const PIE_LABELS: [&str; 4] = ["Product A", "Product B", "Product C", "Product D"];

/// Build the figure for `panel`, or `None` for the table panel.
pub fn build(panel: Panel, dataset: &Dataset) -> Option<Figure> {
    match panel {
        Panel::Table => None,
        Panel::Bar => Some(bar(dataset)),
        Panel::Line => Some(line(dataset)),
        Panel::Pie => Some(pie()),
    }
}

/// Grouped bars of sales and expenses per month.
pub fn bar(dataset: &Dataset) -> Figure {
    let months = month_labels(dataset);
    let series = |name: &str, y: &[f64], color: &str| {
        Trace::Bar(BarTrace {
            name: name.to_string(),
            x: months.clone(),
            y: y.to_vec(),
            marker: Marker {
                color: color.to_string(),
            },
        })
    };

    Figure {
        data: vec![
            series("Sales", dataset.sales(), theme::SALES_COLOR),
            series("Expenses", dataset.expenses(), theme::EXPENSES_COLOR),
        ],
        layout: Layout {
            barmode: Some(BarMode::Group),
            ..base_layout()
        },
        config: base_config(),
    }
}

/// Smoothed profit trend over the months.
pub fn line(dataset: &Dataset) -> Figure {
    Figure {
        data: vec![Trace::Scatter(ScatterTrace {
            name: None,
            x: month_labels(dataset),
            y: dataset.profits().to_vec(),
            mode: "lines+markers".to_string(),
            marker: Marker {
                color: theme::PROFIT_COLOR.to_string(),
            },
            line: Line {
                shape: LineShape::Spline,
                width: theme::PROFIT_LINE_WIDTH,
            },
        })],
        layout: Layout {
            yaxis: Some(Axis {
                title: "Profit ($)".to_string(),
            }),
            ..base_layout()
        },
        config: base_config(),
    }
}

/// Fixed four-slice revenue distribution. See [`PIE_VALUES`].
pub fn pie() -> Figure {
    Figure {
        data: vec![Trace::Pie(PieTrace {
            values: PIE_VALUES.to_vec(),
            labels: PIE_LABELS.iter().map(|l| l.to_string()).collect(),
            marker: PieMarker {
                colors: theme::PIE_COLORS.iter().map(|c| c.to_string()).collect(),
            },
        })],
        layout: base_layout(),
        config: base_config(),
    }
}

fn month_labels(dataset: &Dataset) -> Vec<String> {
    dataset.months().iter().map(|m| m.to_string()).collect()
}

fn base_layout() -> Layout {
    let (l, r, b, t, pad) = theme::MARGIN;
    Layout {
        autosize: true,
        height: theme::CHART_HEIGHT,
        margin: Margin { l, r, b, t, pad },
        barmode: None,
        yaxis: None,
    }
}

fn base_config() -> PlotConfig {
    PlotConfig { responsive: true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_data::SAMPLE;

    fn bar_series(figure: &Figure, name: &str) -> BarTrace {
        figure
            .data
            .iter()
            .find_map(|t| match t {
                Trace::Bar(b) if b.name == name => Some(b.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_bar_groups_sales_and_expenses() {
        let figure = bar(&SAMPLE);
        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.layout.barmode, Some(BarMode::Group));

        let sales = bar_series(&figure, "Sales");
        let expenses = bar_series(&figure, "Expenses");
        assert_eq!(sales.y[3], 81.0);
        assert_eq!(expenses.y[3], 50.0);
        assert_eq!(sales.x, SAMPLE.months());
        assert_eq!(expenses.x, sales.x);
    }

    #[test]
    fn test_line_is_profit_with_spline() {
        let figure = line(&SAMPLE);
        let Trace::Scatter(trace) = &figure.data[0] else {
            panic!("expected a scatter trace");
        };
        assert_eq!(trace.y.len(), SAMPLE.len());
        assert_eq!(trace.y, [20.0, 9.0, 25.0, 31.0, 11.0, 15.0]);
        assert_eq!(trace.line.shape, LineShape::Spline);

        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["mode"], "lines+markers");
        assert_eq!(json["data"][0]["line"]["shape"], "spline");
        assert_eq!(json["layout"]["yaxis"]["title"], "Profit ($)");
    }

    #[test]
    fn test_pie_ignores_dataset() {
        let other = Dataset::new(&["Q1"], &[1000.0], &[1.0], &[999.0]);
        for dataset in [SAMPLE, other] {
            let figure = build(Panel::Pie, &dataset).unwrap();
            let Trace::Pie(trace) = &figure.data[0] else {
                panic!("expected a pie trace");
            };
            assert_eq!(trace.values, [40.0, 25.0, 20.0, 15.0]);
            assert_eq!(trace.labels[0], "Product A");
        }
    }

    #[test]
    fn test_table_has_no_figure() {
        assert!(build(Panel::Table, &SAMPLE).is_none());
    }

    #[test]
    fn test_shared_layout_and_config() {
        for panel in [Panel::Bar, Panel::Line, Panel::Pie] {
            let figure = build(panel, &SAMPLE).unwrap();
            let json = serde_json::to_value(&figure).unwrap();
            assert_eq!(json["layout"]["height"], 400, "{panel}");
            assert_eq!(json["layout"]["autosize"], true, "{panel}");
            assert_eq!(json["layout"]["margin"]["t"], 30, "{panel}");
            assert_eq!(json["config"]["responsive"], true, "{panel}");
        }
    }

    #[test]
    fn test_data_json_is_a_trace_array() {
        let figure = bar(&SAMPLE);
        let data: serde_json::Value = serde_json::from_str(&figure.data_json().unwrap()).unwrap();
        assert_eq!(data.as_array().unwrap().len(), 2);
        assert_eq!(data[0]["marker"]["color"], theme::SALES_COLOR);
    }
}
