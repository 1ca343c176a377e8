//! Chart.js configuration builders.
//!
//! Pure functions producing the JSON config handed to
//! [`crate::js_bridge::render_chart`].

use serde_json::{json, Value};

/// Palette shared by every dashboard chart.
pub const PALETTE: [&str; 6] = [
    "#2196F3", "#4CAF50", "#FF9800", "#9C27B0", "#F44336", "#009688",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

/// Build a Chart.js config with one dataset per series.
pub fn chart_config(kind: ChartKind, title: &str, labels: &[String], series: &[Series]) -> Value {
    let datasets: Vec<Value> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = PALETTE[i % PALETTE.len()];
            json!({
                "label": s.label,
                "data": s.values,
                "backgroundColor": color,
                "borderColor": color,
                "fill": false,
                "tension": 0.25,
            })
        })
        .collect();

    json!({
        "type": kind.as_str(),
        "data": {
            "labels": labels,
            "datasets": datasets,
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": {"display": !title.is_empty(), "text": title},
                "legend": {"display": series.len() > 1},
            },
            "scales": {
                "y": {"beginAtZero": true},
            },
        },
    })
}

pub fn bar_chart(title: &str, labels: &[String], series: &[Series]) -> String {
    chart_config(ChartKind::Bar, title, labels, series).to_string()
}

pub fn line_chart(title: &str, labels: &[String], series: &[Series]) -> String {
    chart_config(ChartKind::Line, title, labels, series).to_string()
}
