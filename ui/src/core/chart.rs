//! Adapter between the core datasets and the chart-boundary contract.
//!
//! The structs here are the input contract of whatever renders the charts
//! (the SVG components in `dashboard/`, or an external plotting library when
//! serialized). They carry data and sizing only; no rendering happens here.

use serde::Serialize;

use super::aggregate::UserAggregate;
use super::drilldown::DrilldownDataset;
use super::format;
use super::rank::RankedOrder;
use super::selection::DEFAULT_BAR_COLOR;

pub const BAR_CHART_TITLE: &str = "Average Response Times for users";
pub const SCATTER_CHART_TITLE: &str = "User Response Times Over Various Sessions";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub color: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarTrace {
    pub x: Vec<f64>,
    pub y: Vec<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub orientation: &'static str,
    pub text: Vec<String>,
    pub marker: Marker,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarLayout {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub xaxis_title: &'static str,
    pub yaxis_title: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChart {
    pub trace: BarTrace,
    pub layout: BarLayout,
}

/// Builds the ranked horizontal bar chart in rendered (bottom-to-top) order
/// with the uniform initial color. Selection recolors via `style_update`.
pub fn bar_chart(ranked: &RankedOrder, aggregates: &[UserAggregate]) -> BarChart {
    let averages: Vec<f64> = ranked
        .ascending
        .iter()
        .map(|user_id| average_for(aggregates, user_id))
        .collect();
    let text = averages.iter().copied().map(format::format_average).collect();

    let user_count = ranked.len() as u32;
    let layout = BarLayout {
        title: BAR_CHART_TITLE,
        width: 800.max(80 * user_count),
        height: 600.max(40 * user_count),
        xaxis_title: "Average Response Time",
        yaxis_title: "userId",
    };

    BarChart {
        trace: BarTrace {
            x: averages,
            y: ranked.ascending.clone(),
            kind: "bar",
            orientation: "h",
            text,
            marker: Marker {
                color: vec![DEFAULT_BAR_COLOR; ranked.len()],
            },
        },
        layout,
    }
}

/// Color-only restyle payload for an already rendered bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkerUpdate {
    pub marker: Marker,
}

pub fn style_update(colors: Vec<&'static str>) -> MarkerUpdate {
    MarkerUpdate {
        marker: Marker { color: colors },
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterLayout {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub xaxis_title: &'static str,
    pub yaxis_title: &'static str,
    pub ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterChart {
    pub traces: Vec<ScatterTrace>,
    pub layout: ScatterLayout,
}

/// One markers-mode trace per eligible session, plus the fixed drill-down
/// layout. Axis ticks sit on the unjittered session dates.
pub fn scatter_chart(dataset: &DrilldownDataset) -> ScatterChart {
    let traces = dataset
        .sessions
        .iter()
        .map(|session| ScatterTrace {
            x: session.x.clone(),
            y: session.samples.clone(),
            kind: "scatter",
            mode: "markers",
            name: session.name(),
        })
        .collect();

    let ticks = dataset
        .dates
        .iter()
        .map(|date| AxisTick {
            value: date.epoch_seconds as f64,
            label: date.label.clone(),
        })
        .collect();

    ScatterChart {
        traces,
        layout: ScatterLayout {
            title: SCATTER_CHART_TITLE,
            width: 1600,
            height: 900,
            xaxis_title: "Date",
            yaxis_title: "Response Times (in seconds)",
            ticks,
        },
    }
}

fn average_for(aggregates: &[UserAggregate], user_id: &str) -> f64 {
    aggregates
        .iter()
        .find(|aggregate| aggregate.user_id == user_id)
        .map(|aggregate| aggregate.average)
        .unwrap_or(0.0)
}
