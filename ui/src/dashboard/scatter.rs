use dioxus::prelude::*;

use crate::core::chart::{scatter_chart, ScatterChart};
use crate::core::drilldown::DrilldownDataset;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 96.0;

/// Category palette for session traces, cycled when a user has more
/// sessions than colors.
const SESSION_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Scatter drill-down for the selected user: one marker group per eligible
/// session, fanned out horizontally by the builder's jitter.
#[component]
pub fn SessionScatterChart(drilldown: Signal<Option<DrilldownDataset>>) -> Element {
    let Some(dataset) = drilldown() else {
        return rsx! {
            section { class: "dashboard-card dashboard-scatter",
                div { class: "dashboard-card__header",
                    h2 { "Session samples" }
                }
                p { class: "dashboard-card__placeholder",
                    "Select a bar above to inspect that user's raw session samples."
                }
            }
        };
    };

    if dataset.sessions.is_empty() {
        return rsx! {
            section { class: "dashboard-card dashboard-scatter",
                div { class: "dashboard-card__header",
                    h2 { "Session samples" }
                }
                p { class: "dashboard-card__placeholder",
                    "No exercise sessions with decodable samples recorded for {dataset.user_id}."
                }
            }
        };
    }

    let chart = scatter_chart(&dataset);
    let width = chart.layout.width;
    let height = chart.layout.height;
    let view_box = format!("0 0 {width} {height}");

    let (points, legend, ticks) = project(&chart);
    let session_count = dataset.sessions.len();

    rsx! {
        section { class: "dashboard-card dashboard-scatter",
            div { class: "dashboard-card__header",
                h2 { "{chart.layout.title}" }
                span { class: "dashboard-card__meta", "{dataset.user_id} · {session_count} sessions" }
            }

            svg {
                class: "dashboard-scatter__svg",
                width: "{width}",
                height: "{height}",
                view_box: "{view_box}",
                role: "img",

                // Plot frame
                line {
                    x1: "{MARGIN_LEFT}",
                    y1: "{height as f64 - MARGIN_BOTTOM}",
                    x2: "{width as f64 - MARGIN_RIGHT}",
                    y2: "{height as f64 - MARGIN_BOTTOM}",
                    class: "dashboard-scatter__axis",
                }
                line {
                    x1: "{MARGIN_LEFT}",
                    y1: "{MARGIN_TOP}",
                    x2: "{MARGIN_LEFT}",
                    y2: "{height as f64 - MARGIN_BOTTOM}",
                    class: "dashboard-scatter__axis",
                }

                for tick in ticks.into_iter() {
                    text {
                        x: "{tick.x}",
                        y: "{tick.y}",
                        class: "dashboard-scatter__tick",
                        transform: "rotate(-45 {tick.x} {tick.y})",
                        text_anchor: "end",
                        "{tick.label}"
                    }
                }

                for point in points.into_iter() {
                    circle {
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "6",
                        fill: "{point.color}",
                        fill_opacity: "0.85",
                    }
                }

                for entry in legend.into_iter() {
                    circle {
                        cx: "{entry.x}",
                        cy: "{entry.y - 4.0}",
                        r: "5",
                        fill: "{entry.color}",
                    }
                    text {
                        x: "{entry.x + 12.0}",
                        y: "{entry.y}",
                        class: "dashboard-scatter__legend",
                        "{entry.label}"
                    }
                }

                text {
                    x: "{MARGIN_LEFT}",
                    y: "{height as f64 - 10.0}",
                    class: "dashboard-scatter__axis-title",
                    "{chart.layout.xaxis_title}"
                }
                text {
                    x: "16",
                    y: "{MARGIN_TOP - 12.0}",
                    class: "dashboard-scatter__axis-title",
                    "{chart.layout.yaxis_title}"
                }
            }
        }
    }
}

struct PlottedPoint {
    x: f64,
    y: f64,
    color: &'static str,
}

struct LegendEntry {
    x: f64,
    y: f64,
    color: &'static str,
    label: String,
}

struct TickLabel {
    x: f64,
    y: f64,
    label: String,
}

/// Maps chart coordinates into the SVG viewport.
fn project(chart: &ScatterChart) -> (Vec<PlottedPoint>, Vec<LegendEntry>, Vec<TickLabel>) {
    let width = chart.layout.width as f64;
    let height = chart.layout.height as f64;
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let xs = chart
        .traces
        .iter()
        .flat_map(|trace| trace.x.iter().copied())
        .chain(chart.layout.ticks.iter().map(|tick| tick.value));
    let (x_min, x_max) = padded_range(xs, 1.0);

    let ys = chart
        .traces
        .iter()
        .flat_map(|trace| trace.y.iter().copied());
    let (y_min, y_max) = padded_range(ys, 0.5);

    let to_px_x = |value: f64| MARGIN_LEFT + (value - x_min) / (x_max - x_min) * plot_width;
    let to_px_y = |value: f64| MARGIN_TOP + (y_max - value) / (y_max - y_min) * plot_height;

    let mut points = Vec::new();
    let mut legend = Vec::new();
    for (trace_index, trace) in chart.traces.iter().enumerate() {
        let color = SESSION_COLORS[trace_index % SESSION_COLORS.len()];
        for (x, y) in trace.x.iter().zip(trace.y.iter()) {
            points.push(PlottedPoint {
                x: to_px_x(*x),
                y: to_px_y(*y),
                color,
            });
        }
        legend.push(LegendEntry {
            x: width - MARGIN_RIGHT + 24.0,
            y: MARGIN_TOP + 20.0 * trace_index as f64 + 12.0,
            color,
            label: trace.name.clone(),
        });
    }

    let ticks = chart
        .layout
        .ticks
        .iter()
        .map(|tick| TickLabel {
            x: to_px_x(tick.value),
            y: height - MARGIN_BOTTOM + 18.0,
            label: tick.label.clone(),
        })
        .collect();

    (points, legend, ticks)
}

fn padded_range(values: impl Iterator<Item = f64>, min_pad: f64) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for value in values {
        lo = lo.min(value);
        hi = hi.max(value);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }

    let pad = ((hi - lo) * 0.05).max(min_pad);
    (lo - pad, hi + pad)
}
