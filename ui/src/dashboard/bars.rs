use dioxus::prelude::*;

use crate::core::chart::{style_update, BarChart};
use crate::core::drilldown::DrilldownDataset;
use crate::core::selection::{bar_colors, handle_click, Selection};
use crate::dashboard::DashboardState;

const MARGIN_LEFT: f64 = 150.0;
const MARGIN_RIGHT: f64 = 80.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 32.0;

/// The ranked horizontal bar chart. Bars render bottom-to-top in ascending
/// order, so each bar's position index doubles as the click point index.
#[component]
pub fn ResponseBarChart(
    state: Signal<DashboardState>,
    selection: Signal<Selection>,
    drilldown: Signal<Option<DrilldownDataset>>,
    summary: Signal<Option<String>>,
) -> Element {
    let snapshot = state();
    let Some(chart) = snapshot.chart.clone() else {
        return rsx! {
            section { class: "dashboard-card dashboard-bars",
                div { class: "dashboard-card__header",
                    h2 { "Average response times" }
                }
                p { class: "dashboard-card__placeholder",
                    "Load an event log with decodable samples to render the ranking."
                }
            }
        };
    };

    // Style-only update: the chart data was built once at load time; only
    // the marker colors follow the selection.
    let colors = style_update(bar_colors(&selection(), &snapshot.ranked)).marker.color;
    let rows = layout_rows(&chart, &colors);

    let width = chart.layout.width;
    let height = chart.layout.height;
    let view_box = format!("0 0 {width} {height}");
    let user_count = snapshot.ranked.len();

    rsx! {
        section { class: "dashboard-card dashboard-bars",
            div { class: "dashboard-card__header",
                h2 { "{chart.layout.title}" }
                span { class: "dashboard-card__meta", "{user_count} users · tap a bar to drill down" }
            }

            svg {
                class: "dashboard-bars__svg",
                width: "{width}",
                height: "{height}",
                view_box: "{view_box}",
                role: "img",

                for row in rows.into_iter() {
                    {render_bar_row(row, state, selection, drilldown, summary)}
                }

                text {
                    x: "{MARGIN_LEFT}",
                    y: "{height as f64 - 8.0}",
                    class: "dashboard-bars__axis-title",
                    "{chart.layout.xaxis_title}"
                }
            }
        }
    }
}

fn render_bar_row(
    row: BarRow,
    state: Signal<DashboardState>,
    selection: Signal<Selection>,
    drilldown: Signal<Option<DrilldownDataset>>,
    summary: Signal<Option<String>>,
) -> Element {
    let BarRow {
        point_index,
        label,
        value_text,
        color,
        bar_top,
        bar_width,
        bar_height,
        text_baseline,
    } = row;

    let label_x = MARGIN_LEFT - 8.0;
    let value_x = MARGIN_LEFT + bar_width + 6.0;

    rsx! {
        g {
            class: "dashboard-bars__row",
            onclick: move |_| on_bar_click(state, selection, drilldown, summary, point_index),

            rect {
                x: "{MARGIN_LEFT}",
                y: "{bar_top}",
                width: "{bar_width}",
                height: "{bar_height}",
                rx: "2",
                fill: "{color}",
            }
            text {
                x: "{label_x}",
                y: "{text_baseline}",
                text_anchor: "end",
                class: "dashboard-bars__label",
                "{label}"
            }
            text {
                x: "{value_x}",
                y: "{text_baseline}",
                text_anchor: "start",
                class: "dashboard-bars__value",
                "{value_text}"
            }
        }
    }
}

struct BarRow {
    point_index: usize,
    label: String,
    value_text: String,
    color: &'static str,
    bar_top: f64,
    bar_width: f64,
    bar_height: f64,
    text_baseline: f64,
}

fn layout_rows(chart: &BarChart, colors: &[&'static str]) -> Vec<BarRow> {
    let count = chart.trace.y.len();
    if count == 0 {
        return Vec::new();
    }

    let plot_width = chart.layout.width as f64 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = chart.layout.height as f64 - MARGIN_TOP - MARGIN_BOTTOM;
    let row_height = plot_height / count as f64;
    // bargap 0.5: the bar fills half the row.
    let bar_height = row_height * 0.5;

    let max_value = chart
        .trace
        .x
        .iter()
        .copied()
        .fold(f64::EPSILON, f64::max);

    (0..count)
        .map(|point_index| {
            // Ascending index 0 sits at the bottom of the plot.
            let slot = count - 1 - point_index;
            let row_top = MARGIN_TOP + slot as f64 * row_height;
            let bar_top = row_top + (row_height - bar_height) / 2.0;

            BarRow {
                point_index,
                label: chart.trace.y[point_index].clone(),
                value_text: chart.trace.text[point_index].clone(),
                color: colors.get(point_index).copied().unwrap_or("gray"),
                bar_top,
                bar_width: (chart.trace.x[point_index] / max_value) * plot_width,
                bar_height,
                text_baseline: bar_top + bar_height / 2.0 + 4.0,
            }
        })
        .collect()
}

fn on_bar_click(
    state: Signal<DashboardState>,
    mut selection: Signal<Selection>,
    mut drilldown: Signal<Option<DrilldownDataset>>,
    mut summary: Signal<Option<String>>,
    point_index: usize,
) {
    let snapshot = state();
    let outcome = handle_click(
        &selection(),
        point_index,
        &snapshot.events,
        &snapshot.ranked,
        &snapshot.aggregates,
        &mut rand::thread_rng(),
    );

    selection.set(outcome.selection);
    drilldown.set(outcome.drilldown);
    summary.set(outcome.summary);
}
