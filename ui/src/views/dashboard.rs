use dioxus::prelude::*;

use crate::core::drilldown::DrilldownDataset;
use crate::core::selection::Selection;
use crate::dashboard::{
    DashboardState, ResponseBarChart, SelectionSummary, SessionScatterChart, UploadPanel,
};

/// The main page: owns the shared signals and composes the panels around
/// them. All clicks funnel through the pure `handle_click` in `core`; the
/// signals only ever hold its outputs.
#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(DashboardState::default);
    let selection = use_signal(Selection::default);
    let drilldown = use_signal(|| Option::<DrilldownDataset>::None);
    let summary = use_signal(|| Option::<String>::None);

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Response times" }
            p {
                "Load an event log to chart per-user averages, then select a bar to inspect that user's raw session samples."
            }

            UploadPanel { state, selection, drilldown, summary }

            div { class: "dashboard__panels",
                ResponseBarChart { state, selection, drilldown, summary }
                SelectionSummary { summary }
            }

            SessionScatterChart { drilldown }
        }
    }
}
