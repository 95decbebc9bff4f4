use dioxus::prelude::*;

use crate::core::drilldown::DrilldownDataset;
use crate::core::selection::Selection;
use crate::dashboard::DashboardState;

/// File-input panel. Reads the chosen file off the event's `FileEngine`,
/// parses it, and commits the result. Parse failures surface inline and
/// leave any previously rendered chart alone.
#[component]
pub fn UploadPanel(
    state: Signal<DashboardState>,
    selection: Signal<Selection>,
    drilldown: Signal<Option<DrilldownDataset>>,
    summary: Signal<Option<String>>,
) -> Element {
    let busy = use_signal(|| false);

    let snapshot = state();
    let loaded_meta = snapshot
        .has_chart()
        .then(|| format!("{} events · {} users ranked", snapshot.events.len(), snapshot.ranked.len()));

    rsx! {
        section { class: "dashboard-card dashboard-upload",
            div { class: "dashboard-card__header",
                h2 { "Event log" }
                if let Some(meta) = loaded_meta {
                    span { class: "dashboard-card__meta", "{meta}" }
                }
            }

            p { "Choose a JSON export. Everything is parsed locally; nothing leaves this device." }

            input {
                r#type: "file",
                class: "dashboard-upload__input",
                accept: ".json,application/json",
                multiple: false,
                disabled: busy(),
                onchange: move |evt| {
                    let Some(file_engine) = evt.files() else {
                        return;
                    };
                    let Some(name) = file_engine.files().into_iter().next() else {
                        return;
                    };

                    let mut busy = busy;
                    busy.set(true);
                    spawn(async move {
                        match file_engine.read_file_to_string(&name).await {
                            Some(raw) => {
                                commit_load(state, selection, drilldown, summary, &raw);
                            }
                            None => {
                                let mut state = state;
                                state.with_mut(|s| {
                                    s.error = Some(format!("Couldn't read {name}"));
                                });
                            }
                        }
                        busy.set(false);
                    });
                },
            }

            if let Some(err) = snapshot.error {
                p { class: "dashboard-card__meta dashboard-card__meta--error", "⚠️ {err}" }
            }
        }
    }
}

fn commit_load(
    mut state: Signal<DashboardState>,
    mut selection: Signal<Selection>,
    mut drilldown: Signal<Option<DrilldownDataset>>,
    mut summary: Signal<Option<String>>,
    raw: &str,
) {
    let next = state().apply_json(raw);
    let replaced = next.error.is_none();
    state.set(next);

    // A fresh log invalidates the old selection; a failed parse keeps it.
    if replaced {
        selection.set(Selection::Unselected);
        drilldown.set(None);
        summary.set(None);
    }
}
