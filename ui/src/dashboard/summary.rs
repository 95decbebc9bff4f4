use dioxus::prelude::*;

/// The on-select text line for the currently pinned user. Cleared (back to
/// the placeholder) whenever the selection toggles off.
#[component]
pub fn SelectionSummary(summary: Signal<Option<String>>) -> Element {
    rsx! {
        section { class: "dashboard-card dashboard-summary",
            div { class: "dashboard-card__header",
                h2 { "Selection" }
            }

            match summary() {
                Some(text) => rsx! {
                    p { class: "dashboard-summary__text dashboard-summary__text--active", "{text}" }
                },
                None => rsx! {
                    p { class: "dashboard-card__placeholder",
                        "Click a bar to pin a user's headline average here."
                    }
                },
            }
        }
    }
}
