use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Latelens" }
            p { "Chart per-user response times from a raw event log, then drill into the sessions behind any bar." }

            ul { class: "page-home__features",
                li { "Load a JSON event export straight from disk — no server, no upload." }
                li { "Rank every user by average response time across their recorded samples." }
                li { "Click a bar to fan out that user's raw session samples over time." }
            }
            p { class: "page-home__cta",
                "Head to the dashboard and load a log to get started."
            }
        }
    }
}
