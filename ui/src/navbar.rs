use dioxus::prelude::*;

/// Shared app shell header. Launchers pass their router-specific links as
/// children since the `Route` enum lives with each launcher.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "navbar",
            span { class: "navbar__brand", "Latelens" }
            nav { class: "navbar__links", {children} }
        }
    }
}
