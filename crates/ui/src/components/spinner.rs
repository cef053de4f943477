use dioxus::prelude::*;

/// Blocking placeholder shown while something upstream is still loading.
#[component]
pub fn Spinner(label: String) -> Element {
    rsx! {
        div { class: "spinner-wrap", role: "status",
            div { class: "spinner" }
            p { class: "spinner-label", "{label}" }
        }
    }
}
