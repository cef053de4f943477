use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "CyberLab - hands-on security training." }
            p { class: "footer-note", "Only attack systems you are authorized to test." }
        }
    }
}
