use dioxus::prelude::*;

use crate::components::{ContentSection, CtaSection, HeroSection, StatsSection};

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home",
            HeroSection {}
            ContentSection {}
            StatsSection {}
            CtaSection {}
        }
    }
}
