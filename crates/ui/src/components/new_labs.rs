use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LabCardVm, map_lab_cards};

/// Dashboard widget listing the latest labs.
#[component]
pub fn NewLabs() -> Element {
    let ctx = use_context::<AppContext>();
    let labs = ctx.labs();

    let resource = use_resource(move || {
        let labs = labs.clone();
        async move {
            let items = labs.new_labs().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_lab_cards(&items))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        section { class: "widget new-labs",
            header { class: "widget-header",
                h3 { "New labs" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading labs..." }
                },
                ViewState::Ready(cards) => rsx! {
                    LabList { cards }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
pub fn LabList(cards: Vec<LabCardVm>) -> Element {
    rsx! {
        if cards.is_empty() {
            p { class: "empty", "No labs available yet." }
        } else {
            ul { class: "lab-list",
                for card in cards {
                    LabCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
pub fn LabCard(card: LabCardVm) -> Element {
    rsx! {
        li { class: "lab-card",
            div { class: "lab-card-header",
                h4 { class: "lab-title", "{card.title}" }
                span { class: card.difficulty_class, "{card.difficulty_label}" }
            }
            p { class: "lab-description", "{card.description}" }
            div { class: "lab-meta",
                span { class: "lab-category", "{card.category}" }
                span { class: "lab-duration", "{card.duration}" }
                span { class: "lab-points", "{card.points}" }
            }
            span { class: card.availability.class(), "{card.availability.label()}" }
        }
    }
}
