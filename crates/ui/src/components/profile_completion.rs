use dioxus::prelude::*;

use crate::vm::ProfileChecklistVm;

#[component]
pub fn ProfileCompletion(percentage: i32) -> Element {
    let vm = ProfileChecklistVm::new(percentage);
    let summary = vm.summary();
    let ProfileChecklistVm {
        items, next_hint, ..
    } = vm;

    rsx! {
        section { class: "widget profile-completion",
            header { class: "widget-header",
                h3 { "Complete your profile" }
                span { class: "profile-percentage", "{percentage}%" }
            }
            progress { class: "profile-progress", max: "100", value: "{percentage}" }
            p { class: "profile-summary", "{summary}" }
            ul { class: "profile-checklist",
                for item in items {
                    li { class: if item.done { "task done" } else { "task" },
                        span { class: "task-mark", if item.done { "✓" } else { "○" } }
                        span { class: "task-label", "{item.label}" }
                    }
                }
            }
            if let Some(hint) = next_hint {
                p { class: "profile-hint", "{hint}" }
            }
        }
    }
}
