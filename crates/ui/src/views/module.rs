use dioxus::prelude::*;
use dioxus_router::Link;
use lab_core::model::ModuleId;

use crate::components::{LabList, ProtectedRoute};
use crate::context::{AppContext, use_auth};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LabCardVm, ModuleVm, map_lab_cards};

#[derive(Clone, Debug, PartialEq, Eq)]
struct ModuleData {
    module: ModuleVm,
    labs: Vec<LabCardVm>,
}

#[component]
pub fn ModuleView(module_id: ModuleId) -> Element {
    let auth = use_auth().cloned();
    let location = Route::Module { module_id }.to_string();

    rsx! {
        ProtectedRoute { auth, location,
            ModuleContent { module_id }
        }
    }
}

#[component]
fn ModuleContent(module_id: ModuleId) -> Element {
    let ctx = use_context::<AppContext>();
    let modules = ctx.modules();
    let labs = ctx.labs();

    let resource = use_resource(move || {
        let modules = modules.clone();
        let labs = labs.clone();
        async move {
            let module = modules.get_module(module_id).await?;
            let labs = labs.labs_for_module(module_id).await?;
            Ok::<_, ViewError>(ModuleData {
                module: ModuleVm::from(&module),
                labs: map_lab_cards(&labs),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page module",
            Link { class: "back-link", to: Route::Dashboard {}, "← Back to dashboard" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading module..." }
                },
                ViewState::Ready(data) => rsx! {
                    ModuleBody { data }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    h2 { "Module not found" }
                    p { "There is no module with id {module_id}." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ModuleBody(data: ModuleData) -> Element {
    rsx! {
        header { class: "module-header",
            h2 { "{data.module.title}" }
            p { class: "module-summary", "{data.module.summary}" }
        }
        // Sanitized in `markdown_to_html`.
        article { class: "module-content", dangerous_inner_html: "{data.module.body_html}" }
        section { class: "module-labs",
            h3 { "Labs in this module" }
            LabList { cards: data.labs.clone() }
        }
    }
}
