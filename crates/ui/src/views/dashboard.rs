use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::{NewLabs, ProfileCompletion, ProtectedRoute};
use crate::context::{AppContext, use_auth};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ModuleLinkVm, map_module_links};

#[component]
pub fn DashboardView() -> Element {
    let auth = use_auth().cloned();
    let location = Route::Dashboard {}.to_string();

    rsx! {
        ProtectedRoute { auth, location,
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_auth();
    let greeting = match auth.read().email() {
        Some(email) => format!("Welcome back, {email}"),
        None => "Welcome back".to_owned(),
    };
    let percentage = ctx.profile_completion();

    rsx! {
        div { class: "page dashboard",
            h2 { "Dashboard" }
            p { class: "greeting", "{greeting}" }
            div { class: "dashboard-grid",
                ProfileCompletion { percentage }
                NewLabs {}
            }
            ModuleLinks {}
        }
    }
}

#[component]
fn ModuleLinks() -> Element {
    let ctx = use_context::<AppContext>();
    let modules = ctx.modules();

    let resource = use_resource(move || {
        let modules = modules.clone();
        async move {
            let items = modules.list_modules().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_module_links(&items))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        section { class: "widget modules",
            h3 { "Your modules" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading modules..." }
                },
                ViewState::Ready(links) => rsx! {
                    ul { class: "module-list",
                        for link in links {
                            ModuleLink { key: "{link.id}", link }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ModuleLink(link: ModuleLinkVm) -> Element {
    rsx! {
        li {
            Link { class: "module-link", to: Route::Module { module_id: link.id },
                span { class: "module-title", "{link.title}" }
            }
            p { class: "module-summary", "{link.summary}" }
        }
    }
}
