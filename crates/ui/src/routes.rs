use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use lab_core::model::ModuleId;

use crate::components::{Footer, Navbar};
use crate::views::{
    DashboardView, HomeView, LoginView, ModuleView, NotFoundView, VerificationWarningView,
};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/modules/:module_id", ModuleView)] Module { module_id: ModuleId },
        #[route("/login?:from", LoginView)] Login { from: String },
        #[route("/verification-warning?:email", VerificationWarningView)] VerificationWarning { email: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
