use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

/// Placeholder for the external sign-in flow.
#[component]
pub fn LoginView(from: String) -> Element {
    rsx! {
        div { class: "page login",
            h2 { "Sign in" }
            p { "Sign-in is handled by the CyberLab account service." }
            if !from.is_empty() {
                p { class: "return-to", "You'll be sent back to {from} after signing in." }
            }
            Link { class: "btn btn-ghost", to: Route::Home {}, "Back to home" }
        }
    }
}
