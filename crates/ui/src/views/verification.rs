use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn VerificationWarningView(email: String) -> Element {
    rsx! {
        div { class: "page verification-warning",
            h2 { "Verify your email" }
            if email.is_empty() {
                p { "Check your inbox for a verification link." }
            } else {
                p { "We sent a verification link to "
                    strong { "{email}" }
                    ". Open it to unlock your dashboard."
                }
            }
            Link { class: "btn btn-ghost", to: Route::Home {}, "Back to home" }
        }
    }
}
