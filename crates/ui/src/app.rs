use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, use_auth_provider};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_auth_provider(use_context::<AppContext>());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Per-route headings live in the views; the window title stays fixed.
        document::Title { "CyberLab" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
