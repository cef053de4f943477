use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::use_auth;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let email = auth.read().email().map(str::to_owned);
    let mut menu_open = use_signal(|| false);

    let links_class = if menu_open() { "nav-links open" } else { "nav-links" };

    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Home {}, "CyberLab" }
            button {
                class: "nav-toggle",
                r#type: "button",
                "aria-label": "Toggle navigation",
                onclick: move |_| menu_open.set(!menu_open()),
                "☰"
            }
            ul { class: links_class,
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
            }
            div { class: "nav-account",
                if let Some(email) = email {
                    span { class: "nav-email", "{email}" }
                } else {
                    Link { class: "btn btn-small", to: Route::Login { from: String::new() }, "Sign in" }
                }
            }
        }
    }
}
