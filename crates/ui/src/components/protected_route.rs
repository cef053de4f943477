//! Client-side route guard.
//!
//! This only shapes what the UI renders; the labs API must still check the
//! session on every request.

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use lab_core::model::AuthState;
use lab_core::{Access, decide};

use crate::components::Spinner;

/// Renders `children` only when `auth` grants access to `location`.
///
/// `location` is the path being guarded; it is carried to the login page so
/// the user can be sent back after signing in.
#[component]
pub fn ProtectedRoute(auth: AuthState, location: String, children: Element) -> Element {
    let access = decide(&auth, &location);
    tracing::debug!(%location, ?access, "route guard");

    match access {
        Access::Pending => rsx! {
            Spinner { label: "Checking your session..." }
        },
        Access::Granted => children,
        Access::Login { .. } | Access::VerifyEmail { .. } => {
            let to = access.redirect_target().unwrap_or_default();
            rsx! { Redirect { to } }
        }
    }
}

/// Replaces the current history entry with `to` on mount and whenever `to`
/// changes.
#[component]
fn Redirect(to: String) -> Element {
    let navigator = use_navigator();
    use_effect(use_reactive((&to,), move |(target,)| {
        tracing::debug!(%target, "redirecting");
        navigator.replace(target);
    }));

    rsx! {
        div { class: "redirecting",
            p { "Redirecting..." }
            Link { to: to.clone(), "Continue" }
        }
    }
}
