//! Route-guard decision.
//!
//! Kept renderer-agnostic so the precedence rules can be tested without a DOM.
//! The UI maps each [`Access`] outcome to a render.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::model::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const VERIFICATION_WARNING_PATH: &str = "/verification-warning";

/// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Outcome of checking an auth snapshot against a protected location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Auth check still running. Render a placeholder, never the content.
    Pending,
    /// Not signed in. `from` is the location to return to after login.
    Login { from: String },
    /// Signed in but the account is explicitly unverified.
    VerifyEmail { email: String },
    Granted,
}

impl Access {
    /// Where the router should go, if anywhere.
    #[must_use]
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Access::Login { from } => Some(login_path(from)),
            Access::VerifyEmail { email } => Some(verification_warning_path(email)),
            Access::Pending | Access::Granted => None,
        }
    }
}

/// Decide what a protected location should render for the given auth state.
///
/// Precedence is fixed: loading, then unauthenticated, then unverified.
/// Only `is_verified == Some(false)` counts as unverified; a missing user or a
/// missing flag falls through to [`Access::Granted`].
#[must_use]
pub fn decide(auth: &AuthState, requested: &str) -> Access {
    if auth.is_loading {
        return Access::Pending;
    }
    if !auth.is_authenticated {
        return Access::Login {
            from: requested.to_owned(),
        };
    }
    match &auth.user {
        Some(user) if user.is_verified == Some(false) => Access::VerifyEmail {
            email: user.email.clone(),
        },
        _ => Access::Granted,
    }
}

/// `/login?from=<encoded location>`
#[must_use]
pub fn login_path(from: &str) -> String {
    format!("{LOGIN_PATH}?from={}", encode_component(from))
}

/// `/verification-warning?email=<encoded email>`
#[must_use]
pub fn verification_warning_path(email: &str) -> String {
    format!("{VERIFICATION_WARNING_PATH}?email={}", encode_component(email))
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
