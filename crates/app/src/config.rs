use clap::Parser;
use lab_core::model::{AuthState, User};
use services::LabsApiConfig;

/// CyberLab desktop front end.
///
/// Auth is stubbed from the flags below until a real provider is wired in.
#[derive(Debug, Clone, Parser)]
#[command(name = "cyberlab", version, about)]
pub struct Args {
    /// Base URL of the labs API. Without it the built-in catalog is used.
    #[arg(long, env = "CYBERLAB_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token sent to the labs API.
    #[arg(long, env = "CYBERLAB_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Email of the signed-in user.
    #[arg(long, env = "CYBERLAB_USER_EMAIL", default_value = "student@cyberlab.local")]
    pub user_email: String,

    /// Treat the signed-in user as unverified.
    #[arg(long, env = "CYBERLAB_USER_UNVERIFIED")]
    pub unverified: bool,

    /// Start without a signed-in user.
    #[arg(long, conflicts_with = "unverified")]
    pub signed_out: bool,

    /// Profile completion shown on the dashboard.
    #[arg(
        long,
        env = "CYBERLAB_PROFILE_COMPLETION",
        default_value_t = 45,
        allow_negative_numbers = true
    )]
    pub profile_completion: i32,
}

impl Args {
    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        if self.signed_out {
            return AuthState::signed_out();
        }
        AuthState::signed_in(User::new(self.user_email.clone(), Some(!self.unverified)))
    }

    #[must_use]
    pub fn labs_api(&self) -> Option<LabsApiConfig> {
        self.api_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| LabsApiConfig::new(url, self.api_token.clone()))
    }
}
