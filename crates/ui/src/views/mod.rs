mod dashboard;
mod home;
mod login;
mod module;
mod not_found;
mod state;
mod verification;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use login::LoginView;
pub use module::ModuleView;
pub use not_found::NotFoundView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use verification::VerificationWarningView;
