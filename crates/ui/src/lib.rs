pub mod app;
pub mod components;
pub mod context;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context, use_auth, use_auth_provider};
