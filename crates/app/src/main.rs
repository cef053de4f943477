use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lab_core::model::AuthState;
use services::{HttpLabsApi, LabService, LabsApi, ModuleService, StaticCatalog};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod config;

use config::Args;

struct DesktopApp {
    auth: AuthState,
    profile_completion: i32,
    labs: Arc<LabService>,
    modules: Arc<ModuleService>,
}

#[async_trait]
impl UiApp for DesktopApp {
    fn auth_state(&self) -> AuthState {
        AuthState::loading()
    }

    // Flags stand in for the auth provider, so the check settles immediately.
    async fn resolve_auth(&self) -> AuthState {
        self.auth.clone()
    }

    fn profile_completion(&self) -> i32 {
        self.profile_completion
    }

    fn labs(&self) -> Arc<LabService> {
        Arc::clone(&self.labs)
    }

    fn modules(&self) -> Arc<ModuleService> {
        Arc::clone(&self.modules)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_app(args: &Args) -> DesktopApp {
    let catalog = Arc::new(StaticCatalog::default());
    let labs_api: Arc<dyn LabsApi> = match args.labs_api() {
        Some(config) => {
            tracing::info!(base_url = %config.base_url, "using remote labs API");
            Arc::new(HttpLabsApi::new(Some(config)))
        }
        None => {
            tracing::info!("no labs API configured, using built-in catalog");
            catalog.clone()
        }
    };

    DesktopApp {
        auth: args.auth_state(),
        profile_completion: args.profile_completion,
        labs: Arc::new(LabService::new(labs_api)),
        modules: Arc::new(ModuleService::new(catalog)),
    }
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let app = build_app(&args);
    tracing::debug!(auth = ?app.auth, "starting desktop front end");
    let context = build_app_context(Arc::new(app));

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("CyberLab")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn desktop_auth_starts_loading_then_settles_on_flags() {
        let args = Args::try_parse_from(["cyberlab", "--unverified"]).unwrap();
        let app = build_app(&args);

        assert!(app.auth_state().is_loading);
        let resolved = app.resolve_auth().await;
        assert!(!resolved.is_loading);
        assert!(resolved.is_authenticated);
        assert_eq!(resolved.user.and_then(|u| u.is_verified), Some(false));
    }

    #[tokio::test]
    async fn labs_come_from_the_catalog_without_an_api_url() {
        let args = Args::try_parse_from(["cyberlab"]).unwrap();
        let app = build_app(&args);

        let labs = app.labs().new_labs().await.unwrap();
        assert_eq!(labs, StaticCatalog::default().labs());
    }
}
