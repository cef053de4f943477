use std::sync::Arc;

use async_trait::async_trait;
use dioxus::prelude::*;
use lab_core::model::AuthState;
use services::{LabService, ModuleService};

/// Capabilities the composition root hands to the UI.
///
/// Auth is an external collaborator: the UI starts from `auth_state` and
/// switches to whatever `resolve_auth` settles on.
#[async_trait]
pub trait UiApp: Send + Sync {
    /// Snapshot for the first render. Usually still loading.
    fn auth_state(&self) -> AuthState;

    /// Completes once the auth provider has finished its check.
    async fn resolve_auth(&self) -> AuthState;

    fn profile_completion(&self) -> i32;

    fn labs(&self) -> Arc<LabService>;
    fn modules(&self) -> Arc<ModuleService>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    labs: Arc<LabService>,
    modules: Arc<ModuleService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        let labs = app.labs();
        let modules = app.modules();

        Self { app, labs, modules }
    }

    #[must_use]
    pub fn initial_auth(&self) -> AuthState {
        self.app.auth_state()
    }

    pub async fn resolve_auth(&self) -> AuthState {
        self.app.resolve_auth().await
    }

    #[must_use]
    pub fn profile_completion(&self) -> i32 {
        self.app.profile_completion()
    }

    #[must_use]
    pub fn labs(&self) -> Arc<LabService> {
        Arc::clone(&self.labs)
    }

    #[must_use]
    pub fn modules(&self) -> Arc<ModuleService> {
        Arc::clone(&self.modules)
    }
}

// Provided by the application composition root (`crates/app`) or the view test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Live auth state, shared through context so every reader re-renders when it
/// changes.
#[derive(Clone, Copy)]
pub struct AuthSignal(Signal<AuthState>);

/// Seeds the shared auth signal from `ctx` and updates it once the provider
/// resolves. Call once, above anything that reads [`use_auth`].
pub fn use_auth_provider(ctx: AppContext) -> Signal<AuthState> {
    let mut auth = use_signal(|| ctx.initial_auth());
    use_context_provider(|| AuthSignal(auth));

    use_future(move || {
        let ctx = ctx.clone();
        async move {
            let resolved = ctx.resolve_auth().await;
            tracing::debug!(
                authenticated = resolved.is_authenticated,
                loading = resolved.is_loading,
                "auth resolved"
            );
            auth.set(resolved);
        }
    });

    auth
}

/// Current auth signal. Reading it subscribes the calling component.
#[must_use]
pub fn use_auth() -> Signal<AuthState> {
    use_context::<AuthSignal>().0
}
