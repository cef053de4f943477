use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lab_core::model::{AuthState, ModuleId};
use services::{LabService, LabsApi, ModuleService, ModuleSource, StaticCatalog};
use tokio::sync::Notify;

use crate::components::ProtectedRoute;
use crate::context::{UiApp, build_app_context, use_auth, use_auth_provider};
use crate::views::{DashboardView, HomeView, LoginView, ModuleView, VerificationWarningView};

pub const DEFAULT_COMPLETION: i32 = 45;

#[derive(Clone)]
struct TestApp {
    auth: AuthState,
    resolved: AuthState,
    /// When set, `resolve_auth` waits for a permit before answering.
    release: Option<Arc<Notify>>,
    profile_completion: i32,
    labs: Arc<LabService>,
    modules: Arc<ModuleService>,
}

#[async_trait::async_trait]
impl UiApp for TestApp {
    fn auth_state(&self) -> AuthState {
        self.auth.clone()
    }

    async fn resolve_auth(&self) -> AuthState {
        if let Some(release) = &self.release {
            release.notified().await;
        }
        self.resolved.clone()
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

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Home,
    Dashboard,
    Module(u64),
    Login(String),
    Verification(String),
    /// Bare guard around a marker paragraph.
    Guarded,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(app));
    use_auth_provider(ctx);
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

// Redirects land on the catch-all, which notes the path and renders the same
// view again.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let auth = use_auth();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Module(id) => rsx! { ModuleView { module_id: ModuleId::new(id) } },
        ViewKind::Login(from) => rsx! { LoginView { from } },
        ViewKind::Verification(email) => rsx! { VerificationWarningView { email } },
        ViewKind::Guarded => rsx! {
            ProtectedRoute { auth: auth.cloned(), location: "/secret".to_string(),
                p { class: "secret", "guarded content" }
            }
        },
    }
}

#[component]
fn Fallback(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        p { class: "landed", "landed on /{path}" }
        Root {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then give pending resources a few chances to resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_pending().await;
    }

    /// Let spawned tasks and effects run without rebuilding.
    pub async fn drive_pending(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, auth: AuthState) -> ViewHarness {
    let catalog = Arc::new(StaticCatalog::default());
    setup_view_harness_with_sources(view, auth, catalog.clone(), catalog)
}

/// Auth starts at `initial` and only moves to `resolved` after the returned
/// `Notify` is signalled.
pub fn setup_deferred_auth_harness(
    view: ViewKind,
    initial: AuthState,
    resolved: AuthState,
) -> (ViewHarness, Arc<Notify>) {
    let release = Arc::new(Notify::new());
    let catalog = Arc::new(StaticCatalog::default());
    let app = TestApp {
        auth: initial,
        resolved,
        release: Some(Arc::clone(&release)),
        profile_completion: DEFAULT_COMPLETION,
        labs: Arc::new(LabService::new(catalog.clone())),
        modules: Arc::new(ModuleService::new(catalog)),
    };
    (mount(app, view), release)
}

pub fn setup_view_harness_with_sources(
    view: ViewKind,
    auth: AuthState,
    labs: Arc<dyn LabsApi>,
    modules: Arc<dyn ModuleSource>,
) -> ViewHarness {
    let app = TestApp {
        resolved: auth.clone(),
        release: None,
        auth,
        profile_completion: DEFAULT_COMPLETION,
        labs: Arc::new(LabService::new(labs)),
        modules: Arc::new(ModuleService::new(modules)),
    };
    mount(app, view)
}

fn mount(app: TestApp, view: ViewKind) -> ViewHarness {
    let props = ViewHarnessProps {
        app: Arc::new(app),
        view,
    };
    let dom = VirtualDom::new_with_props(ViewRouterHarness, props);

    ViewHarness { dom }
}
