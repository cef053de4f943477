use std::sync::Arc;

use lab_core::model::{AuthState, Lab, LabId, LabInstanceStatus, User};
use services::{LabsApi, LabsApiError, StaticCatalog};

use super::test_harness::{
    ViewKind, setup_deferred_auth_harness, setup_view_harness, setup_view_harness_with_sources,
};

fn verified() -> AuthState {
    AuthState::signed_in(User::new("ada@example.com", Some(true)))
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_marketing_sections() {
    let mut harness = setup_view_harness(ViewKind::Home, AuthState::signed_out());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("breaking things"), "missing hero in {html}");
    assert!(html.contains("Why CyberLab"), "missing content section in {html}");
    assert!(html.contains("Hands-on labs"), "missing stats in {html}");
    assert!(
        html.contains("Ready to start your first lab?"),
        "missing cta in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn guard_shows_only_spinner_while_loading() {
    let mut loading = AuthState::loading();
    loading.is_authenticated = true;
    loading.user = Some(User::new("ada@example.com", Some(false)));

    let mut harness = setup_view_harness(ViewKind::Guarded, loading);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Checking your session"), "missing spinner in {html}");
    assert!(!html.contains("guarded content"), "children leaked in {html}");
    assert!(!html.contains("verification-warning"), "redirected early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guard_swaps_spinner_for_children_once_auth_resolves() {
    let (mut harness, release) =
        setup_deferred_auth_harness(ViewKind::Dashboard, AuthState::loading(), verified());
    harness.rebuild();
    harness.drive_pending().await;
    let html = harness.render();

    assert!(html.contains("Checking your session"), "missing spinner in {html}");
    assert!(!html.contains("Welcome back"), "children leaked in {html}");

    release.notify_one();
    harness.drive_pending().await;
    let html = harness.render();

    assert!(!html.contains("Checking your session"), "spinner stuck in {html}");
    assert!(html.contains("Welcome back, ada@example.com"), "missing greeting in {html}");
    assert!(html.contains("45%"), "missing percentage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn redirect_follows_a_changed_target() {
    let unverified = AuthState::signed_in(User::new("ada@example.com", Some(false)));
    let (mut harness, release) =
        setup_deferred_auth_harness(ViewKind::Guarded, AuthState::signed_out(), unverified);
    harness.rebuild();
    harness.drive_pending().await;
    let html = harness.render();

    assert!(html.contains("landed on /login"), "no login navigation in {html}");

    release.notify_one();
    harness.drive_pending().await;
    let html = harness.render();

    assert!(
        html.contains("landed on /verification-warning"),
        "redirect did not follow the new target in {html}"
    );
    assert!(!html.contains("guarded content"), "children leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guard_redirects_signed_out_users_to_login() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, AuthState::signed_out());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("/login?from=%2Fdashboard"),
        "missing login target in {html}"
    );
    assert!(!html.contains("Complete your profile"), "children leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guard_redirects_unverified_users_with_email() {
    let auth = AuthState::signed_in(User::new("ada@example.com", Some(false)));
    let mut harness = setup_view_harness(ViewKind::Guarded, auth);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("/verification-warning?email=ada%40example.com"),
        "missing verification target in {html}"
    );
    assert!(!html.contains("guarded content"), "children leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guard_renders_children_when_user_is_missing() {
    let auth = AuthState {
        is_authenticated: true,
        is_loading: false,
        user: None,
    };
    let mut harness = setup_view_harness(ViewKind::Guarded, auth);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains(r#"<p class="secret">guarded content</p>"#),
        "missing children in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_widgets() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, verified());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Welcome back, ada@example.com"), "missing greeting in {html}");
    assert!(html.contains("45%"), "missing percentage in {html}");
    assert!(html.contains("2 of 5 tasks complete"), "missing summary in {html}");
    assert!(html.contains("SQL Injection Basics"), "missing lab in {html}");
    assert!(html.contains("Web Application Attacks"), "missing module in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_renders_markdown_and_labs() {
    let mut harness = setup_view_harness(ViewKind::Module(1), verified());
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("<h1>Web Application Attacks</h1>"),
        "missing rendered markdown in {html}"
    );
    assert!(html.contains("Labs in this module"), "missing labs header in {html}");
    assert!(html.contains("Reflected XSS Hunt"), "missing module lab in {html}");
    assert!(!html.contains("Packet Capture Forensics"), "foreign lab in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Module(99), verified());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Module not found"), "missing not found in {html}");
}

struct FailingLabsApi;

#[async_trait::async_trait]
impl LabsApi for FailingLabsApi {
    async fn list_labs(&self) -> Result<Vec<Lab>, LabsApiError> {
        Err(LabsApiError::NotConfigured)
    }

    async fn get_lab(&self, _id: LabId) -> Result<Lab, LabsApiError> {
        Err(LabsApiError::NotConfigured)
    }

    async fn start_lab(&self, _id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        Err(LabsApiError::NotConfigured)
    }

    async fn lab_status(&self, _id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        Err(LabsApiError::NotConfigured)
    }

    async fn stop_lab(&self, _id: LabId) -> Result<LabInstanceStatus, LabsApiError> {
        Err(LabsApiError::NotConfigured)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_lab_error_state() {
    let mut harness = setup_view_harness_with_sources(
        ViewKind::Dashboard,
        verified(),
        Arc::new(FailingLabsApi),
        Arc::new(StaticCatalog::default()),
    );
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Complete your profile"), "profile widget missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_and_verification_pages_echo_their_query() {
    let mut login = setup_view_harness(ViewKind::Login("/dashboard".into()), AuthState::signed_out());
    login.rebuild();
    let html = login.render();
    assert!(html.contains("sent back to /dashboard"), "missing return path in {html}");

    let mut warning = setup_view_harness(
        ViewKind::Verification("ada@example.com".into()),
        AuthState::signed_out(),
    );
    warning.rebuild();
    let html = warning.render();
    assert!(html.contains("ada@example.com"), "missing email in {html}");
}
