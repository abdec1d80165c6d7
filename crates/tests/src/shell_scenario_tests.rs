use dioxus::prelude::*;
use hydroatlas::session::{
    use_role_watch, use_shell, ProviderHandle, SessionProvider, ShellContext,
    StaticSessionProvider,
};
use hydroatlas::shell::Shell;
use hydroatlas_core::{Page, Role, ShellConfig, ShellState, Transition};
use pretty_assertions::assert_eq;
use std::cell::Cell;

use crate::common::*;

#[test]
fn loading_shows_placeholder_without_navigation() {
    let html = render_default(ShellState::loading());
    assert!(html.contains("Загрузка..."));
    assert!(!html.contains("nav-links"));
    assert!(!html.contains("page-host"));
}

#[test]
fn signed_out_shows_login_without_navigation() {
    let mut state = ShellState::loading();
    state.session_resolved(None);
    let html = render_default(state);
    assert!(html.contains("login-form"));
    assert!(!html.contains("nav-links"));
    assert!(!html.contains("page-host"));
}

#[test]
fn new_session_lands_on_dashboard() {
    let mut state = ShellState::loading();
    state.session_resolved(Some(guest()));
    let html = render_default(state);
    assert!(html.contains(r#"data-mounted="dashboard""#));
}

#[test]
fn logout_and_login_again_starts_on_dashboard() {
    let mut state = active_on(expert(), Page::Hardware);
    state.sign_out();
    state.sign_in(expert());
    let html = render_default(state);
    assert!(html.contains(r#"data-mounted="dashboard""#));
}

#[test]
fn role_downgrade_hides_page_without_new_transition() {
    let mut state = active_on(expert(), Page::Hardware);
    assert!(render_default(state.clone()).contains(r#"data-mounted="hardware""#));

    state.update_role(Role::Guest);
    assert_eq!(state.current_page(), Some(Page::Hardware));
    let html = render_default(state);
    assert!(!html.contains("data-mounted="));
    assert!(!html.contains("Оборудование"));
}

#[test]
fn guest_forced_to_users_keeps_page_but_mounts_nothing() {
    let state = active_on(guest(), Page::Users);
    assert_eq!(state.current_page(), Some(Page::Users));
    let html = render_default(state);
    assert!(!html.contains("data-mounted="));
    assert!(!html.contains("Пользователи"));
}

// -- role change pushed by the provider --

fn marina_account() -> ShellConfig {
    ShellConfig::from_toml(
        r#"
        [[accounts]]
        login = "marina"
        password = "pw"
        role = "expert"
        "#,
    )
    .unwrap()
}

/// Signs marina in through the provider, opens hardware, then optionally
/// has the provider demote her.
#[component]
fn RoleChangeHarness(downgrade: bool) -> Element {
    let provider = use_hook(|| StaticSessionProvider::from_config(&marina_account()));
    let handle = provider.clone();
    use_context_provider(move || ProviderHandle::new(handle));
    let mut ctx = use_context_provider(ShellContext::new);
    use_role_watch();
    use_hook(move || {
        let session = provider.login("marina", "pw").unwrap();
        ctx.sign_in(session);
        ctx.request_transition(Page::Hardware);
        if downgrade {
            provider.set_role("marina", Role::Guest);
        }
    });
    let page = ctx.shell.peek().current_page();

    rsx! {
        p { id: "page", "{page:?}" }
        Shell {}
    }
}

fn render_role_change(downgrade: bool) -> String {
    let mut dom = VirtualDom::new_with_props(RoleChangeHarness, RoleChangeHarnessProps { downgrade });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn provider_role_change_reaches_the_page_host() {
    let before = render_role_change(false);
    assert!(before.contains(r#"data-mounted="hardware""#));

    let after = render_role_change(true);
    assert!(after.contains("Some(Hardware)"));
    assert!(!after.contains("data-mounted="));
    assert!(!after.contains("Оборудование"));
    assert!(after.contains("Гость"));
}

// -- repeated selection --

thread_local! {
    static SHELL_RENDERS: Cell<usize> = const { Cell::new(0) };
    static SELECTION_CTX: Cell<Option<ShellContext>> = const { Cell::new(None) };
}

/// Subscribes to the shell state like `Shell` does and counts its renders.
#[component]
fn CountedShell() -> Element {
    let ctx = use_shell();
    let _ = ctx.shell.read().current_page();
    SHELL_RENDERS.with(|n| n.set(n.get() + 1));

    rsx! { Shell {} }
}

#[component]
fn SelectionHarness() -> Element {
    use_context_provider(|| ProviderHandle::new(StaticSessionProvider::default()));
    let ctx = use_context_provider(|| {
        let mut state = ShellState::loading();
        state.sign_in(guest());
        ShellContext::with_state(state)
    });
    SELECTION_CTX.with(|slot| slot.set(Some(ctx)));

    rsx! { CountedShell {} }
}

fn select(dom: &mut VirtualDom, page: Page) -> Option<Transition> {
    let mut ctx = SELECTION_CTX.with(Cell::get).expect("harness rendered");
    let outcome = dom.in_runtime(|| ctx.request_transition(page));
    dom.process_events();
    dom.render_immediate_to_vec();
    outcome
}

fn shell_renders() -> usize {
    SHELL_RENDERS.with(Cell::get)
}

#[test]
fn repeated_selection_is_a_no_op() {
    let mut dom = VirtualDom::new(SelectionHarness);
    dom.rebuild_in_place();
    assert_eq!(shell_renders(), 1);

    assert_eq!(
        select(&mut dom, Page::Reports),
        Some(Transition::Changed {
            from: Page::Dashboard,
            to: Page::Reports,
        })
    );
    assert_eq!(shell_renders(), 2);
    assert!(dioxus_ssr::render(&dom).contains(r#"data-mounted="reports""#));

    assert_eq!(select(&mut dom, Page::Reports), Some(Transition::Unchanged));
    assert_eq!(shell_renders(), 2);
    assert!(dioxus_ssr::render(&dom).contains(r#"data-mounted="reports""#));
}
