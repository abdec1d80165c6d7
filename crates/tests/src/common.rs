use dioxus::prelude::*;
use hydroatlas::session::{ProviderHandle, ShellContext, StaticSessionProvider};
use hydroatlas::shell::Shell;
use hydroatlas_core::{CompactParity, DeniedBehavior, Page, Role, Session, ShellState};

pub fn expert() -> Session {
    Session::new("marina", Role::Expert)
}

pub fn guest() -> Session {
    Session::new("oleg", Role::Guest)
}

/// A shell state with `session` signed in and positioned on `page`.
pub fn active_on(session: Session, page: Page) -> ShellState {
    let mut state = ShellState::loading();
    state.sign_in(session);
    state.request_transition(page);
    state
}

#[derive(Props, Clone, PartialEq)]
pub struct ShellHarnessProps {
    pub state: ShellState,
    pub parity: CompactParity,
    pub on_denied: DeniedBehavior,
}

/// Provides the contexts `App` would, seeded with a fixed state.
#[component]
pub fn ShellHarness(props: ShellHarnessProps) -> Element {
    use_context_provider(|| ProviderHandle::new(StaticSessionProvider::default()));
    let state = props.state.clone();
    use_context_provider(move || ShellContext::with_state(state));

    rsx! {
        Shell { parity: props.parity, on_denied: props.on_denied }
    }
}

pub fn render_shell(state: ShellState, parity: CompactParity, on_denied: DeniedBehavior) -> String {
    let mut dom = VirtualDom::new_with_props(
        ShellHarness,
        ShellHarnessProps {
            state,
            parity,
            on_denied,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render with the default configuration.
pub fn render_default(state: ShellState) -> String {
    render_shell(state, CompactParity::default(), DeniedBehavior::default())
}

/// The HTML of the link list with the given `data-variant`, up to the
/// next link list.
pub fn link_list<'a>(html: &'a str, variant: &str) -> &'a str {
    let marker = format!(r#"data-variant="{variant}""#);
    let starts: Vec<usize> = html
        .match_indices(r#"class="nav-links""#)
        .map(|(i, _)| i)
        .collect();
    for (n, &start) in starts.iter().enumerate() {
        let tag_start = html[..start].rfind('<').unwrap_or(start);
        let tag_end = start + html[start..].find('>').unwrap_or(0);
        if html[tag_start..tag_end].contains(&marker) {
            let end = starts.get(n + 1).copied().unwrap_or(html.len());
            return &html[tag_start..end];
        }
    }
    panic!("no {variant} link list in {html}");
}

/// Labels of the buttons in a link list, in document order.
pub fn labels(list_html: &str) -> Vec<String> {
    list_html
        .split(r#"<span class="nav-button-label">"#)
        .skip(1)
        .filter_map(|chunk| chunk.split("</span>").next())
        .map(str::to_string)
        .collect()
}
