use dioxus::prelude::*;

pub mod config;
pub mod login;
pub mod navigation;
pub mod page_host;
pub mod pages;
pub mod session;
pub mod shell;

use session::{
    use_role_watch, use_session_restore, ProviderHandle, ShellContext, StaticSessionProvider,
};
use shell::Shell;

/// Root component: provides the session provider and shell state, starts
/// resolving the session and listens for role changes.
#[component]
pub fn App() -> Element {
    let config = config::shell_config();

    use_context_provider(|| ProviderHandle::new(StaticSessionProvider::from_config(config)));
    use_context_provider(ShellContext::new);
    use_session_restore();
    use_role_watch();

    rsx! {
        Shell {
            parity: config.navigation.compact,
            on_denied: config.access.on_denied,
        }
    }
}
