use dioxus::prelude::*;
use hydroatlas_core::{CompactParity, DeniedBehavior, ShellView};
use shared_ui::LoadingScreen;

use crate::login::Login;
use crate::navigation::Navigation;
use crate::page_host::PageHost;
use crate::session::{use_provider, use_shell};

/// Picks loading screen, login or the authenticated layout from the shell
/// state. The access policy is re-run on every render through
/// [`hydroatlas_core::ShellState::view`].
#[component]
pub fn Shell(
    #[props(default)] parity: CompactParity,
    #[props(default)] on_denied: DeniedBehavior,
) -> Element {
    let mut ctx = use_shell();
    let provider = use_provider();
    let view = ctx.shell.read().view(on_denied);

    match view {
        ShellView::Loading => rsx! { LoadingScreen {} },
        ShellView::SignedOut => rsx! { Login {} },
        ShellView::Active {
            session,
            current_page,
            page,
        } => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./layout.css") }
            div { class: "app-shell",
                Navigation {
                    session,
                    current_page,
                    parity,
                    on_select: move |target| {
                        ctx.request_transition(target);
                    },
                    on_logout: move |_| ctx.logout(&provider),
                }
                main { class: "app-main",
                    PageHost { resolution: page }
                }
            }
        },
    }
}
