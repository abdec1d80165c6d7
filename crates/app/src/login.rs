use dioxus::prelude::*;
use shared_ui::{ActionButton, Panel};

use crate::navigation::BRAND_NAME;
use crate::session::{use_provider, use_shell};

/// Sign-in form. Shown whenever there is no session; the shell has no
/// router or navigation in that state.
#[component]
pub fn Login() -> Element {
    let mut ctx = use_shell();
    let provider = use_provider();
    let mut login = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);

        match provider.0.login(&login(), &password()) {
            Ok(session) => {
                password.set(String::new());
                ctx.sign_in(session);
            }
            Err(e) => {
                tracing::info!(error = %e, "sign-in rejected");
                error_msg.set(Some(e.friendly_message()));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Panel { title: BRAND_NAME.to_string(), class: "login-card",
                if let Some(err) = error_msg() {
                    div { class: "login-error", "{err}" }
                }
                form { class: "login-form", onsubmit: handle_login,
                    label { class: "login-field",
                        span { "Логин" }
                        input {
                            r#type: "text",
                            name: "login",
                            autocomplete: "username",
                            value: login(),
                            oninput: move |e: FormEvent| login.set(e.value()),
                        }
                    }
                    label { class: "login-field",
                        span { "Пароль" }
                        input {
                            r#type: "password",
                            name: "password",
                            autocomplete: "current-password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    ActionButton { kind: "submit".to_string(), "Войти" }
                }
            }
        }
    }
}
