use dioxus::prelude::*;

/// Full-screen placeholder shown while the session is being resolved.
#[component]
pub fn LoadingScreen(#[props(default = "Загрузка...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-screen",
            div { class: "loading-screen-pulse" }
            p { class: "loading-screen-message", "{message}" }
        }
    }
}
