use dioxus::prelude::*;

/// Avatar initial with the user's name and a caption (usually the role).
#[component]
pub fn UserBadge(
    initial: String,
    name: String,
    caption: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "user-badge", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "user-badge-avatar", "{initial}" }
            div { class: "user-badge-text",
                p { class: "user-badge-name", "{name}" }
                p { class: "user-badge-caption", "{caption}" }
            }
        }
    }
}
