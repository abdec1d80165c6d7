use dioxus::prelude::*;

/// Visual tone of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanelTone {
    #[default]
    Neutral,
    Warning,
}

impl PanelTone {
    fn class(&self) -> &'static str {
        match self {
            PanelTone::Neutral => "neutral",
            PanelTone::Warning => "warning",
        }
    }
}

/// Titled content block.
#[component]
pub fn Panel(
    title: String,
    #[props(default)] tone: PanelTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "panel", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            h2 { class: "panel-title", "{title}" }
            div { class: "panel-body", {children} }
        }
    }
}
