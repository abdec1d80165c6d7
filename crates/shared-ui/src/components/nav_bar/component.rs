use dioxus::prelude::*;

/// Which rendering of the navigation a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NavVariant {
    /// Horizontal row shown on wide viewports.
    #[default]
    Full,
    /// Scrollable strip shown on narrow viewports.
    Compact,
}

impl NavVariant {
    fn class(&self) -> &'static str {
        match self {
            NavVariant::Full => "full",
            NavVariant::Compact => "compact",
        }
    }
}

/// Top navigation bar container.
#[component]
pub fn NavBar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "nav-bar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav {
            ..merged,
            div { class: "nav-bar-inner", {children} }
        }
    }
}

/// One horizontal row of the bar (brand, links, user area).
#[component]
pub fn NavBarRow(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "nav-bar-row", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Logo and product name.
#[component]
pub fn NavBarBrand(name: String, icon: Element) -> Element {
    rsx! {
        div { class: "nav-bar-brand",
            {icon}
            span { class: "nav-bar-brand-name", "{name}" }
        }
    }
}

/// Container for the links of one rendering.
#[component]
pub fn NavLinks(
    #[props(default)] variant: NavVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "nav-links", None, false),
        Attribute::new("data-variant", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// A navigation button. `active` is supplied by the caller on every render.
#[derive(Props, Clone, PartialEq)]
pub struct NavButtonProps {
    pub label: String,
    #[props(default = false)]
    pub active: bool,
    #[props(default)]
    pub variant: NavVariant,
    pub icon: Option<Element>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

#[component]
pub fn NavButton(props: NavButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "nav-button", None, false),
        Attribute::new("data-variant", props.variant.class(), None, false),
        Attribute::new(
            "data-active",
            if props.active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-current": if props.active { "page" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.icon}
            span { class: "nav-button-label", "{props.label}" }
        }
    }
}
