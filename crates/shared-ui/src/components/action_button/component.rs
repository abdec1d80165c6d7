use dioxus::prelude::*;

/// Visual variant for action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActionButtonVariant {
    #[default]
    Primary,
    /// Darker button used on the navigation bar.
    OnNav,
}

impl ActionButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ActionButtonVariant::Primary => "primary",
            ActionButtonVariant::OnNav => "on-nav",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ActionButtonProps {
    #[props(default)]
    pub variant: ActionButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = "button".to_string())]
    pub kind: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Button for standalone actions (sign in, sign out).
#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "action-button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.kind}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
