use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCpu, LdDroplets, LdFileText, LdLayoutDashboard, LdLogOut, LdMessageCircle,
    LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use hydroatlas_core::{visible_entries, CompactParity, NavLayout, Page, Session};
use shared_ui::{
    ActionButton, ActionButtonVariant, NavBar, NavBarBrand, NavBarRow, NavButton, NavLinks,
    NavVariant, UserBadge,
};

pub const BRAND_NAME: &str = "ГидроАтлас";

const LINK_ICON_SIZE: u32 = 12;

fn page_icon(page: Page) -> Element {
    let size = LINK_ICON_SIZE;
    match page {
        Page::Dashboard => rsx! { Icon { icon: LdLayoutDashboard, width: size, height: size } },
        Page::Statistics => rsx! { Icon { icon: LdFileText, width: size, height: size } },
        Page::Reports => rsx! { Icon { icon: LdBookOpen, width: size, height: size } },
        Page::Settings => rsx! { Icon { icon: LdSettings, width: size, height: size } },
        Page::Users => rsx! { Icon { icon: LdUsers, width: size, height: size } },
        Page::Objects => rsx! { Icon { icon: LdDroplets, width: size, height: size } },
        Page::Chatbot => rsx! { Icon { icon: LdMessageCircle, width: size, height: size } },
        Page::Hardware => rsx! { Icon { icon: LdCpu, width: size, height: size } },
    }
}

fn nav_variant(layout: NavLayout) -> NavVariant {
    match layout {
        NavLayout::Full => NavVariant::Full,
        NavLayout::Compact => NavVariant::Compact,
    }
}

/// Top navigation: brand, full link row, user badge, logout, compact strip.
///
/// Receives the session explicitly; both link rows are built from the same
/// filtered entry table.
#[component]
pub fn Navigation(
    session: Session,
    current_page: Page,
    #[props(default)] parity: CompactParity,
    on_select: EventHandler<Page>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        NavBar {
            NavBarRow {
                NavBarBrand {
                    name: BRAND_NAME.to_string(),
                    icon: rsx! { Icon { icon: LdDroplets, width: 28, height: 28 } },
                }
                NavLinkList {
                    layout: NavLayout::Full,
                    session: session.clone(),
                    current_page,
                    parity,
                    on_select,
                }
                div { class: "nav-bar-user",
                    UserBadge {
                        initial: session.initial(),
                        name: session.login.clone(),
                        caption: session.role.display_name().to_string(),
                    }
                    ActionButton {
                        variant: ActionButtonVariant::OnNav,
                        onclick: move |_| on_logout.call(()),
                        Icon { icon: LdLogOut, width: 12, height: 12 }
                        span { class: "nav-bar-logout-label", "Выход" }
                    }
                }
            }
            NavLinkList {
                layout: NavLayout::Compact,
                session: session.clone(),
                current_page,
                parity,
                on_select,
            }
        }
    }
}

/// One rendering of the link list.
#[component]
pub fn NavLinkList(
    layout: NavLayout,
    session: Session,
    current_page: Page,
    parity: CompactParity,
    on_select: EventHandler<Page>,
) -> Element {
    let variant = nav_variant(layout);
    let entries = visible_entries(layout, session.role, parity);

    rsx! {
        NavLinks { variant,
            for entry in entries {
                NavButton {
                    key: "{layout.as_str()}-{entry.page.as_str()}",
                    label: entry.label.to_string(),
                    active: entry.is_active(current_page),
                    variant,
                    icon: page_icon(entry.page),
                    onclick: move |_| on_select.call(entry.page),
                }
            }
        }
    }
}
