use dioxus::prelude::*;
use hydroatlas_core::{entry_for, Page, PageResolution};
use shared_ui::{Panel, PanelTone};

use crate::pages::{
    ChatbotPage, DashboardPage, HardwarePage, ObjectsPage, ReportsPage, SettingsPage,
    StatisticsPage, UsersPage,
};

/// Mounts the single page region chosen by the access check.
///
/// `resolution` comes from [`hydroatlas_core::resolve_active_page`]; this
/// component only maps it to a page body. Switching pages swaps the
/// component, so the previous page is unmounted.
#[component]
pub fn PageHost(resolution: PageResolution) -> Element {
    match resolution {
        PageResolution::Mount(page) => rsx! {
            div { class: "page-host", "data-mounted": page.as_str(),
                {mount(page)}
            }
        },
        PageResolution::AccessDenied(page) => rsx! {
            div { class: "page-host",
                AccessDenied { page }
            }
        },
        PageResolution::Nothing => rsx! {
            div { class: "page-host" }
        },
    }
}

fn mount(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { DashboardPage {} },
        Page::Statistics => rsx! { StatisticsPage {} },
        Page::Reports => rsx! { ReportsPage {} },
        Page::Settings => rsx! { SettingsPage {} },
        Page::Users => rsx! { UsersPage {} },
        Page::Objects => rsx! { ObjectsPage {} },
        Page::Chatbot => rsx! { ChatbotPage {} },
        Page::Hardware => rsx! { HardwarePage {} },
    }
}

#[component]
fn AccessDenied(page: Page) -> Element {
    let label = entry_for(page).map(|entry| entry.label).unwrap_or(page.as_str());

    rsx! {
        Panel { title: "Доступ запрещён".to_string(), tone: PanelTone::Warning,
            p { class: "access-denied-message",
                "Раздел «{label}» доступен только эксперту."
            }
        }
    }
}
