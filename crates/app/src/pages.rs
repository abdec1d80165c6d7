//! Placeholder page bodies.
//!
//! Each page is self-contained and takes no parameters from the shell. The
//! real pages fetch their own data from their own services.

use dioxus::prelude::*;
use shared_ui::Panel;

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        Panel { title: "Обзор".to_string(),
            p { "Сводка по водным объектам и последним измерениям." }
        }
    }
}

#[component]
pub fn StatisticsPage() -> Element {
    rsx! {
        Panel { title: "Статистика".to_string(),
            p { "Статистика наблюдений за выбранный период." }
        }
    }
}

#[component]
pub fn ReportsPage() -> Element {
    rsx! {
        Panel { title: "Отчеты".to_string(),
            p { "Сформированные отчеты и выгрузки." }
        }
    }
}

#[component]
pub fn SettingsPage() -> Element {
    rsx! {
        Panel { title: "Настройки".to_string(),
            p { "Параметры учетной записи и отображения." }
        }
    }
}

#[component]
pub fn UsersPage() -> Element {
    rsx! {
        Panel { title: "Пользователи".to_string(),
            p { "Управление учетными записями и ролями." }
        }
    }
}

#[component]
pub fn ObjectsPage() -> Element {
    rsx! {
        Panel { title: "Объекты".to_string(),
            p { "Реестр гидрологических объектов." }
        }
    }
}

#[component]
pub fn ChatbotPage() -> Element {
    rsx! {
        Panel { title: "Чат".to_string(),
            p { "Ассистент по данным мониторинга." }
        }
    }
}

#[component]
pub fn HardwarePage() -> Element {
    rsx! {
        Panel { title: "Оборудование".to_string(),
            p { "Состояние датчиков и станций." }
        }
    }
}
