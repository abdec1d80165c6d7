use crate::access::is_allowed;
use crate::config::CompactParity;
use crate::models::{Page, Role};

/// Static descriptor for one navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub page: Page,
    pub label: &'static str,
    pub requires_role: Option<Role>,
    /// Shown in the compact bar under [`CompactParity::Source`].
    pub compact: bool,
}

impl NavigationEntry {
    const fn new(page: Page, label: &'static str, requires_role: Option<Role>, compact: bool) -> Self {
        Self {
            page,
            label,
            requires_role,
            compact,
        }
    }

    /// Active state is derived from the router's page, never stored.
    pub fn is_active(&self, current_page: Page) -> bool {
        self.page == current_page
    }
}

/// Navigation entries in display order.
///
/// `requires_role` mirrors [`Page::required_role`]; the filter itself only
/// ever consults [`is_allowed`].
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry::new(Page::Dashboard, "Обзор", None, true),
    NavigationEntry::new(Page::Statistics, "Статистика", None, true),
    NavigationEntry::new(Page::Reports, "Отчеты", None, true),
    NavigationEntry::new(Page::Users, "Пользователи", Some(Role::Expert), true),
    NavigationEntry::new(Page::Objects, "Объекты", Some(Role::Expert), false),
    NavigationEntry::new(Page::Hardware, "Оборудование", Some(Role::Expert), false),
    NavigationEntry::new(Page::Settings, "Настройки", None, true),
    NavigationEntry::new(Page::Chatbot, "Чат", None, true),
];

/// The two renderings of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLayout {
    Full,
    Compact,
}

impl NavLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavLayout::Full => "full",
            NavLayout::Compact => "compact",
        }
    }
}

/// Look up the navigation entry for a page.
pub fn entry_for(page: Page) -> Option<&'static NavigationEntry> {
    NAVIGATION.iter().find(|entry| entry.page == page)
}

/// Entries of `layout` that `role` may select, in display order.
pub fn visible_entries(
    layout: NavLayout,
    role: Role,
    parity: CompactParity,
) -> Vec<&'static NavigationEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| is_allowed(entry.page, role))
        .filter(|entry| match (layout, parity) {
            (NavLayout::Full, _) | (NavLayout::Compact, CompactParity::Unified) => true,
            (NavLayout::Compact, CompactParity::Source) => entry.compact,
        })
        .collect()
}
