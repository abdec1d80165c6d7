//! Page access policy.
//!
//! [`is_allowed`] is the only place that decides whether a role may see a
//! page. The navigation filter and the page host both call it.

use crate::models::{Page, Role};

impl Page {
    /// The role a session needs to open this page, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Page::Users | Page::Objects | Page::Hardware => Some(Role::Expert),
            Page::Dashboard
            | Page::Statistics
            | Page::Reports
            | Page::Settings
            | Page::Chatbot => None,
        }
    }

    /// True when the page is restricted to a role above guest.
    pub fn is_restricted(&self) -> bool {
        self.required_role().is_some()
    }
}

/// Returns true if `role` may see `page`.
pub fn is_allowed(page: Page, role: Role) -> bool {
    match page.required_role() {
        Some(required) => role.satisfies(&required),
        None => true,
    }
}
