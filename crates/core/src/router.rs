use crate::models::Page;

/// Result of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed { from: Page, to: Page },
    Unchanged,
}

/// Holds the current page of one session.
///
/// The router never rejects a transition and knows nothing about roles;
/// the navigation filter and the page host apply the access policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewRouter {
    current_page: Page,
}

impl ViewRouter {
    /// A fresh router, positioned on the dashboard.
    pub fn new() -> Self {
        Self {
            current_page: Page::Dashboard,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn request_transition(&mut self, target: Page) -> Transition {
        if self.current_page == target {
            return Transition::Unchanged;
        }
        let from = std::mem::replace(&mut self.current_page, target);
        tracing::debug!(from = from.as_str(), to = target.as_str(), "page transition");
        Transition::Changed { from, to: target }
    }
}
