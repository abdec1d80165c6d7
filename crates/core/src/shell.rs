//! Session lifecycle of the dashboard shell.
//!
//! A [`ViewRouter`] exists only while a session is active. It is created at
//! the dashboard when a session starts and dropped when the session ends, so
//! nothing about the previous user's navigation survives a logout.

use crate::config::DeniedBehavior;
use crate::host::{resolve_active_page, PageResolution};
use crate::models::{Page, Role, Session};
use crate::router::{Transition, ViewRouter};

/// The three session states the shell distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionStatus {
    Loading,
    Authenticated(Session),
    SignedOut,
}

/// What the shell renders right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView {
    Loading,
    SignedOut,
    Active {
        session: Session,
        current_page: Page,
        page: PageResolution,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    status: SessionStatus,
    router: Option<ViewRouter>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::loading()
    }
}

impl ShellState {
    /// Initial state while the session provider resolves.
    pub fn loading() -> Self {
        Self {
            status: SessionStatus::Loading,
            router: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.status {
            SessionStatus::Authenticated(session) => Some(session),
            SessionStatus::Loading | SessionStatus::SignedOut => None,
        }
    }

    /// The current page, if a session is active.
    pub fn current_page(&self) -> Option<Page> {
        self.router.as_ref().map(ViewRouter::current_page)
    }

    /// The session provider finished its initial lookup.
    pub fn session_resolved(&mut self, session: Option<Session>) {
        match session {
            Some(session) => self.sign_in(session),
            None => self.sign_out(),
        }
    }

    /// Start a session. Always begins at the dashboard, even when
    /// replacing an existing session.
    pub fn sign_in(&mut self, session: Session) {
        tracing::info!(login = %session.login, role = session.role.as_str(), "session started");
        self.router = Some(ViewRouter::new());
        self.status = SessionStatus::Authenticated(session);
    }

    /// End the session and discard its view state.
    pub fn sign_out(&mut self) {
        if let Some(session) = self.session() {
            tracing::info!(login = %session.login, "session ended");
        }
        self.router = None;
        self.status = SessionStatus::SignedOut;
    }

    /// The provider changed the role of the current identity. The current
    /// page is kept; access is re-checked when the page host renders.
    pub fn update_role(&mut self, role: Role) {
        if let SessionStatus::Authenticated(session) = &mut self.status {
            if session.role != role {
                tracing::info!(
                    login = %session.login,
                    from = session.role.as_str(),
                    to = role.as_str(),
                    "session role changed"
                );
                session.role = role;
            }
        }
    }

    /// Forward a transition to the router. `None` when no session is active.
    pub fn request_transition(&mut self, page: Page) -> Option<Transition> {
        self.router.as_mut().map(|router| router.request_transition(page))
    }

    /// Resolve what to render, re-running the access policy.
    pub fn view(&self, on_denied: DeniedBehavior) -> ShellView {
        match (&self.status, &self.router) {
            (SessionStatus::Loading, _) => ShellView::Loading,
            (SessionStatus::Authenticated(session), Some(router)) => {
                let current_page = router.current_page();
                ShellView::Active {
                    session: session.clone(),
                    current_page,
                    page: resolve_active_page(current_page, session.role, on_denied),
                }
            }
            (SessionStatus::Authenticated(_), None) | (SessionStatus::SignedOut, _) => {
                ShellView::SignedOut
            }
        }
    }
}
