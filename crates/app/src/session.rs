use dioxus::prelude::*;
use hydroatlas_core::{
    AccountConfig, AppError, Page, Role, Session, ShellConfig, ShellState, Transition,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked with the new role of the signed-in identity.
pub type RoleWatcher = Rc<dyn Fn(Role)>;

/// Source of the signed-in identity.
///
/// The real backend lives outside this repository; the shell only needs
/// these calls.
pub trait SessionProvider {
    /// Look up an existing session at startup.
    fn restore(&self) -> Result<Option<Session>, AppError>;
    fn login(&self, login: &str, password: &str) -> Result<Session, AppError>;
    fn logout(&self, session: &Session);
    /// Be told when the role of the signed-in identity changes.
    fn watch_role(&self, watcher: RoleWatcher);
}

/// In-memory provider backed by the `[[accounts]]` config section.
///
/// Development stand-in: nothing is persisted, so `restore` never finds a
/// session. Clones share their state.
#[derive(Clone, Default)]
pub struct StaticSessionProvider {
    accounts: Rc<RefCell<Vec<AccountConfig>>>,
    signed_in: Rc<RefCell<Option<String>>>,
    watchers: Rc<RefCell<Vec<RoleWatcher>>>,
}

impl StaticSessionProvider {
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            accounts: Rc::new(RefCell::new(config.accounts.clone())),
            ..Self::default()
        }
    }

    /// Change the role of an account, as an administrator would on the
    /// backend. Watchers are notified when it is the signed-in account.
    pub fn set_role(&self, login: &str, role: Role) {
        let changed = self
            .accounts
            .borrow_mut()
            .iter_mut()
            .find(|account| account.login == login)
            .map(|account| account.role = role)
            .is_some();
        if !changed {
            tracing::warn!(%login, "role change for unknown account");
            return;
        }
        if self.signed_in.borrow().as_deref() != Some(login) {
            return;
        }
        let watchers = self.watchers.borrow().clone();
        for watcher in watchers {
            watcher(role);
        }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn restore(&self) -> Result<Option<Session>, AppError> {
        Ok(None)
    }

    fn login(&self, login: &str, password: &str) -> Result<Session, AppError> {
        let accounts = self.accounts.borrow();
        if accounts.is_empty() {
            return Err(AppError::session_unavailable(
                "Вход недоступен: учетные записи не настроены",
            ));
        }
        let login = login.trim();
        let session = accounts
            .iter()
            .find(|account| account.login == login && account.password == password)
            .map(|account| Session::new(account.login.clone(), account.role))
            .ok_or_else(|| AppError::unauthorized("Неверный логин или пароль"))?;
        *self.signed_in.borrow_mut() = Some(session.login.clone());
        Ok(session)
    }

    fn logout(&self, session: &Session) {
        tracing::debug!(login = %session.login, "static provider logout");
        self.signed_in.borrow_mut().take();
    }

    fn watch_role(&self, watcher: RoleWatcher) {
        self.watchers.borrow_mut().push(watcher);
    }
}

/// Session provider shared through context.
#[derive(Clone)]
pub struct ProviderHandle(pub Rc<dyn SessionProvider>);

impl ProviderHandle {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }
}

/// Hook to access the session provider.
pub fn use_provider() -> ProviderHandle {
    use_context::<ProviderHandle>()
}

/// Shell state shared by the whole tree.
///
/// Every mutation goes through [`ShellState`], which owns the rule that a
/// view router lives exactly as long as its session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellContext {
    pub shell: Signal<ShellState>,
}

impl ShellContext {
    pub fn new() -> Self {
        Self::with_state(ShellState::loading())
    }

    pub fn with_state(state: ShellState) -> Self {
        Self {
            shell: Signal::new(state),
        }
    }

    pub fn session_resolved(&mut self, session: Option<Session>) {
        self.shell.write().session_resolved(session);
    }

    pub fn sign_in(&mut self, session: Session) {
        self.shell.write().sign_in(session);
    }

    pub fn update_role(&mut self, role: Role) {
        self.shell.write().update_role(role);
    }

    /// Tell the provider and drop the session together with its view state.
    pub fn logout(&mut self, provider: &ProviderHandle) {
        if let Some(session) = self.shell.peek().session() {
            provider.0.logout(session);
        }
        self.shell.write().sign_out();
    }

    /// Select a page. Re-selecting the current page does not touch the
    /// signal, so nothing re-renders or remounts.
    pub fn request_transition(&mut self, page: Page) -> Option<Transition> {
        if self.shell.peek().current_page() == Some(page) {
            return Some(Transition::Unchanged);
        }
        self.shell.write().request_transition(page)
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the shell state.
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>()
}

/// Forward role changes from the provider to the shell. The current page is
/// kept and re-checked on the next render.
pub fn use_role_watch() {
    let ctx = use_shell();
    let provider = use_provider();
    use_hook(move || {
        provider.0.watch_role(Rc::new(move |role| {
            let mut ctx = ctx;
            ctx.update_role(role);
        }));
    });
}

/// Resolve the initial session in the background.
///
/// The shell shows the loading screen until this completes.
pub fn use_session_restore() {
    let mut ctx = use_shell();
    let provider = use_provider();
    use_hook(move || {
        spawn(async move {
            let session = provider.0.restore().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "session restore failed, treating as signed out");
                None
            });
            ctx.session_resolved(session);
        });
    });
}
