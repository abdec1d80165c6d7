use crate::access::is_allowed;
use crate::config::DeniedBehavior;
use crate::models::{Page, Role};

/// What the page host mounts for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResolution {
    Mount(Page),
    /// Denied page under [`DeniedBehavior::Explicit`].
    AccessDenied(Page),
    /// Denied page under [`DeniedBehavior::Silent`].
    Nothing,
}

/// Decide which page region to mount, re-checking the access policy.
///
/// The check runs on every render so a stale page left over from a role
/// downgrade is never shown.
pub fn resolve_active_page(current_page: Page, role: Role, on_denied: DeniedBehavior) -> PageResolution {
    if is_allowed(current_page, role) {
        return PageResolution::Mount(current_page);
    }
    tracing::warn!(
        page = current_page.as_str(),
        role = role.as_str(),
        "refusing to mount restricted page"
    );
    match on_denied {
        DeniedBehavior::Silent => PageResolution::Nothing,
        DeniedBehavior::Explicit => PageResolution::AccessDenied(current_page),
    }
}
