use serde::{Deserialize, Serialize};

/// Access tier attached to a session.
///
/// - `Guest` — read-only pages only.
/// - `Expert` — additionally unlocks the administrative pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    #[default]
    Guest,
    Expert,
}

impl Role {
    /// Parse the provider's role string. Unknown values default to Guest.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "expert" => Role::Expert,
            _ => Role::Guest,
        }
    }

    /// Lowercase key as sent by the session provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Expert => "expert",
        }
    }

    /// Label shown under the user name in the navigation bar.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Guest => "Гость",
            Role::Expert => "Эксперт",
        }
    }

    /// Returns true if this role satisfies the `required` role.
    pub fn satisfies(&self, required: &Role) -> bool {
        match self {
            Role::Expert => true,
            Role::Guest => matches!(required, Role::Guest),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from_str_or_default(&s)
    }
}

/// The content regions the dashboard can display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Statistics,
    Reports,
    Settings,
    Users,
    Objects,
    Chatbot,
    Hardware,
}

impl Page {
    /// Every page, in declaration order.
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::Statistics,
        Page::Reports,
        Page::Settings,
        Page::Users,
        Page::Objects,
        Page::Chatbot,
        Page::Hardware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Statistics => "statistics",
            Page::Reports => "reports",
            Page::Settings => "settings",
            Page::Users => "users",
            Page::Objects => "objects",
            Page::Chatbot => "chatbot",
            Page::Hardware => "hardware",
        }
    }
}

/// Identity of the signed-in user, as reported by the session provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub login: String,
    #[serde(default)]
    pub role: Role,
}

impl Session {
    pub fn new(login: impl Into<String>, role: Role) -> Self {
        Self {
            login: login.into(),
            role,
        }
    }

    /// Upper-cased first character of the login, for the avatar.
    pub fn initial(&self) -> String {
        self.login
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
