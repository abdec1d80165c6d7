use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Role;

/// Whether the compact navigation mirrors the full one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompactParity {
    /// Compact bar drops the role-gated entries marked `compact: false`.
    #[default]
    Source,
    /// Compact bar shows exactly what the full bar shows.
    Unified,
}

/// What the page host renders for a page the session may not see.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeniedBehavior {
    /// Render nothing.
    #[default]
    Silent,
    /// Render an "access denied" notice.
    Explicit,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NavigationConfig {
    #[serde(default)]
    pub compact: CompactParity,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessConfig {
    #[serde(default)]
    pub on_denied: DeniedBehavior,
}

/// A development login accepted by the static session provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountConfig {
    pub login: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// Top-level config file structure matching `hydroatlas.toml`.
///
/// Every field defaults so that a missing or partial file yields the
/// source behavior: asymmetric compact bar, silent denial, no accounts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShellConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub access: AccessConfig,
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

impl ShellConfig {
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        let config: ShellConfig = toml::from_str(contents)?;
        if let Some(account) = config.accounts.iter().find(|a| a.login.trim().is_empty()) {
            return Err(AppError::invalid_config(format!(
                "account with role '{}' has an empty login",
                account.role.as_str()
            )));
        }
        Ok(config)
    }
}
