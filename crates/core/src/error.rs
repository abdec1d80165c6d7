use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of shell errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    Unauthorized,
    InvalidConfig,
    SessionUnavailable,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            AppErrorKind::SessionUnavailable => write!(f, "SessionUnavailable"),
        }
    }
}

/// Structured error shared by the core and the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn session_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::SessionUnavailable,
            message: message.into(),
        }
    }

    /// Message suitable for showing next to a form.
    ///
    /// Configuration errors are deployment mistakes; the user only ever
    /// sees a generic message for them.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Unauthorized | AppErrorKind::SessionUnavailable => self.message.clone(),
            AppErrorKind::InvalidConfig => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::invalid_config(err.to_string())
    }
}
