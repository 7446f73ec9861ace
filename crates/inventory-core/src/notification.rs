//! User-facing notifications
//!
//! Every outcome the user needs to hear about becomes one of these; the UI
//! renders it as a modal.

use crate::api::{ApiError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub text: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>, text: Option<String>) -> Self {
        Self { level: Level::Success, title: title.into(), text }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { level: Level::Error, title: title.into(), text: Some(text.into()) }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// Error notification preferring the server's message over `fallback`
    ///
    /// Transport failures get their own title since there is no server text.
    pub fn from_api_error(err: &ApiError, rejected_title: &str, fallback: &str) -> Self {
        match err.kind() {
            ErrorKind::Application => {
                Self::error(rejected_title, err.server_message().unwrap_or(fallback))
            }
            ErrorKind::Transport => Self::error("An error occurred", fallback),
        }
    }
}
