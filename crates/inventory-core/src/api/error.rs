//! API Errors
//!
//! Everything that can go wrong between pressing a button and reading the
//! backend's answer.

use thiserror::Error;

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// The two failure families the UI distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backend answered with `status: false`
    Application,
    /// The request never produced a usable envelope
    Transport,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// `status: false` in an otherwise readable response
    #[error("{}", rejected_text(.message))]
    Rejected { message: Option<String> },
    /// Network failure before any response arrived
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-2xx response without a parseable body
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },
    /// 2xx response whose body is not a valid envelope
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Rejected { .. } => ErrorKind::Application,
            ApiError::Transport(_) | ApiError::Status { .. } | ApiError::Decode(_) => ErrorKind::Transport,
        }
    }

    /// Message supplied by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

fn rejected_text(message: &Option<String>) -> &str {
    message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or("request rejected by server")
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
