// ── Core error types ──
//
// What views see. These are cheap to clone because the store keeps the
// last one in its snapshot. The `From<postboard_api::Error>` impl flattens
// transport-layer detail (reqwest errors, raw bodies) into messages.

use thiserror::Error;

/// Discriminant of a [`CoreError`], for views that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    Transport,
    Timeout,
    NotFound,
    Decode,
    Validation,
    Config,
}

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Remote ───────────────────────────────────────────────────────
    /// Network failure or non-2xx response.
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Post {id} not found")]
    NotFound { id: u64 },

    /// The response did not match the post schema.
    #[error("Malformed response: {message}")]
    Decode { message: String },

    // ── Caller-side ──────────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<postboard_api::Error> for CoreError {
    fn from(err: postboard_api::Error) -> Self {
        match err {
            postboard_api::Error::Transport(e) => CoreError::Transport {
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            },
            postboard_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            postboard_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid URL: {e}"),
            },
            postboard_api::Error::Client(message) => CoreError::Config { message },
            postboard_api::Error::Http { status, message } => CoreError::Transport {
                status: Some(status),
                message,
            },
            postboard_api::Error::NotFound { id } => CoreError::NotFound { id },
            postboard_api::Error::Decode { message, body: _ } => CoreError::Decode { message },
        }
    }
}
