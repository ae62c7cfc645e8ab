use thiserror::Error;

/// Top-level error type for the `postboard-api` crate.
///
/// Every failed exchange with the remote resource ends up as one of these.
/// `postboard-core` flattens them into its own tagged `CoreError`.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The underlying `reqwest::Client` could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    // ── Remote resource ─────────────────────────────────────────────
    /// Non-2xx response. `message` comes from the error payload when the
    /// server sent one, otherwise the status line.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// `GET /{id}` found no matching record.
    #[error("Post {id} not found")]
    NotFound { id: u64 },

    // ── Data ────────────────────────────────────────────────────────
    /// Response body did not match the post schema, with the raw body for debugging.
    #[error("Decode error: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Http { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this is a transient error worth re-issuing.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_reports_404() {
        let err = Error::NotFound { id: 7 };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Post 7 not found");
    }

    #[test]
    fn http_404_is_not_found() {
        let err = Error::Http {
            status: 404,
            message: "404 Not Found".into(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }

    #[test]
    fn server_errors_are_transient() {
        let err = Error::Http {
            status: 503,
            message: "unavailable".into(),
        };
        assert!(err.is_transient());
        assert!(Error::Timeout { timeout_secs: 5 }.is_transient());
        assert!(
            !Error::Decode {
                message: "bad".into(),
                body: String::new()
            }
            .is_transient()
        );
    }
}
