//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use postboard_config::ConfigError;
use postboard_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the posts API: {message}")]
    #[diagnostic(
        code(postboard::connection_failed),
        help(
            "Check your network connection and the configured URL.\n\
             Try: postboard config show"
        )
    )]
    ConnectionFailed { message: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(postboard::timeout),
        help("Increase the timeout with --timeout or check the API's responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Session ──────────────────────────────────────────────────────
    #[error("Not logged in")]
    #[diagnostic(
        code(postboard::not_logged_in),
        help("Run: postboard login")
    )]
    NotLoggedIn,

    #[error("Invalid username or password")]
    #[diagnostic(code(postboard::login_failed))]
    LoginFailed,

    // ── Resources ────────────────────────────────────────────────────
    #[error("Post {id} not found")]
    #[diagnostic(
        code(postboard::not_found),
        help("Run: postboard posts list to see available posts")
    )]
    NotFound { id: u64 },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error ({status}): {message}")]
    #[diagnostic(code(postboard::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected response from the API: {message}")]
    #[diagnostic(
        code(postboard::malformed_response),
        help("The configured URL may not point at a posts collection.")
    )]
    MalformedResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(postboard::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(postboard::config),
        help("Inspect the file at: {path}")
    )]
    Config { message: String, path: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(postboard::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(postboard::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(postboard::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(postboard::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotLoggedIn | Self::LoginFailed => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transport {
                status: Some(status),
                message,
            } => CliError::ApiError { status, message },

            CoreError::Transport {
                status: None,
                message,
            } => CliError::ConnectionFailed { message },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::NotFound { id } => CliError::NotFound { id },

            CoreError::Decode { message } => CliError::MalformedResponse { message },

            CoreError::Validation { field, reason } => CliError::Validation { field, reason },

            CoreError::Config { message } => CliError::Config {
                message,
                path: postboard_config::config_path().display().to_string(),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
                path: postboard_config::config_path().display().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_exit_codes() {
        let cases = [
            (CoreError::NotFound { id: 1 }, exit_code::NOT_FOUND),
            (CoreError::Timeout { timeout_secs: 5 }, exit_code::TIMEOUT),
            (
                CoreError::Transport {
                    status: None,
                    message: "connection refused".into(),
                },
                exit_code::CONNECTION,
            ),
            (
                CoreError::Transport {
                    status: Some(500),
                    message: "boom".into(),
                },
                exit_code::GENERAL,
            ),
            (
                CoreError::Validation {
                    field: "title".into(),
                    reason: "title is required".into(),
                },
                exit_code::USAGE,
            ),
        ];

        for (core, code) in cases {
            let label = core.to_string();
            assert_eq!(CliError::from(core).exit_code(), code, "{label}");
        }
    }

    #[test]
    fn session_errors_are_auth() {
        assert_eq!(CliError::NotLoggedIn.exit_code(), exit_code::AUTH);
        assert_eq!(CliError::LoginFailed.exit_code(), exit_code::AUTH);
    }
}
