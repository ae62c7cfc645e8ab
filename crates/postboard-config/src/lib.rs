//! Configuration for the postboard CLI.
//!
//! One TOML file (API endpoint, output defaults, session flag) merged with
//! `POSTBOARD_`-prefixed environment variables, and translation to
//! `postboard_core::ClientConfig`. The CLI layers its flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use postboard_core::{ClientConfig, DEFAULT_API_URL};

/// Environment variable that points at an alternate config file.
pub const CONFIG_PATH_ENV: &str = "POSTBOARD_CONFIG";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub session: Session,
}

/// Where the post collection lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Collection URL; items live at `{url}/{id}`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

/// Login state. Set by `postboard login`, cleared by `postboard logout`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Session {
    #[serde(default)]
    pub authenticated: bool,
}

fn default_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

impl Config {
    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.session.authenticated = authenticated;
    }

    /// Resolve the `[api]` section into the core's connection settings.
    pub fn to_client_config(&self) -> Result<ClientConfig, ConfigError> {
        if self.api.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "api.timeout".into(),
                reason: "timeout must be at least 1 second".into(),
            });
        }
        ClientConfig::new(&self.api.url, Duration::from_secs(self.api.timeout)).map_err(|e| {
            ConfigError::Validation {
                field: "api.url".into(),
                reason: e.to_string(),
            }
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `$POSTBOARD_CONFIG` if set, otherwise the
/// platform config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("com", "postboard", "postboard").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("postboard");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path + environment. A missing file yields
/// defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path)
        .merge(Env::prefixed("POSTBOARD_").split("_"))
        .extract()?;
    Ok(config)
}

/// Load config, returning a default if it can't be read. Read-only callers
/// only; never save the result.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Load the canonical file without environment overrides.
///
/// Use this before `save_config`, so a one-off `POSTBOARD_*` variable is
/// not persisted and a broken file is reported instead of overwritten.
pub fn load_file_config() -> Result<Config, ConfigError> {
    load_file_config_from(&config_path())
}

pub fn load_file_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path).extract()?;
    Ok(config)
}

fn file_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(cfg.api.url, DEFAULT_API_URL);
        assert_eq!(cfg.api.timeout, 30);
        assert_eq!(cfg.defaults.output, "table");
        assert!(!cfg.is_authenticated());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nurl = \"http://localhost:3000/posts\"\n").unwrap();

        let cfg = load_config_from(&path).unwrap();

        assert_eq!(cfg.api.url, "http://localhost:3000/posts");
        assert_eq!(cfg.api.timeout, 30);
        assert_eq!(cfg.defaults.color, "auto");
    }

    #[test]
    fn save_then_load_keeps_session_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.set_authenticated(true);
        cfg.defaults.output = "json".into();

        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert!(loaded.is_authenticated());
        assert_eq!(loaded.defaults.output, "json");
    }

    #[test]
    fn file_loader_reports_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let broken = "[api]\nurl = \"http://my.host:8080/posts\"\ntimeout = \"thirty\"\n";
        std::fs::write(&path, broken).unwrap();

        let err = load_file_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
    }

    #[test]
    fn file_loader_round_trips_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.api.url = "http://my.host:8080/posts".into();
        cfg.set_authenticated(true);
        save_config_to(&cfg, &path).unwrap();

        assert_eq!(load_file_config_from(&path).unwrap(), cfg);
    }

    #[test]
    fn client_config_from_api_section() {
        let mut cfg = Config::default();
        cfg.api.url = "http://127.0.0.1:8080/posts".into();
        cfg.api.timeout = 5;

        let client = cfg.to_client_config().unwrap();

        assert_eq!(client.url.as_str(), "http://127.0.0.1:8080/posts");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_url_is_validation_error() {
        let mut cfg = Config::default();
        cfg.api.url = "nope".into();
        let err = cfg.to_client_config().unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "api.url"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut cfg = Config::default();
        cfg.api.timeout = 0;
        assert!(cfg.to_client_config().is_err());
    }
}
