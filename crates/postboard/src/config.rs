//! CLI configuration: thin wrapper around `postboard_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--api-url, --timeout, --output, --color).

use clap::ValueEnum;

use postboard_core::ClientConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use postboard_config::{
    Config, config_path, load_config, load_config_or_default, load_file_config, save_config,
};

// ── Resolved presentation settings ──────────────────────────────────

/// Flags merged over `[defaults]`, handed to every command handler.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub yes: bool,
}

/// Resolve output/color/quiet/yes (flag > config > built-in default).
pub fn resolve_settings(global: &GlobalOpts, cfg: &Config) -> Result<Settings, CliError> {
    let output = match global.output {
        Some(format) => format,
        None => parse_choice::<OutputFormat>("defaults.output", &cfg.defaults.output)?,
    };
    let color = match global.color {
        Some(mode) => mode,
        None => parse_choice::<ColorMode>("defaults.color", &cfg.defaults.color)?,
    };

    Ok(Settings {
        output,
        color: crate::output::should_color(color),
        quiet: global.quiet,
        yes: global.yes,
    })
}

/// Translate `[api]` + global flags into the core's `ClientConfig`.
///
/// CLI flag overrides take priority over config values.
pub fn resolve_client_config(global: &GlobalOpts, cfg: &Config) -> Result<ClientConfig, CliError> {
    let mut api = cfg.clone();
    if let Some(ref url) = global.api_url {
        api.api.url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        api.api.timeout = timeout;
    }
    let client = api.to_client_config()?;
    tracing::debug!(url = %client.url, timeout = ?client.timeout, "resolved API endpoint");
    Ok(client)
}

fn parse_choice<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("unrecognized value '{raw}'"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["postboard"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["posts", "users"]);
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = Config::default();
        cfg.defaults.output = "yaml".into();

        let settings = resolve_settings(&global(&["-o", "json", "--color", "never"]), &cfg).unwrap();
        assert_eq!(settings.output, OutputFormat::Json);
        assert!(!settings.color);

        let client = resolve_client_config(
            &global(&["--api-url", "http://localhost:1/posts", "--timeout", "3"]),
            &cfg,
        )
        .unwrap();
        assert_eq!(client.url.as_str(), "http://localhost:1/posts");
        assert_eq!(client.timeout, Duration::from_secs(3));
    }

    #[test]
    fn config_defaults_apply_without_flags() {
        let mut cfg = Config::default();
        cfg.defaults.output = "json-compact".into();
        cfg.defaults.color = "never".into();

        let settings = resolve_settings(&global(&[]), &cfg).unwrap();
        assert_eq!(settings.output, OutputFormat::JsonCompact);
        assert!(!settings.color);
    }

    #[test]
    fn unknown_config_output_is_rejected() {
        let mut cfg = Config::default();
        cfg.defaults.output = "xml".into();
        assert!(matches!(
            resolve_settings(&global(&[]), &cfg),
            Err(CliError::Validation { .. })
        ));
    }
}
