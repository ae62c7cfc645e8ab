//! Config subcommand handlers.

use dialoguer::{Input, Select};

use postboard_core::{ClientConfig, DEFAULT_API_URL};

use crate::cli::{ConfigArgs, ConfigCommand, OutputFormat};
use crate::config::{self, Config, Settings};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

const OUTPUT_CHOICES: &[&str] = &["table", "json", "json-compact", "yaml", "plain"];

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let path = config::config_path();
            let mut cfg = config::load_file_config()?;

            if !settings.yes {
                eprintln!("postboard configuration");
                eprintln!("   Config path: {}\n", path.display());

                let url: String = Input::new()
                    .with_prompt("Posts collection URL")
                    .default(DEFAULT_API_URL.into())
                    .interact_text()
                    .map_err(prompt_err)?;

                let timeout: u64 = Input::new()
                    .with_prompt("Request timeout (seconds)")
                    .default(cfg.api.timeout)
                    .interact_text()
                    .map_err(prompt_err)?;

                let current = OUTPUT_CHOICES
                    .iter()
                    .position(|c| *c == cfg.defaults.output)
                    .unwrap_or(0);
                let output_idx = Select::new()
                    .with_prompt("Default output format")
                    .items(OUTPUT_CHOICES)
                    .default(current)
                    .interact()
                    .map_err(prompt_err)?;

                cfg.api.url = url;
                cfg.api.timeout = timeout;
                if let Some(choice) = OUTPUT_CHOICES.get(output_idx) {
                    cfg.defaults.output = (*choice).to_owned();
                }
            }

            // Refuse to write a config the posts commands couldn't use.
            cfg.to_client_config()?;
            let path = config::save_config(&cfg)?;
            output::notice(
                &format!("Config written to {}", path.display()),
                settings.color,
                settings.quiet,
            );
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = render_config(&cfg, settings.output)?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), false);
            Ok(())
        }

        // ── Set URL ─────────────────────────────────────────────────
        ConfigCommand::SetUrl { url } => {
            let mut cfg = config::load_file_config()?;
            let parsed = ClientConfig::new(&url, std::time::Duration::from_secs(cfg.api.timeout))?;
            cfg.api.url = parsed.url.to_string();
            config::save_config(&cfg)?;

            output::notice(
                &format!("API URL set to {}", parsed.url),
                settings.color,
                settings.quiet,
            );
            Ok(())
        }
    }
}

/// Table output shows the file as TOML; structured formats use serde.
fn render_config(cfg: &Config, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Table | OutputFormat::Plain => Ok(toml::to_string_pretty(cfg)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(cfg)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(cfg)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(cfg)?),
    }
}
