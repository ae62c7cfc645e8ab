//! Login / logout handlers.
//!
//! The session is a single flag in the config file. Credentials are the
//! demo pair and are never stored.

use dialoguer::Input;
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use crate::cli::LoginArgs;
use crate::config::{self, Settings};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

const DEMO_USERNAME: &str = "admin";
const DEMO_PASSWORD: &str = "admin";

fn credentials_valid(username: &str, password: &SecretString) -> bool {
    username == DEMO_USERNAME && password.expose_secret() == DEMO_PASSWORD
}

pub fn login(args: LoginArgs, settings: &Settings) -> Result<(), CliError> {
    let username = match args.username {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(prompt_err)?,
    };
    let password = match args.password {
        Some(p) => SecretString::from(p),
        None => SecretString::from(rpassword::prompt_password("Password: ").map_err(prompt_err)?),
    };

    if !credentials_valid(username.trim(), &password) {
        info!(username = %username.trim(), "login rejected");
        return Err(CliError::LoginFailed);
    }

    let mut cfg = config::load_file_config()?;
    cfg.set_authenticated(true);
    let path = config::save_config(&cfg)?;
    info!(path = %path.display(), "session started");

    output::notice("Logged in", settings.color, settings.quiet);
    Ok(())
}

pub fn logout(settings: &Settings) -> Result<(), CliError> {
    let mut cfg = config::load_file_config()?;
    if !cfg.is_authenticated() {
        output::notice("Already logged out", settings.color, settings.quiet);
        return Ok(());
    }
    cfg.set_authenticated(false);
    config::save_config(&cfg)?;

    output::notice("Logged out", settings.color, settings.quiet);
    Ok(())
}
