//! Command dispatch: bridges CLI args -> store commands -> output formatting.

pub mod config_cmd;
pub mod posts;
pub mod session;
pub mod util;

use tracing::debug;

use postboard_core::PostStore;

use crate::cli::{Command, GlobalOpts};
use crate::config;
use crate::error::CliError;

/// Dispatch a command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        // Config and session commands work without a session or network.
        Command::Config(args) => {
            let settings = config::resolve_settings(global, &config::load_config_or_default())?;
            config_cmd::handle(args, &settings)
        }
        Command::Login(args) => {
            let settings = config::resolve_settings(global, &config::load_config_or_default())?;
            session::login(args, &settings)
        }
        Command::Logout => {
            let settings = config::resolve_settings(global, &config::load_config_or_default())?;
            session::logout(&settings)
        }

        Command::Posts(args) => {
            let cfg = config::load_config()?;
            if !cfg.is_authenticated() {
                return Err(CliError::NotLoggedIn);
            }
            let settings = config::resolve_settings(global, &cfg)?;
            let client_config = config::resolve_client_config(global, &cfg)?;
            let store = PostStore::from_config(&client_config)?;

            // Surface every store transition at trace level.
            let mut changes = store.subscribe();
            tokio::spawn(async move {
                while let Some(state) = changes.changed().await {
                    tracing::trace!(
                        items = state.items.len(),
                        list_loading = state.global_loading,
                        op_loading = state.operation_loading.any(),
                        error = ?state.error,
                        "store changed"
                    );
                }
            });

            debug!(command = ?args.command, "dispatching posts command");
            posts::handle(&store, args, &settings).await
        }

        // Completions are handled before dispatch
        Command::Completions(_) => Ok(()),
    }
}
