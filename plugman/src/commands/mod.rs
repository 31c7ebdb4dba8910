// Command handlers for installer operations

use tracing::debug;

use plugman_core::error::Result;
use plugman_plugin::InstallerConfig;

use crate::cli::{Args, Command};

pub mod config;
pub mod install;
pub mod list;

/// Main command dispatcher
pub fn execute_command(args: Args) -> Result<()> {
    let config = InstallerConfig::load(args.config.as_deref())?;
    debug!(command = ?args.command, "dispatching");

    match args.command {
        Command::List => list::handle_list(&config),
        Command::Install { plugins, entries } => {
            install::handle_install(&config, &plugins, &entries)
        }
        Command::Config => config::handle_config(&config),
    }
}
