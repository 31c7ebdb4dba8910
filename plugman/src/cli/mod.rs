// CLI argument parsing and definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "plugman")]
#[command(about = "Install plugins into the host application and register them in plugins.xml")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a custom installer configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List discovered plugins and whether they are already installed
    List,
    /// Install plugins and register their entry files in the manifest
    Install {
        /// Plugin names to install (omit to pick interactively)
        plugins: Vec<String>,

        /// Entry file for a plugin, as NAME=RELATIVE_PATH (repeatable)
        #[arg(long = "entry", value_name = "NAME=PATH")]
        entries: Vec<String>,
    },
    /// Show the resolved installer configuration
    Config,
}
