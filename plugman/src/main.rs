// External crates
use clap::Parser;

// Internal imports
use plugman_core::error::Result;
use plugman_core::{msg, pm_error};

// Local modules
mod cli;
mod commands;
mod messages;

use cli::Args;
use commands::execute_command;
use messages::MESSAGES;

fn main() {
    let args = Args::parse();
    plugman_core::logging::init(args.debug);

    if let Err(e) = run(args) {
        pm_error!("{}", msg!(MESSAGES.error_generic, error = e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    execute_command(args)
}
