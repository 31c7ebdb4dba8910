use plugman_core::error::Result;
use plugman_core::{msg, pm_println};
use plugman_plugin::InstallerConfig;

use crate::messages::MESSAGES;

pub fn handle_config(config: &InstallerConfig) -> Result<()> {
    pm_println!(
        "{}",
        msg!(
            MESSAGES.config_plugins_source,
            path = config.plugins_source.display()
        )
    );
    pm_println!(
        "{}",
        msg!(
            MESSAGES.config_target_dir,
            path = config.target_plugins_dir().display()
        )
    );
    pm_println!(
        "{}",
        msg!(
            MESSAGES.config_manifest,
            path = config.manifest_path().display()
        )
    );
    pm_println!(
        "{}",
        msg!(MESSAGES.config_log_folder, value = &config.log_folder)
    );
    Ok(())
}
