use plugman_core::error::{PlugmanError, Result};
use plugman_core::{msg, pm_println, pm_warning};
use plugman_plugin::{discover_plugins, InstallerConfig, PluginItem};

use crate::messages::MESSAGES;

pub fn handle_list(config: &InstallerConfig) -> Result<()> {
    let items = match discover_plugins(config) {
        Ok(items) => items,
        Err(PlugmanError::SourceMissing(path)) => {
            pm_warning!(
                "{}",
                msg!(MESSAGES.discovery_source_missing, path = path.display())
            );
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    render_items(&items);
    Ok(())
}

pub fn render_items(items: &[PluginItem]) {
    if items.is_empty() {
        pm_println!("{}", MESSAGES.list_empty);
        return;
    }

    pm_println!("{}", MESSAGES.list_header);
    for item in items {
        if item.installed {
            pm_println!("{}", msg!(MESSAGES.list_item_installed, name = &item.name));
        } else {
            pm_println!("{}", msg!(MESSAGES.list_item, name = &item.name));
        }
    }
}
