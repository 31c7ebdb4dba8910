//! Discovers candidate plugins from the local source folder.

use std::fs;

use tracing::debug;

use plugman_core::error::{PlugmanError, Result};

use crate::config::InstallerConfig;
use crate::item::PluginItem;

/// Lists the immediate subdirectories of the plugin source folder and builds
/// one item per folder, sorted by name.
///
/// Each item is marked installed when the target plugins directory already
/// contains a folder of the same name. An absent source folder is an error;
/// the caller decides whether to surface it or render an empty list.
pub fn discover_plugins(config: &InstallerConfig) -> Result<Vec<PluginItem>> {
    let source = &config.plugins_source;
    if !source.is_dir() {
        return Err(PlugmanError::SourceMissing(source.clone()));
    }

    let target = config.target_plugins_dir();
    let mut items = Vec::new();

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let installed = target.join(&name).is_dir();
        items.push(PluginItem::new(name, path, installed));
    }

    items.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(count = items.len(), "discovered plugin folders");
    Ok(items)
}
