//! The install pass: validate, copy, and register selected plugins.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info};

use plugman_core::error::{PlugmanError, Result};

use crate::config::InstallerConfig;
use crate::copy::copy_dir_recursive;
use crate::item::PluginItem;
use crate::manifest::Manifest;

/// What a successful pass did, for reporting by the caller.
#[derive(Debug, Default)]
pub struct InstallOutcome {
    /// Plugin names whose folders were copied to the target.
    pub installed: Vec<String>,
    /// Entry file names newly appended to the manifest.
    pub registered: Vec<String>,
    /// Entry file names skipped because a same-named entry already existed.
    pub already_registered: Vec<String>,
}

/// Installs every selected item in `items`, in order.
///
/// Validation is all-or-nothing: the first invalid selected item aborts the
/// pass before any filesystem work. Copying replaces an existing target
/// folder wholesale. Manifest registrations are de-duplicated by entry file
/// name. A failure mid-pass stops at that point; completed copies are left
/// in place and the manifest is not saved.
pub fn install(items: &[PluginItem], config: &InstallerConfig) -> Result<InstallOutcome> {
    let selected: Vec<&PluginItem> = items.iter().filter(|item| item.selected).collect();
    if selected.is_empty() {
        return Err(PlugmanError::NothingSelected);
    }

    for item in &selected {
        if let Some(message) = item.validation_message() {
            return Err(PlugmanError::Validation(message));
        }
    }

    let target_root = config.target_plugins_dir();
    fs::create_dir_all(&target_root)
        .with_context(|| format!("failed to create {}", target_root.display()))?;

    let manifest_path = config.manifest_path();
    let mut manifest = if manifest_path.exists() {
        Manifest::load(&manifest_path)?
    } else {
        Manifest::new_default(&config.log_folder)
    };

    let mut outcome = InstallOutcome::default();

    for item in &selected {
        let destination = target_root.join(&item.name);

        if destination.exists() {
            fs::remove_dir_all(&destination)
                .with_context(|| format!("failed to replace {}", destination.display()))?;
        }
        copy_dir_recursive(&item.source_dir, &destination)?;
        debug!(plugin = %item.name, "copied plugin folder");

        let entry_relative = item.entry_relative_path.as_deref().ok_or_else(|| {
            PlugmanError::Validation(format!("No entry file chosen for plugin '{}'.", item.name))
        })?;
        let entry_absolute = resolve_entry(&destination, entry_relative);

        let file_name = match entry_absolute.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => {
                return Err(PlugmanError::Validation(format!(
                    "Entry file path for plugin '{}' has no file name.",
                    item.name
                )))
            }
        };

        if manifest.register(&entry_absolute) {
            outcome.registered.push(file_name);
        } else {
            outcome.already_registered.push(file_name);
        }
        outcome.installed.push(item.name.clone());
    }

    manifest.save(&manifest_path)?;
    info!(
        installed = outcome.installed.len(),
        registered = outcome.registered.len(),
        "install pass complete"
    );
    Ok(outcome)
}

/// The absolute path of the entry file under the freshly copied target
/// folder. The stored relative path always uses forward slashes.
fn resolve_entry(destination: &std::path::Path, entry_relative: &str) -> PathBuf {
    let mut path = destination.to_path_buf();
    for part in entry_relative.split('/') {
        path.push(part);
    }
    path
}
