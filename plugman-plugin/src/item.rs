//! One discovered plugin folder and its selection state.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use plugman_core::error::{PlugmanError, Result};
use walkdir::WalkDir;

/// A candidate plugin: one subfolder of the local plugin source directory,
/// plus the state the user drives through the interactive surface.
///
/// `installed` is derived once, at discovery, from whether the target already
/// contains a folder of this name. It is informational only and never blocks
/// a re-install.
#[derive(Debug, Clone)]
pub struct PluginItem {
    pub name: String,
    pub source_dir: PathBuf,
    pub selected: bool,
    pub installed: bool,
    pub entry_relative_path: Option<String>,
}

impl PluginItem {
    pub fn new(name: String, source_dir: PathBuf, installed: bool) -> Self {
        Self {
            name,
            source_dir,
            selected: false,
            installed,
            entry_relative_path: None,
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Records the entry file the host should load for this plugin.
    ///
    /// `chosen` may be absolute or relative to the plugin folder. Anything
    /// resolving outside the plugin's own folder is rejected and the previous
    /// choice is kept. Accepted paths are stored relative to the plugin
    /// folder with forward-slash separators.
    pub fn choose_entry_file(&mut self, chosen: &Path) -> Result<()> {
        let resolved = if chosen.is_absolute() {
            chosen.to_path_buf()
        } else {
            self.source_dir.join(chosen)
        };

        let relative = match strip_prefix_ci(&self.source_dir, &resolved) {
            Some(rel)
                if !rel.as_os_str().is_empty()
                    && rel.components().all(|c| matches!(c, Component::Normal(_))) =>
            {
                rel
            }
            _ => {
                return Err(PlugmanError::EntryOutsideSource {
                    plugin: self.name.clone(),
                })
            }
        };

        self.entry_relative_path = Some(forward_slashes(&relative));
        Ok(())
    }

    /// Every file inside the plugin folder, as forward-slash relative paths,
    /// sorted. This is what the entry-file picker offers.
    pub fn entry_candidates(&self) -> Result<Vec<String>> {
        let mut candidates = Vec::new();
        for entry in WalkDir::new(&self.source_dir) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.source_dir) {
                candidates.push(forward_slashes(relative));
            }
        }
        candidates.sort();
        Ok(candidates)
    }

    /// An unselected item is always installable; a selected one needs an
    /// entry file chosen.
    pub fn is_valid_for_install(&self) -> bool {
        if !self.selected {
            return true;
        }
        self.entry_relative_path
            .as_deref()
            .is_some_and(|rel| !rel.is_empty())
    }

    /// Human-readable reason this item cannot be installed, if any.
    pub fn validation_message(&self) -> Option<String> {
        if self.is_valid_for_install() {
            None
        } else {
            Some(format!(
                "No entry file chosen for plugin '{}'. Pick one before installing.",
                self.name
            ))
        }
    }
}

/// Case-insensitive component-wise prefix strip. Returns the remainder of
/// `path` below `base`, or `None` when `base` is not a prefix.
fn strip_prefix_ci(base: &Path, path: &Path) -> Option<PathBuf> {
    let mut rest = path.components();
    for base_component in base.components() {
        let component = rest.next()?;
        if !os_str_eq_ignore_case(base_component.as_os_str(), component.as_os_str()) {
            return None;
        }
    }
    Some(rest.as_path().to_path_buf())
}

fn os_str_eq_ignore_case(a: &OsStr, b: &OsStr) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

fn forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
