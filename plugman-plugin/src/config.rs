//! Installer configuration.
//!
//! The target application tree and the local plugin source folder are
//! injected here rather than baked into the install logic, so the whole
//! pass can run against arbitrary directories. Values come from
//! `~/.config/plugman/config.yaml` (or an explicit `--config` file) with
//! per-field defaults matching a standard host installation.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use plugman_core::error::Result;

/// Name of the subfolder holding installed plugins under the host root.
pub const TARGET_PLUGINS_SUBDIR: &str = "Plugins";

/// File name of the host's plugin manifest, directly under the host root.
pub const MANIFEST_FILE_NAME: &str = "plugins.xml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallerConfig {
    /// The host application's `bin` directory.
    #[serde(default = "default_host_root")]
    pub host_root: PathBuf,

    /// Folder of candidate plugin directories, one subfolder per plugin.
    #[serde(default = "default_plugins_source")]
    pub plugins_source: PathBuf,

    /// Value of the `logFolder` attribute written to a freshly created manifest.
    #[serde(default = "default_log_folder")]
    pub log_folder: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            host_root: default_host_root(),
            plugins_source: default_plugins_source(),
            log_folder: default_log_folder(),
        }
    }
}

impl InstallerConfig {
    /// Loads configuration from `explicit` when given, otherwise from the
    /// user config file when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from_path(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Loads configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml_ng::from_str(&contents)?;
        Ok(config)
    }

    /// Directory the plugins are copied into.
    pub fn target_plugins_dir(&self) -> PathBuf {
        self.host_root.join(TARGET_PLUGINS_SUBDIR)
    }

    /// Path of the manifest consumed by the host application.
    pub fn manifest_path(&self) -> PathBuf {
        self.host_root.join(MANIFEST_FILE_NAME)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("plugman").join("config.yaml"))
}

#[cfg(windows)]
fn default_host_root() -> PathBuf {
    PathBuf::from(r"C:\Program Files\Studio3D\bin")
}

#[cfg(not(windows))]
fn default_host_root() -> PathBuf {
    PathBuf::from("/opt/studio3d/bin")
}

/// The `Plugins` folder beside the running executable.
fn default_plugins_source() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Plugins")
}

fn default_log_folder() -> String {
    "Library3D".to_string()
}
