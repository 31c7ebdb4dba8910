pub use anyhow::bail;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlugmanError {
    SourceMissing(PathBuf),
    NothingSelected,
    Validation(String),
    EntryOutsideSource { plugin: String },
    Manifest(String),
    Config(String),
    Io(#[from] std::io::Error),
    Other(#[from] anyhow::Error),
}

impl Display for PlugmanError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PlugmanError::SourceMissing(path) => {
                write!(f, "Plugins folder not found: {}", path.display())
            }
            PlugmanError::NothingSelected => write!(f, "No plugins selected"),
            PlugmanError::Validation(s) => write!(f, "{}", s),
            PlugmanError::EntryOutsideSource { plugin } => {
                write!(
                    f,
                    "Only files inside the '{}' plugin folder can be chosen as its entry file",
                    plugin
                )
            }
            PlugmanError::Manifest(s) => write!(f, "Manifest error: {}", s),
            PlugmanError::Config(s) => write!(f, "Configuration error: {}", s),
            PlugmanError::Io(e) => write!(f, "I/O error: {}", e),
            PlugmanError::Other(e) => write!(f, "{:#}", e),
        }
    }
}

impl From<quick_xml::Error> for PlugmanError {
    fn from(err: quick_xml::Error) -> Self {
        PlugmanError::Manifest(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for PlugmanError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        PlugmanError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlugmanError>;
