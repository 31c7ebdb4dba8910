//! Recursive directory copy.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use walkdir::WalkDir;

use plugman_core::error::Result;

/// Copies every file under `src` (any depth) to the identical relative path
/// under `dst`, creating intermediate directories as needed. Existing
/// destination files are silently overwritten. Empty source subdirectories
/// are not reproduced.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src)
            .context("walked file outside the copy root")?;
        let destination = dst.join(relative);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &destination)?;
    }

    Ok(())
}
