//! Reveal files in the OS file manager

use std::path::Path;

use crate::error::{Result, WaveViewError};
use crate::types::dir_or_parent;

/// Open the folder containing `path` (or `path` itself if it is a
/// directory) in the platform file manager.
pub fn open_containing_folder(path: &Path) -> Result<()> {
    let folder = dir_or_parent(path).ok_or_else(|| {
        WaveViewError::Config(format!("No containing folder for {}", path.display()))
    })?;

    #[cfg(target_os = "macos")]
    let command = "open";
    #[cfg(target_os = "windows")]
    let command = "explorer";
    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    let command = "xdg-open";

    std::process::Command::new(command)
        .arg(folder)
        .spawn()
        .map(|_| ())
        .map_err(|e| {
            WaveViewError::Io(e).with_context(format!("Failed to open {}", folder.display()))
        })
}
