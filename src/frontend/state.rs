//! Shared action types for the frontend
//!
//! UI components (drawer, toolbar, dialogs) return `Vec<AppAction>` instead
//! of mutating the stores directly; the app's central `handle_action` routes
//! every action. This keeps component logic testable and makes the set of
//! possible state transitions a closed enum.

use std::path::PathBuf;

use crate::i18n::Language;
use crate::types::{FileRecord, ThemeMode, WaveformOptions};

/// Actions any UI component can emit
#[derive(Debug, Clone)]
pub enum AppAction {
    // File import
    /// Show the native multi-select open dialog
    OpenFileDialog,
    /// Import the given paths (non-`.csv`/`.gz` entries are filtered out)
    ImportPaths(Vec<PathBuf>),
    /// Load an already-imported file and make it the opened file on success
    OpenFile(FileRecord),

    // File list management
    /// Ask for confirmation before deleting one file
    RequestDeleteFile(FileRecord),
    /// Ask for confirmation before clearing the whole list
    RequestClearFiles,
    /// Reveal the file's containing folder in the OS file manager
    OpenContainingFolder(PathBuf),

    // View flags
    ToggleDrawer,
    ToggleSplit,
    OpenPreferences,

    // Preferences
    ApplyPreferences { theme: ThemeMode, language: Language },

    // Chart
    OpenChartConfig,
    ApplyChartConfig(Vec<WaveformOptions>),
    /// Serialize the current waveform to CSV via a save dialog
    ExportCsv,
    /// Capture the viewport and save it as PNG via a save dialog
    SaveImage,
    /// Maximize one channel's plot (split mode), or drop back out of it
    ToggleFullscreen(String),

    /// Close the application window
    Quit,
}
