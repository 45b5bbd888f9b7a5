//! # WaveView: desktop waveform viewer
//!
//! Imports CSV (optionally gzip/zlib-compressed) waveform files and renders
//! them as multi-channel line charts with zoom, pan, export, and per-channel
//! styling.
//!
//! ## Architecture
//!
//! - **Stores**: two explicit state containers — [`store::ViewStore`] for
//!   ephemeral UI flags and [`store::ModelStore`] for domain data (imported
//!   files, opened file, waveform, plot options). All mutation goes through
//!   closed command enums applied in dispatch order.
//! - **I/O**: CSV/gzip decoding, CSV export, and folder opening live in
//!   [`io`]; file reads run on a background loader thread connected to the
//!   UI via crossbeam channels.
//! - **Frontend**: eframe/egui UI with egui_plot charts. Components return
//!   `AppAction`s instead of mutating state directly.
//!
//! ## Configuration
//!
//! UI preferences (theme mode, language) are stored in the platform data
//! directory under `dev.waveview.waveview-rs`:
//!
//! - **Linux**: `~/.local/share/dev.waveview.waveview-rs/`
//! - **macOS**: `~/Library/Application Support/dev.waveview.waveview-rs/`
//! - **Windows**: `%APPDATA%\dev.waveview.waveview-rs\`
//!
//! Model state (file list, waveform) is in-memory only and resets on restart.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod error;
pub mod frontend;
pub mod i18n;
pub mod io;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use app::WaveViewApp;
pub use config::{AppState, UiPreferences};
pub use error::{Result, WaveViewError};
pub use io::LoaderBridge;
pub use store::{ModelCommand, ModelStore, ViewCommand, ViewStore};
pub use types::{FileRecord, LineStyle, ThemeMode, Waveform, WaveformOptions};
