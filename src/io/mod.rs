//! File I/O for waveform import and export
//!
//! - [`reader`] — CSV decoding with transparent gzip/zlib decompression
//! - [`export`] — waveform serialization back to CSV text
//! - [`folder`] — revealing a file's containing folder in the OS file manager
//! - [`loader`] — background loader thread and its channel bridge

pub mod export;
pub mod folder;
pub mod loader;
pub mod reader;

pub use export::waveform_to_csv;
pub use folder::open_containing_folder;
pub use loader::{LoadRequest, LoadResult, LoaderBridge, LoaderWorker};
pub use reader::read_csv_to_waveform;
