//! Core data types for WaveView
//!
//! This module contains the fundamental data structures shared by the
//! stores, the I/O layer, and the frontend: imported file records, the
//! waveform container, and per-channel plot styling.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default stroke width for newly created plot options
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Default stroke colors assigned to channels in order.
///
/// Channels beyond the palette length cycle through it again.
pub const DEFAULT_LINE_COLORS: [[u8; 3]; 17] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
    [0x8c, 0x56, 0x4b],
    [0xff, 0xea, 0x00],
    [0x00, 0x80, 0x00],
    [0xff, 0x00, 0x00],
    [0xe3, 0x77, 0xc2],
    [0xae, 0xc7, 0xe8],
    [0xff, 0xbb, 0x78],
];

/// Pick the default color for the channel at `index`
pub fn color_for_index(index: usize) -> [u8; 3] {
    DEFAULT_LINE_COLORS[index % DEFAULT_LINE_COLORS.len()]
}

// ==================== File Record ====================

/// An imported file: display name plus absolute path.
///
/// The path is the identity — two records with the same path are the same
/// file. Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub path: PathBuf,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build a record from a path, deriving the display name from the
    /// final path component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }

    /// Whether this record refers to the same file as `other`
    pub fn same_file(&self, other: &FileRecord) -> bool {
        self.path == other.path
    }
}

// ==================== Waveform ====================

/// A waveform: ordered mapping from channel name to sample sequence.
///
/// Channel order is first-seen order (CSV header order on import) and is
/// preserved through iteration and CSV export. The waveform is replaced
/// wholesale whenever a new file is opened — there are no append semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Waveform(IndexMap<String, Vec<f64>>);

impl Waveform {
    pub fn new() -> Self {
        Waveform(IndexMap::new())
    }

    pub fn insert(&mut self, channel: impl Into<String>, samples: Vec<f64>) {
        self.0.insert(channel.into(), samples);
    }

    pub fn get(&self, channel: &str) -> Option<&Vec<f64>> {
        self.0.get(channel)
    }

    pub fn get_mut(&mut self, channel: &str) -> Option<&mut Vec<f64>> {
        self.0.get_mut(channel)
    }

    pub fn contains_channel(&self, channel: &str) -> bool {
        self.0.contains_key(channel)
    }

    /// Channel names in first-seen order
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vec<f64>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&String, &mut Vec<f64>) -> bool,
    {
        self.0.retain(f);
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length of the shortest channel (0 if there are no channels).
    ///
    /// CSV export truncates all channels to this length.
    pub fn shortest_len(&self) -> usize {
        self.0.values().map(Vec::len).min().unwrap_or(0)
    }
}

impl From<IndexMap<String, Vec<f64>>> for Waveform {
    fn from(map: IndexMap<String, Vec<f64>>) -> Self {
        Waveform(map)
    }
}

impl FromIterator<(String, Vec<f64>)> for Waveform {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Waveform(iter.into_iter().collect())
    }
}

// ==================== Plot Options ====================

/// Dash style for a plotted channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    pub fn all() -> &'static [LineStyle] {
        &[LineStyle::Solid, LineStyle::Dashed, LineStyle::Dotted]
    }
}

/// Per-channel rendering style, keyed by channel label.
///
/// The option set tracks the waveform channels additively: options for
/// channels no longer present are kept around and filtered at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformOptions {
    pub label: String,
    pub color: [u8; 3],
    pub width: f32,
    pub style: LineStyle,
}

impl WaveformOptions {
    /// Default styling for the channel at `index` in its waveform
    pub fn for_channel(label: impl Into<String>, index: usize) -> Self {
        Self {
            label: label.into(),
            color: color_for_index(index),
            width: DEFAULT_LINE_WIDTH,
            style: LineStyle::default(),
        }
    }
}

// ==================== Theme ====================

/// UI theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

// ==================== Path helpers ====================

/// Resolve a path to itself if it is a directory, otherwise to its parent.
///
/// Used when opening the containing folder of an imported file and when
/// deriving default save-dialog directories.
pub fn dir_or_parent(path: &Path) -> Option<&Path> {
    if path.is_dir() {
        Some(path)
    } else {
        path.parent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_preserves_insertion_order() {
        let mut waveform = Waveform::new();
        waveform.insert("time", vec![0.0, 1.0]);
        waveform.insert("a", vec![1.0, 2.0]);
        waveform.insert("b", vec![3.0, 4.0]);

        let channels: Vec<&str> = waveform.channels().collect();
        assert_eq!(channels, vec!["time", "a", "b"]);
    }

    #[test]
    fn test_waveform_shortest_len() {
        let mut waveform = Waveform::new();
        assert_eq!(waveform.shortest_len(), 0);

        waveform.insert("a", vec![1.0, 2.0, 3.0]);
        waveform.insert("b", vec![4.0, 5.0]);
        assert_eq!(waveform.shortest_len(), 2);
    }

    #[test]
    fn test_waveform_replace_channel() {
        let mut waveform = Waveform::new();
        waveform.insert("a", vec![1.0]);
        waveform.insert("a", vec![2.0, 3.0]);
        assert_eq!(waveform.get("a"), Some(&vec![2.0, 3.0]));
        assert_eq!(waveform.len(), 1);
    }

    #[test]
    fn test_file_record_from_path() {
        let record = FileRecord::from_path("/data/capture.csv.gz");
        assert_eq!(record.name, "capture.csv.gz");
        assert_eq!(record.path, PathBuf::from("/data/capture.csv.gz"));
    }

    #[test]
    fn test_color_cycling() {
        assert_eq!(color_for_index(0), DEFAULT_LINE_COLORS[0]);
        assert_eq!(
            color_for_index(DEFAULT_LINE_COLORS.len() + 2),
            DEFAULT_LINE_COLORS[2]
        );
    }

    #[test]
    fn test_dir_or_parent() {
        let dir = std::env::temp_dir();
        assert_eq!(dir_or_parent(&dir), Some(dir.as_path()));

        let file = dir.join("nonexistent.csv");
        assert_eq!(dir_or_parent(&file), Some(dir.as_path()));
    }
}
