//! Model store: imported files, opened file, waveform, plot options
//!
//! Operations are fire-and-forget state transitions mirroring the import
//! workflow: files are appended with first-seen de-duplication by path, the
//! waveform is replaced wholesale on open, and plot options merge additively
//! (stale options for vanished channels are kept and filtered at render
//! time, not pruned here).

use super::Store;
use crate::types::{FileRecord, Waveform, WaveformOptions};

/// Commands accepted by [`ModelStore`]
#[derive(Debug, Clone)]
pub enum ModelCommand {
    AddFiles(Vec<FileRecord>),
    DeleteFile(FileRecord),
    ClearFiles,
    UpdateOpenedFile(FileRecord),
    UpdateWaveform(Waveform),
    AddWaveformOptions(Vec<WaveformOptions>),
    UpdateWaveformOptions(Vec<WaveformOptions>),
}

/// Domain data shared by the drawer and the chart panel
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    files: Vec<FileRecord>,
    opened_file: Option<FileRecord>,
    waveform: Waveform,
    waveform_options: Vec<WaveformOptions>,
    version: u64,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn opened_file(&self) -> Option<&FileRecord> {
        self.opened_file.as_ref()
    }

    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    pub fn waveform_options(&self) -> &[WaveformOptions] {
        &self.waveform_options
    }

    /// Plot options restricted to channels present in the current waveform,
    /// in option order. This is the render-time filter that stands in for
    /// pruning stale options.
    pub fn active_options(&self) -> Vec<&WaveformOptions> {
        self.waveform_options
            .iter()
            .filter(|o| self.waveform.contains_channel(&o.label))
            .collect()
    }

    // Typed setters, one per operation. Thin wrappers over `apply`.

    pub fn add_files(&mut self, files: Vec<FileRecord>) {
        self.apply(ModelCommand::AddFiles(files));
    }

    pub fn delete_file(&mut self, file: FileRecord) {
        self.apply(ModelCommand::DeleteFile(file));
    }

    pub fn clear_files(&mut self) {
        self.apply(ModelCommand::ClearFiles);
    }

    pub fn update_opened_file(&mut self, file: FileRecord) {
        self.apply(ModelCommand::UpdateOpenedFile(file));
    }

    pub fn update_waveform(&mut self, waveform: Waveform) {
        self.apply(ModelCommand::UpdateWaveform(waveform));
    }

    pub fn add_waveform_options(&mut self, options: Vec<WaveformOptions>) {
        self.apply(ModelCommand::AddWaveformOptions(options));
    }

    pub fn update_waveform_options(&mut self, options: Vec<WaveformOptions>) {
        self.apply(ModelCommand::UpdateWaveformOptions(options));
    }
}

impl Store for ModelStore {
    type Command = ModelCommand;

    fn apply(&mut self, command: ModelCommand) {
        match command {
            ModelCommand::AddFiles(files) => {
                // Existing files first, then new files in input order;
                // first-seen entry wins on duplicate paths.
                for file in files {
                    if !self.files.iter().any(|f| f.same_file(&file)) {
                        self.files.push(file);
                    }
                }
            }
            ModelCommand::DeleteFile(file) => {
                self.files.retain(|f| !f.same_file(&file));
            }
            ModelCommand::ClearFiles => {
                // Opened file and waveform deliberately untouched
                self.files.clear();
            }
            ModelCommand::UpdateOpenedFile(file) => {
                self.opened_file = Some(file);
            }
            ModelCommand::UpdateWaveform(waveform) => {
                self.waveform = waveform;
            }
            ModelCommand::AddWaveformOptions(options) => {
                // Append, then de-dup by label keeping the first occurrence,
                // so pre-existing options win over newly added ones.
                for option in options {
                    if !self
                        .waveform_options
                        .iter()
                        .any(|o| o.label == option.label)
                    {
                        self.waveform_options.push(option);
                    }
                }
            }
            ModelCommand::UpdateWaveformOptions(options) => {
                // Replace existing options in place; unknown labels are
                // never inserted.
                for existing in &mut self.waveform_options {
                    if let Some(incoming) = options.iter().find(|o| o.label == existing.label) {
                        *existing = incoming.clone();
                    }
                }
            }
        }
        self.version += 1;
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileRecord {
        FileRecord::new(name, format!("/tmp/{name}"))
    }

    #[test]
    fn test_add_files_dedup_by_path() {
        let mut store = ModelStore::new();
        store.add_files(vec![file("a.csv"), file("b.csv")]);
        store.add_files(vec![file("b.csv"), file("c.csv")]);

        let names: Vec<&str> = store.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv", "c.csv"]);
    }

    #[test]
    fn test_add_files_first_seen_wins() {
        let mut store = ModelStore::new();
        let original = FileRecord::new("original", "/tmp/same");
        let replacement = FileRecord::new("replacement", "/tmp/same");

        store.add_files(vec![original.clone()]);
        store.add_files(vec![replacement]);

        assert_eq!(store.files(), &[original]);
    }

    #[test]
    fn test_delete_then_readd() {
        let mut store = ModelStore::new();
        store.add_files(vec![file("a.csv")]);
        store.delete_file(file("a.csv"));
        assert!(store.files().is_empty());

        // delete is not a permanent block
        store.add_files(vec![file("a.csv")]);
        assert_eq!(store.files().len(), 1);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = ModelStore::new();
        store.add_files(vec![file("a.csv")]);
        store.delete_file(file("other.csv"));
        assert_eq!(store.files().len(), 1);
    }

    #[test]
    fn test_clear_files_leaves_opened_and_waveform() {
        let mut store = ModelStore::new();
        store.add_files(vec![file("a.csv")]);
        store.update_opened_file(file("a.csv"));

        let mut waveform = Waveform::new();
        waveform.insert("ch", vec![1.0, 2.0]);
        store.update_waveform(waveform.clone());

        store.clear_files();
        assert!(store.files().is_empty());
        assert_eq!(store.opened_file(), Some(&file("a.csv")));
        assert_eq!(store.waveform(), &waveform);
    }

    #[test]
    fn test_add_options_prefers_first_call() {
        let mut store = ModelStore::new();
        let mut first = WaveformOptions::for_channel("ch", 0);
        first.width = 5.0;
        let second = WaveformOptions::for_channel("ch", 1);

        store.add_waveform_options(vec![first.clone()]);
        store.add_waveform_options(vec![second, WaveformOptions::for_channel("other", 2)]);

        assert_eq!(store.waveform_options().len(), 2);
        assert_eq!(store.waveform_options()[0], first);
        assert_eq!(store.waveform_options()[1].label, "other");
    }

    #[test]
    fn test_update_options_never_inserts() {
        let mut store = ModelStore::new();
        store.add_waveform_options(vec![WaveformOptions::for_channel("known", 0)]);

        store.update_waveform_options(vec![WaveformOptions::for_channel("unknown", 1)]);
        assert_eq!(store.waveform_options().len(), 1);
        assert_eq!(store.waveform_options()[0].label, "known");
    }

    #[test]
    fn test_update_options_replaces_matching_label() {
        let mut store = ModelStore::new();
        store.add_waveform_options(vec![
            WaveformOptions::for_channel("a", 0),
            WaveformOptions::for_channel("b", 1),
        ]);

        let mut restyled = WaveformOptions::for_channel("b", 1);
        restyled.width = 4.5;
        store.update_waveform_options(vec![restyled.clone()]);

        assert_eq!(store.waveform_options()[0], WaveformOptions::for_channel("a", 0));
        assert_eq!(store.waveform_options()[1], restyled);
    }

    #[test]
    fn test_active_options_filters_stale_labels() {
        let mut store = ModelStore::new();
        store.add_waveform_options(vec![
            WaveformOptions::for_channel("live", 0),
            WaveformOptions::for_channel("stale", 1),
        ]);

        let mut waveform = Waveform::new();
        waveform.insert("live", vec![1.0]);
        store.update_waveform(waveform);

        let active: Vec<&str> = store
            .active_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(active, vec!["live"]);
        // the stale option itself is still tracked
        assert_eq!(store.waveform_options().len(), 2);
    }
}
