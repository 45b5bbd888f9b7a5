//! View store: ephemeral UI flags
//!
//! Each flag is independently settable; a command replaces exactly its own
//! field and leaves the others untouched. No validation, no error states.

use super::Store;
use crate::types::ThemeMode;

/// Commands accepted by [`ViewStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SetDrawer(bool),
    SetSplit(bool),
    SetLoading(bool),
    SetPreference(bool),
    SetTheme(ThemeMode),
}

/// Ephemeral UI state.
///
/// Defaults: drawer closed, split off, not loading, preference panel
/// closed, theme "system".
#[derive(Debug, Clone)]
pub struct ViewStore {
    drawer: bool,
    split: bool,
    loading: bool,
    preference: bool,
    theme: ThemeMode,
    version: u64,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self {
            drawer: false,
            split: false,
            loading: false,
            preference: false,
            theme: ThemeMode::System,
            version: 0,
        }
    }
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawer(&self) -> bool {
        self.drawer
    }

    pub fn split(&self) -> bool {
        self.split
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn preference(&self) -> bool {
        self.preference
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    // Typed setters, one per flag. Thin wrappers over `apply`.

    pub fn set_drawer(&mut self, open: bool) {
        self.apply(ViewCommand::SetDrawer(open));
    }

    pub fn set_split(&mut self, split: bool) {
        self.apply(ViewCommand::SetSplit(split));
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.apply(ViewCommand::SetLoading(loading));
    }

    pub fn set_preference(&mut self, open: bool) {
        self.apply(ViewCommand::SetPreference(open));
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.apply(ViewCommand::SetTheme(theme));
    }
}

impl Store for ViewStore {
    type Command = ViewCommand;

    fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::SetDrawer(open) => self.drawer = open,
            ViewCommand::SetSplit(split) => self.split = split,
            ViewCommand::SetLoading(loading) => self.loading = loading,
            ViewCommand::SetPreference(open) => self.preference = open,
            ViewCommand::SetTheme(theme) => self.theme = theme,
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

    #[test]
    fn test_defaults() {
        let store = ViewStore::new();
        assert!(!store.drawer());
        assert!(!store.split());
        assert!(!store.loading());
        assert!(!store.preference());
        assert_eq!(store.theme(), ThemeMode::System);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_commands_are_independent() {
        let mut store = ViewStore::new();
        store.set_drawer(true);
        store.set_theme(ThemeMode::Dark);

        assert!(store.drawer());
        assert_eq!(store.theme(), ThemeMode::Dark);
        // untouched fields keep their defaults
        assert!(!store.split());
        assert!(!store.loading());
        assert!(!store.preference());
    }

    #[test]
    fn test_version_bumps_per_command() {
        let mut store = ViewStore::new();
        store.dispatch_all([
            ViewCommand::SetLoading(true),
            ViewCommand::SetLoading(false),
            ViewCommand::SetSplit(true),
        ]);
        assert_eq!(store.version(), 3);
        assert!(!store.loading());
        assert!(store.split());
    }
}
