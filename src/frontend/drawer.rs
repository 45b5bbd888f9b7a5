//! Imported-files drawer
//!
//! Side panel listing every imported file with a case-insensitive search
//! filter. Clicking an entry opens it; the context menu offers revealing
//! the containing folder and deleting the entry. A trailing button clears
//! the whole list (after confirmation).

use egui::Ui;
use rust_i18n::t;

use crate::store::ModelStore;
use crate::types::FileRecord;

use super::state::AppAction;

/// Drawer-local UI state (search text, list collapse)
#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    pub filter: String,
}

impl DrawerState {
    fn matches(&self, file: &FileRecord) -> bool {
        self.filter.is_empty()
            || file
                .name
                .to_lowercase()
                .contains(&self.filter.to_lowercase())
    }
}

/// Render the drawer contents
pub fn render(state: &mut DrawerState, model: &ModelStore, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.filter)
                .hint_text(t!("drawer_search"))
                .desired_width(ui.available_width() - 24.0),
        );
        if !state.filter.is_empty() && ui.small_button("✖").clicked() {
            state.filter.clear();
        }
    });

    ui.separator();

    let header = egui::CollapsingHeader::new(t!("drawer_imported_files")).default_open(true);
    header.show(ui, |ui| {
        if model.files().is_empty() {
            ui.label(egui::RichText::new(t!("drawer_empty_hint")).weak());
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for file in model.files() {
                if !state.matches(file) {
                    continue;
                }

                let is_open = model.opened_file().is_some_and(|f| f.same_file(file));
                let response = ui.selectable_label(is_open, &file.name);

                if response.clicked() && !is_open {
                    actions.push(AppAction::OpenFile(file.clone()));
                }

                response.context_menu(|ui| {
                    if ui.button(t!("drawer_open_folder")).clicked() {
                        actions.push(AppAction::OpenContainingFolder(file.path.clone()));
                        ui.close();
                    }
                    if ui.button(t!("drawer_delete_file")).clicked() {
                        actions.push(AppAction::RequestDeleteFile(file.clone()));
                        ui.close();
                    }
                });
            }
        });
    });

    if !model.files().is_empty() {
        ui.separator();
        if ui.button(t!("drawer_clear_history")).clicked() {
            actions.push(AppAction::RequestClearFiles);
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive() {
        let state = DrawerState {
            filter: "WAVE".to_string(),
        };
        assert!(state.matches(&FileRecord::new("wave_1.csv", "/tmp/wave_1.csv")));
        assert!(!state.matches(&FileRecord::new("other.csv", "/tmp/other.csv")));
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let state = DrawerState::default();
        assert!(state.matches(&FileRecord::new("anything", "/tmp/anything")));
    }
}
