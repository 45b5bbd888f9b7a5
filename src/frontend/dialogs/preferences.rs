//! Preferences dialog
//!
//! App-wide settings: theme mode and language. Both persist across
//! sessions through the app state file.

use egui::Ui;
use rust_i18n::t;

use crate::frontend::dialogs::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use crate::i18n::Language;
use crate::types::ThemeMode;

/// State for the preferences dialog
#[derive(Debug, Clone, Default)]
pub struct PreferencesState {
    pub theme: ThemeMode,
    pub language: Language,
}

impl PreferencesState {
    /// Seed from the current preferences
    pub fn from_current(theme: ThemeMode, language: Language) -> Self {
        Self { theme, language }
    }
}

impl DialogState for PreferencesState {}

/// Actions produced by the preferences dialog
#[derive(Debug, Clone)]
pub enum PreferencesAction {
    /// Apply preferences
    Apply { theme: ThemeMode, language: Language },
}

fn theme_label(theme: ThemeMode) -> String {
    match theme {
        ThemeMode::Light => t!("pref_theme_light").into_owned(),
        ThemeMode::Dark => t!("pref_theme_dark").into_owned(),
        ThemeMode::System => t!("pref_theme_system").into_owned(),
    }
}

/// The preferences dialog
pub struct PreferencesDialog;

impl Dialog for PreferencesDialog {
    type State = PreferencesState;
    type Action = PreferencesAction;
    type Context<'a> = ();

    fn title(_state: &Self::State) -> String {
        t!("pref_title").into_owned()
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig {
            default_width: 320.0,
            ..Default::default()
        }
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        egui::Grid::new("prefs_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label(format!("{}:", t!("pref_theme")));
                egui::ComboBox::from_id_salt("theme_selector")
                    .selected_text(theme_label(state.theme))
                    .show_ui(ui, |ui| {
                        for theme in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
                            ui.selectable_value(&mut state.theme, theme, theme_label(theme));
                        }
                    });
                ui.end_row();

                ui.label(format!("{}:", t!("pref_language")));
                egui::ComboBox::from_id_salt("language_selector")
                    .selected_text(state.language.display_name())
                    .show_ui(ui, |ui| {
                        for lang in Language::all() {
                            ui.selectable_value(&mut state.language, *lang, lang.display_name());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(t!("dialog_apply")).clicked() {
                return DialogAction::CloseWithAction(PreferencesAction::Apply {
                    theme: state.theme,
                    language: state.language,
                });
            }
            if ui.button(t!("dialog_cancel")).clicked() {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}
