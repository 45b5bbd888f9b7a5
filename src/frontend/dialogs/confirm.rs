//! Confirmation dialog for destructive file-list operations
//!
//! Deleting one file or clearing the whole list goes through this dialog;
//! the action only reaches the model when the user confirms.

use egui::Ui;
use rust_i18n::t;

use crate::frontend::dialogs::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use crate::types::FileRecord;

/// What the user is being asked to confirm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Remove one file from the imported list
    DeleteFile(FileRecord),
    /// Remove every file from the imported list
    ClearFiles,
}

/// State for the confirmation dialog
#[derive(Debug, Clone, Default)]
pub struct ConfirmState {
    pub kind: Option<ConfirmKind>,
}

impl ConfirmState {
    pub fn for_kind(kind: ConfirmKind) -> Self {
        Self { kind: Some(kind) }
    }
}

impl DialogState for ConfirmState {}

/// Actions produced by the confirmation dialog
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    /// The user confirmed the pending operation
    Confirm(ConfirmKind),
}

/// The confirmation dialog
pub struct ConfirmDialog;

impl Dialog for ConfirmDialog {
    type State = ConfirmState;
    type Action = ConfirmAction;
    type Context<'a> = ();

    fn title(state: &Self::State) -> String {
        match state.kind {
            Some(ConfirmKind::DeleteFile(_)) => t!("confirm_delete_title").into_owned(),
            _ => t!("confirm_clear_title").into_owned(),
        }
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
        let Some(kind) = state.kind.clone() else {
            return DialogAction::Close;
        };

        match &kind {
            ConfirmKind::DeleteFile(file) => {
                ui.label(egui::RichText::new(&file.name).strong());
                ui.label(t!("confirm_delete_message"));
            }
            ConfirmKind::ClearFiles => {
                ui.label(t!("confirm_clear_message"));
            }
        }

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(t!("dialog_ok")).clicked() {
                return DialogAction::CloseWithAction(ConfirmAction::Confirm(kind));
            }
            if ui.button(t!("dialog_cancel")).clicked() {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}
