//! Dialog trait system for unified dialog management
//!
//! Each dialog implements the [`Dialog`] trait, encapsulating its state,
//! actions, and rendering. [`show_dialog`] handles the shared lifecycle:
//! window construction, close handling, and state reset.

use egui::{Align2, Context, Ui};

/// Actions that a dialog can return after rendering
#[derive(Debug, Clone, Default)]
pub enum DialogAction<A> {
    /// Keep the dialog open, no action needed
    #[default]
    None,
    /// Close the dialog without performing any action
    Close,
    /// Close the dialog and perform the specified action
    CloseWithAction(A),
}

impl<A> DialogAction<A> {
    /// Check if the action indicates the dialog should close
    pub fn should_close(&self) -> bool {
        matches!(self, DialogAction::Close | DialogAction::CloseWithAction(_))
    }

    /// Extract the action if present
    pub fn into_action(self) -> Option<A> {
        match self {
            DialogAction::CloseWithAction(a) => Some(a),
            _ => None,
        }
    }
}

/// Trait for dialog state management
pub trait DialogState: Default {
    /// Reset the dialog state to its default values
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Configuration for dialog window appearance and behavior
#[derive(Debug, Clone)]
pub struct DialogWindowConfig {
    /// Default width of the dialog window
    pub default_width: f32,
    /// Whether the dialog can be resized
    pub resizable: bool,
    /// Optional anchor position (alignment and offset)
    pub anchor: Option<(Align2, [f32; 2])>,
}

impl Default for DialogWindowConfig {
    fn default() -> Self {
        Self {
            default_width: 400.0,
            resizable: false,
            anchor: Some((Align2::CENTER_CENTER, [0.0, 0.0])),
        }
    }
}

/// Main dialog trait for implementing dialogs
pub trait Dialog {
    /// The state type for this dialog
    type State: DialogState;

    /// The action type this dialog can produce
    type Action;

    /// The context type needed to render this dialog
    type Context<'a>;

    /// Localized window title for this dialog
    fn title(state: &Self::State) -> String;

    /// Get the window configuration for this dialog
    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::default()
    }

    /// Render the dialog content and return what should happen next
    fn render(
        state: &mut Self::State,
        ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action>;
}

/// Show a dialog using the [`Dialog`] trait.
///
/// Only renders if `is_open` is true; resets the state when the dialog
/// closes. Returns `Some(action)` if the dialog produced an action.
pub fn show_dialog<D: Dialog>(
    ctx: &Context,
    is_open: &mut bool,
    state: &mut D::State,
    dialog_ctx: D::Context<'_>,
) -> Option<D::Action> {
    if !*is_open {
        return None;
    }

    let config = D::window_config();
    let mut action_result: Option<D::Action> = None;
    let mut should_close = false;

    let mut window = egui::Window::new(D::title(state))
        .collapsible(false)
        .resizable(config.resizable)
        .default_width(config.default_width);

    if let Some((align, offset)) = config.anchor {
        window = window.anchor(align, offset);
    }

    window.show(ctx, |ui| {
        let action = D::render(state, dialog_ctx, ui);

        should_close = action.should_close();
        if let Some(a) = action.into_action() {
            action_result = Some(a);
        }
    });

    if should_close {
        *is_open = false;
        state.reset();
    }

    action_result
}

pub mod chart_config;
pub mod confirm;
pub mod preferences;

pub use chart_config::{ChartConfigAction, ChartConfigDialog, ChartConfigState};
pub use confirm::{ConfirmAction, ConfirmDialog, ConfirmKind, ConfirmState};
pub use preferences::{PreferencesAction, PreferencesDialog, PreferencesState};
