//! Chart configuration dialog
//!
//! Per-channel line styling: color, width, and line style. Edits happen on
//! a working copy and only reach the model when the user confirms.

use egui::Ui;
use rust_i18n::t;

use crate::frontend::dialogs::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use crate::types::{LineStyle, WaveformOptions};

/// Working copy of the plot options being edited
#[derive(Debug, Clone, Default)]
pub struct ChartConfigState {
    pub options: Vec<WaveformOptions>,
}

impl ChartConfigState {
    /// Seed the working copy from the currently active options
    pub fn from_options<'a>(options: impl IntoIterator<Item = &'a WaveformOptions>) -> Self {
        Self {
            options: options.into_iter().cloned().collect(),
        }
    }
}

impl DialogState for ChartConfigState {}

/// Actions produced by the chart configuration dialog
#[derive(Debug, Clone)]
pub enum ChartConfigAction {
    /// Apply the edited options to the model
    Apply(Vec<WaveformOptions>),
}

fn style_label(style: LineStyle) -> String {
    match style {
        LineStyle::Solid => t!("chart_style_solid").into_owned(),
        LineStyle::Dashed => t!("chart_style_dashed").into_owned(),
        LineStyle::Dotted => t!("chart_style_dotted").into_owned(),
    }
}

/// The chart configuration dialog
pub struct ChartConfigDialog;

impl Dialog for ChartConfigDialog {
    type State = ChartConfigState;
    type Action = ChartConfigAction;
    type Context<'a> = ();

    fn title(_state: &Self::State) -> String {
        t!("chart_config_title").into_owned()
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig {
            default_width: 440.0,
            ..Default::default()
        }
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            egui::Grid::new("chart_config_grid")
                .num_columns(4)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(t!("chart_config_channel")).strong());
                    ui.label(egui::RichText::new(t!("chart_config_color")).strong());
                    ui.label(egui::RichText::new(t!("chart_config_width")).strong());
                    ui.label(egui::RichText::new(t!("chart_config_style")).strong());
                    ui.end_row();

                    for (index, option) in state.options.iter_mut().enumerate() {
                        ui.label(&option.label);
                        ui.color_edit_button_srgb(&mut option.color);
                        ui.add(egui::Slider::new(&mut option.width, 0.5..=10.0).step_by(0.5));
                        egui::ComboBox::from_id_salt(("chart_config_style", index))
                            .selected_text(style_label(option.style))
                            .show_ui(ui, |ui| {
                                for style in LineStyle::all() {
                                    ui.selectable_value(
                                        &mut option.style,
                                        *style,
                                        style_label(*style),
                                    );
                                }
                            });
                        ui.end_row();
                    }
                });
        });

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(t!("dialog_ok")).clicked() {
                return DialogAction::CloseWithAction(ChartConfigAction::Apply(
                    state.options.clone(),
                ));
            }
            if ui.button(t!("dialog_cancel")).clicked() {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}
