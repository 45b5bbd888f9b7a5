//! Chart toolbar
//!
//! Tool buttons for zoom/pan/reset/export plus the overflow menu (chart
//! style editor, CSV export). Buttons mutate the [`ChartView`] directly
//! where the effect is purely visual, and return actions for everything
//! that touches stores or native dialogs.

use egui::Ui;
use rust_i18n::t;

use crate::store::ModelStore;

use super::chart::{ChartView, DragZoomMode};
use super::state::AppAction;

const ZOOM_IN_FACTOR: f32 = 1.1;
const ZOOM_OUT_FACTOR: f32 = 0.9;

fn tool_button(ui: &mut Ui, icon: &str, tooltip: impl Into<egui::WidgetText>, active: bool) -> bool {
    ui.selectable_label(active, icon)
        .on_hover_text(tooltip)
        .clicked()
}

/// Render the toolbar row above the chart panel
pub fn render(view: &mut ChartView, model: &ModelStore, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();
    let has_data = !model.active_options().is_empty();

    ui.horizontal(|ui| {
        ui.add_enabled_ui(has_data, |ui| {
            // Drag-zoom modes
            if tool_button(ui, "⛶", t!("tool_zoom_xy"), view.drag_zoom == Some(DragZoomMode::Xy)) {
                view.toggle_drag_zoom(DragZoomMode::Xy);
            }
            if tool_button(ui, "↔", t!("tool_zoom_x"), view.drag_zoom == Some(DragZoomMode::X)) {
                view.toggle_drag_zoom(DragZoomMode::X);
            }
            if tool_button(ui, "↕", t!("tool_zoom_y"), view.drag_zoom == Some(DragZoomMode::Y)) {
                view.toggle_drag_zoom(DragZoomMode::Y);
            }

            ui.separator();

            if ui
                .button("🔍+")
                .on_hover_text(t!("tool_zoom_in"))
                .clicked()
            {
                view.pending_zoom = Some(ZOOM_IN_FACTOR);
            }
            if ui
                .button("🔍-")
                .on_hover_text(t!("tool_zoom_out"))
                .clicked()
            {
                view.pending_zoom = Some(ZOOM_OUT_FACTOR);
            }

            if tool_button(ui, "✋", t!("tool_pan"), view.pan_enabled) {
                view.toggle_pan();
            }

            if ui.button("⟲").on_hover_text(t!("tool_reset")).clicked() {
                view.reset_pending = true;
            }

            ui.separator();

            if ui
                .button("💾")
                .on_hover_text(t!("tool_save_image"))
                .clicked()
            {
                actions.push(AppAction::SaveImage);
            }
        });

        // Overflow menu
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button("⋮", |ui| {
                ui.add_enabled_ui(has_data, |ui| {
                    if ui.button(t!("tool_chart_config")).clicked() {
                        actions.push(AppAction::OpenChartConfig);
                        ui.close();
                    }
                    if ui.button(t!("tool_data_export")).clicked() {
                        actions.push(AppAction::ExportCsv);
                        ui.close();
                    }
                });
            })
            .response
            .on_hover_text(t!("tool_more"));
        });
    });

    actions
}
