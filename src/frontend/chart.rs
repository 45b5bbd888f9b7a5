//! Chart rendering with egui_plot
//!
//! Derives one line per channel from the waveform and its plot options,
//! filtered to channels actually present. Combined mode renders every
//! channel in one plot; split mode renders one plot per channel, each with
//! a full-screen toggle.
//!
//! Zoom/pan interaction state lives in [`ChartView`], which the toolbar
//! mutates through actions and the plots consume each frame.

use egui::{Color32, Ui, Vec2};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoint, PlotPoints};
use rust_i18n::t;

use crate::store::ModelStore;
use crate::types::{LineStyle, WaveformOptions};

use super::state::AppAction;

/// Which axes a drag-to-zoom gesture is allowed to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragZoomMode {
    X,
    Y,
    Xy,
}

/// Interaction state shared by all plots in the chart panel
#[derive(Debug, Clone)]
pub struct ChartView {
    /// Drag-to-pan enabled (mutually exclusive with drag zoom)
    pub pan_enabled: bool,
    /// Drag-to-zoom mode, when active
    pub drag_zoom: Option<DragZoomMode>,
    /// One-shot zoom factor applied on the next frame (buttons)
    pub pending_zoom: Option<f32>,
    /// One-shot reset to auto bounds on the next frame
    pub reset_pending: bool,
    /// Channel currently maximized in split mode
    pub fullscreen_channel: Option<String>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            pan_enabled: true,
            drag_zoom: None,
            pending_zoom: None,
            reset_pending: false,
            fullscreen_channel: None,
        }
    }
}

impl ChartView {
    /// Enable pan and drop any drag-zoom mode
    pub fn toggle_pan(&mut self) {
        self.pan_enabled = !self.pan_enabled;
        self.drag_zoom = None;
    }

    /// Toggle a drag-zoom mode; selecting the active mode turns it off.
    /// Pan is disabled while drag zoom is active.
    pub fn toggle_drag_zoom(&mut self, mode: DragZoomMode) {
        self.drag_zoom = if self.drag_zoom == Some(mode) {
            None
        } else {
            Some(mode)
        };
        self.pan_enabled = false;
    }

    fn allow_zoom_axes(&self) -> [bool; 2] {
        match self.drag_zoom {
            Some(DragZoomMode::X) => [true, false],
            Some(DragZoomMode::Y) => [false, true],
            Some(DragZoomMode::Xy) | None => [true, true],
        }
    }
}

fn plot_line_style(style: LineStyle) -> egui_plot::LineStyle {
    match style {
        LineStyle::Solid => egui_plot::LineStyle::Solid,
        LineStyle::Dashed => egui_plot::LineStyle::Dashed { length: 8.0 },
        LineStyle::Dotted => egui_plot::LineStyle::Dotted { spacing: 4.0 },
    }
}

fn channel_line(samples: &[f64], options: &WaveformOptions) -> Line<'static> {
    let points: PlotPoints = samples
        .iter()
        .enumerate()
        .map(|(i, v)| [i as f64, *v])
        .collect();

    Line::new(options.label.clone(), points)
        .color(Color32::from_rgb(
            options.color[0],
            options.color[1],
            options.color[2],
        ))
        .width(options.width)
        .style(plot_line_style(options.style))
}

/// Render one plot containing the given channels
fn show_plot(view: &mut ChartView, ui: &mut Ui, id: &str, channels: &[(&[f64], &WaveformOptions)]) {
    let [zoom_x, zoom_y] = view.allow_zoom_axes();
    let legend_corner = if channels.len() > 1 {
        Corner::LeftTop
    } else {
        Corner::RightTop
    };

    let pending_zoom = view.pending_zoom;
    let reset_pending = view.reset_pending;

    Plot::new(id.to_owned())
        .legend(Legend::default().position(legend_corner))
        .allow_drag(view.pan_enabled)
        .allow_boxed_zoom(view.drag_zoom.is_some())
        .allow_zoom([zoom_x, zoom_y])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            if reset_pending {
                plot_ui.set_auto_bounds(true);
            } else if let Some(factor) = pending_zoom {
                let bounds = plot_ui.plot_bounds();
                let center = PlotPoint::new(
                    (bounds.min()[0] + bounds.max()[0]) / 2.0,
                    (bounds.min()[1] + bounds.max()[1]) / 2.0,
                );
                plot_ui.zoom_bounds(Vec2::splat(factor), center);
            }

            for (samples, options) in channels {
                plot_ui.line(channel_line(samples, options));
            }
        });
}

/// Render the chart panel (combined, split, or fullscreen single channel).
///
/// Returns actions emitted by the per-plot controls.
pub fn render(
    view: &mut ChartView,
    model: &ModelStore,
    split: bool,
    ui: &mut Ui,
) -> Vec<AppAction> {
    let mut actions = Vec::new();

    let waveform = model.waveform();
    let active: Vec<&WaveformOptions> = model.active_options();

    if active.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(t!("chart_empty_hint")).weak());
        });
        return actions;
    }

    // Drop fullscreen if the channel vanished with a new waveform
    if let Some(channel) = view.fullscreen_channel.clone() {
        if !waveform.contains_channel(&channel) {
            view.fullscreen_channel = None;
        }
    }

    if let Some(channel) = view.fullscreen_channel.clone() {
        if let (Some(samples), Some(options)) = (
            waveform.get(&channel),
            active.iter().find(|o| o.label == channel),
        ) {
            fullscreen_header(view, ui, &channel, &mut actions);
            show_plot(view, ui, "waveform_fullscreen", &[(samples, options)]);
        }
    } else if split && active.len() > 1 {
        let plot_height =
            (ui.available_height() / active.len() as f32).max(120.0) - ui.spacing().item_spacing.y;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for options in &active {
                let Some(samples) = waveform.get(&options.label) else {
                    continue;
                };
                ui.allocate_ui(egui::vec2(ui.available_width(), plot_height), |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&options.label).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .small_button("⛶")
                                .on_hover_text(t!("tool_fullscreen"))
                                .clicked()
                            {
                                actions.push(AppAction::ToggleFullscreen(options.label.clone()));
                            }
                        });
                    });
                    show_plot(
                        view,
                        ui,
                        &format!("waveform_split_{}", options.label),
                        &[(samples, options)],
                    );
                });
            }
        });
    } else {
        let channels: Vec<(&[f64], &WaveformOptions)> = active
            .iter()
            .filter_map(|o| waveform.get(&o.label).map(|s| (s.as_slice(), *o)))
            .collect();
        show_plot(view, ui, "waveform_combined", &channels);
    }

    // One-shot flags are consumed by the frame that rendered them
    view.pending_zoom = None;
    view.reset_pending = false;

    actions
}

fn fullscreen_header(
    view: &ChartView,
    ui: &mut Ui,
    channel: &str,
    actions: &mut Vec<AppAction>,
) {
    debug_assert!(view.fullscreen_channel.as_deref() == Some(channel));
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(channel).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .small_button("⛶")
                .on_hover_text(t!("tool_exit_fullscreen"))
                .clicked()
            {
                actions.push(AppAction::ToggleFullscreen(channel.to_owned()));
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_pan_disables_drag_zoom() {
        let mut view = ChartView::default();
        view.toggle_drag_zoom(DragZoomMode::Xy);
        assert_eq!(view.drag_zoom, Some(DragZoomMode::Xy));
        assert!(!view.pan_enabled);

        view.toggle_pan();
        assert!(view.pan_enabled);
        assert!(view.drag_zoom.is_none());
    }

    #[test]
    fn test_toggle_same_drag_mode_turns_off() {
        let mut view = ChartView::default();
        view.toggle_drag_zoom(DragZoomMode::X);
        view.toggle_drag_zoom(DragZoomMode::X);
        assert!(view.drag_zoom.is_none());

        view.toggle_drag_zoom(DragZoomMode::X);
        view.toggle_drag_zoom(DragZoomMode::Y);
        assert_eq!(view.drag_zoom, Some(DragZoomMode::Y));
    }

    #[test]
    fn test_zoom_axes_follow_mode() {
        let mut view = ChartView::default();
        assert_eq!(view.allow_zoom_axes(), [true, true]);

        view.toggle_drag_zoom(DragZoomMode::X);
        assert_eq!(view.allow_zoom_axes(), [true, false]);

        view.toggle_drag_zoom(DragZoomMode::Y);
        assert_eq!(view.allow_zoom_axes(), [false, true]);
    }
}
