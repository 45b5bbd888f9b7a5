//! Frontend: egui application shell
//!
//! [`WaveViewApp`] owns the stores, the loader bridge, and all component
//! state. Components return [`AppAction`]s; `handle_action` is the single
//! place where actions turn into store commands, native dialogs, or
//! viewport commands.

use std::path::PathBuf;

use egui::Color32;
use image::{Rgba, RgbaImage};
use rust_i18n::t;

use crate::config::{AppState, UiPreferences};
use crate::error::{ResultExt, WaveViewError};
use crate::i18n::Language;
use crate::io::{self, LoaderBridge};
use crate::store::{ModelStore, ViewStore};
use crate::types::{dir_or_parent, FileRecord, ThemeMode, WaveformOptions};

pub mod chart;
pub mod dialogs;
pub mod drawer;
pub mod state;
pub mod toolbar;

pub use state::AppAction;

use chart::ChartView;
use dialogs::{
    show_dialog, ChartConfigAction, ChartConfigDialog, ChartConfigState, ConfirmAction,
    ConfirmDialog, ConfirmKind, ConfirmState, PreferencesAction, PreferencesDialog,
    PreferencesState,
};
use drawer::DrawerState;

/// File extensions accepted for import
const IMPORT_EXTENSIONS: [&str; 2] = ["csv", "gz"];

fn is_importable(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMPORT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
}

/// The main application
pub struct WaveViewApp {
    view: ViewStore,
    model: ModelStore,
    bridge: LoaderBridge,

    /// Loads requested but not yet answered; drives the loading flag
    pending_loads: usize,

    chart: ChartView,
    drawer: DrawerState,

    chart_config_open: bool,
    chart_config_state: ChartConfigState,
    preferences_state: PreferencesState,
    confirm_open: bool,
    confirm_state: ConfirmState,

    language: Language,
    awaiting_screenshot: bool,
    last_error: Option<String>,
}

impl WaveViewApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        bridge: LoaderBridge,
        app_state: AppState,
    ) -> Self {
        let mut view = ViewStore::new();
        view.set_theme(app_state.ui_preferences.theme);

        Self {
            view,
            model: ModelStore::new(),
            bridge,
            pending_loads: 0,
            chart: ChartView::default(),
            drawer: DrawerState::default(),
            chart_config_open: false,
            chart_config_state: ChartConfigState::default(),
            preferences_state: PreferencesState::default(),
            confirm_open: false,
            confirm_state: ConfirmState::default(),
            language: app_state.ui_preferences.language,
            awaiting_screenshot: false,
            last_error: None,
        }
    }

    /// Drain loader results and fold them into the model.
    ///
    /// Results are applied in arrival order; with overlapping loads the
    /// last applied one wins. Returns true if anything arrived.
    fn process_loader_results(&mut self) -> bool {
        let results = self.bridge.drain();
        if results.is_empty() {
            return false;
        }

        for result in results {
            self.pending_loads = self.pending_loads.saturating_sub(1);

            match result.result {
                Ok(waveform) => {
                    tracing::info!(
                        path = %result.file.path.display(),
                        channels = waveform.len(),
                        "waveform loaded"
                    );

                    let options: Vec<WaveformOptions> = waveform
                        .channels()
                        .enumerate()
                        .map(|(index, label)| WaveformOptions::for_channel(label, index))
                        .collect();

                    self.model.update_opened_file(result.file);
                    self.model.add_waveform_options(options);
                    self.model.update_waveform(waveform);
                }
                Err(e) => {
                    self.last_error =
                        Some(format!("{}: {}", result.file.name, e));
                }
            }
        }

        self.view.set_loading(self.pending_loads > 0);
        true
    }

    fn request_load(&mut self, file: FileRecord) {
        self.pending_loads += 1;
        self.view.set_loading(true);
        self.bridge.request_load(file);
    }

    fn import_paths(&mut self, paths: Vec<PathBuf>) {
        let records: Vec<FileRecord> = paths
            .into_iter()
            .filter(|p| is_importable(p))
            .map(|p| FileRecord::from_path(p))
            .collect();

        if records.is_empty() {
            return;
        }

        let first = records[0].clone();
        self.model.add_files(records);
        self.request_load(first);
    }

    fn apply_preferences(&mut self, ctx: &egui::Context, theme: ThemeMode, language: Language) {
        self.view.set_theme(theme);
        match theme {
            ThemeMode::Light => ctx.set_visuals(egui::Visuals::light()),
            ThemeMode::Dark => ctx.set_visuals(egui::Visuals::dark()),
            ThemeMode::System => ctx.set_theme(egui::ThemePreference::System),
        }

        if language != self.language {
            self.language = language;
            crate::i18n::set_language(language);
        }

        self.save_app_state();
    }

    fn save_app_state(&self) {
        let state = AppState {
            version: 1,
            ui_preferences: UiPreferences {
                theme: self.view.theme(),
                language: self.language,
            },
        };
        if let Err(e) = state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }

    fn export_csv(&mut self) {
        let Some(opened) = self.model.opened_file().cloned() else {
            return;
        };

        let stem = opened
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("waveform");

        let mut dialog = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(format!("{stem}-export.csv"));
        if let Some(dir) = dir_or_parent(&opened.path) {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            let csv = io::waveform_to_csv(self.model.waveform());
            let written = std::fs::write(&path, csv)
                .map_err(WaveViewError::from)
                .context("Export failed");
            match written {
                Ok(()) => tracing::info!(path = %path.display(), "waveform exported"),
                Err(e) => self.last_error = Some(e.to_string()),
            }
        }
    }

    fn save_screenshot(&mut self, image: &egui::ColorImage) {
        let egui::ColorImage {
            size: [w, h],
            pixels,
            ..
        } = image;

        let mut out = RgbaImage::new(*w as u32, *h as u32);
        for y in 0..*h {
            for x in 0..*w {
                let p = pixels[y * *w + x];
                out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
            }
        }

        let default_name = format!(
            "waveform-{}.png",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        let mut dialog = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(default_name);
        if let Some(dir) = self
            .model
            .opened_file()
            .and_then(|f| dir_or_parent(&f.path))
        {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            let saved = out
                .save(&path)
                .map_err(WaveViewError::from)
                .context("Image save failed");
            match saved {
                Ok(()) => tracing::info!(path = %path.display(), "screenshot saved"),
                Err(e) => self.last_error = Some(e.to_string()),
            }
        }
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: AppAction) {
        match action {
            AppAction::OpenFileDialog => {
                if let Some(paths) = rfd::FileDialog::new()
                    .add_filter("Waveform files", &IMPORT_EXTENSIONS)
                    .pick_files()
                {
                    self.import_paths(paths);
                }
            }
            AppAction::ImportPaths(paths) => self.import_paths(paths),
            AppAction::OpenFile(file) => self.request_load(file),

            AppAction::RequestDeleteFile(file) => {
                self.confirm_state = ConfirmState::for_kind(ConfirmKind::DeleteFile(file));
                self.confirm_open = true;
            }
            AppAction::RequestClearFiles => {
                self.confirm_state = ConfirmState::for_kind(ConfirmKind::ClearFiles);
                self.confirm_open = true;
            }
            AppAction::OpenContainingFolder(path) => {
                if let Err(e) = io::open_containing_folder(&path) {
                    self.last_error = Some(format!("{}", e));
                }
            }

            AppAction::ToggleDrawer => self.view.set_drawer(!self.view.drawer()),
            AppAction::ToggleSplit => self.view.set_split(!self.view.split()),
            AppAction::OpenPreferences => {
                self.preferences_state =
                    PreferencesState::from_current(self.view.theme(), self.language);
                self.view.set_preference(true);
            }
            AppAction::ApplyPreferences { theme, language } => {
                self.apply_preferences(ctx, theme, language);
            }

            AppAction::OpenChartConfig => {
                self.chart_config_state = ChartConfigState::from_options(self.model.active_options());
                self.chart_config_open = true;
            }
            AppAction::ApplyChartConfig(options) => {
                self.model.update_waveform_options(options);
            }
            AppAction::ExportCsv => self.export_csv(),
            AppAction::SaveImage => {
                self.awaiting_screenshot = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            }
            AppAction::ToggleFullscreen(channel) => {
                self.chart.fullscreen_channel =
                    if self.chart.fullscreen_channel.as_deref() == Some(channel.as_str()) {
                        None
                    } else {
                        Some(channel)
                    };
            }

            AppAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::O) && i.modifiers.command_only() {
                actions.push(AppAction::OpenFileDialog);
            }
            if i.key_pressed(egui::Key::D) && i.modifiers.command_only() {
                actions.push(AppAction::ToggleDrawer);
            }
            if i.key_pressed(egui::Key::N) && i.modifiers.command_only() {
                actions.push(AppAction::ToggleSplit);
            }
            if i.key_pressed(egui::Key::Comma) && i.modifiers.command_only() {
                actions.push(AppAction::OpenPreferences);
            }
        });

        for action in actions {
            self.handle_action(ctx, action);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        if !paths.is_empty() {
            self.handle_action(ctx, AppAction::ImportPaths(paths));
        }
    }

    fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        if !self.awaiting_screenshot {
            return;
        }

        let image = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        });

        if let Some(image) = image {
            self.awaiting_screenshot = false;
            self.save_screenshot(&image);
        }
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();

        if let Some(action) = show_dialog::<ChartConfigDialog>(
            ctx,
            &mut self.chart_config_open,
            &mut self.chart_config_state,
            (),
        ) {
            let ChartConfigAction::Apply(options) = action;
            actions.push(AppAction::ApplyChartConfig(options));
        }

        // The preferences flag lives in the view store; mirror it through
        // a local so the dialog helper can close it.
        let mut preferences_open = self.view.preference();
        if let Some(action) = show_dialog::<PreferencesDialog>(
            ctx,
            &mut preferences_open,
            &mut self.preferences_state,
            (),
        ) {
            let PreferencesAction::Apply { theme, language } = action;
            actions.push(AppAction::ApplyPreferences { theme, language });
        }
        if preferences_open != self.view.preference() {
            self.view.set_preference(preferences_open);
        }

        if let Some(ConfirmAction::Confirm(kind)) =
            show_dialog::<ConfirmDialog>(ctx, &mut self.confirm_open, &mut self.confirm_state, ())
        {
            match kind {
                ConfirmKind::DeleteFile(file) => self.model.delete_file(file),
                ConfirmKind::ClearFiles => self.model.clear_files(),
            }
        }

        for action in actions {
            self.handle_action(ctx, action);
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button(t!("menu_file"), |ui| {
                    if ui.button(t!("menu_file_open")).clicked() {
                        actions.push(AppAction::OpenFileDialog);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button(t!("menu_file_quit")).clicked() {
                        actions.push(AppAction::Quit);
                        ui.close();
                    }
                });

                ui.menu_button(t!("menu_view"), |ui| {
                    if ui
                        .selectable_label(self.view.drawer(), t!("menu_view_drawer"))
                        .clicked()
                    {
                        actions.push(AppAction::ToggleDrawer);
                        ui.close();
                    }
                    if ui
                        .selectable_label(self.view.split(), t!("menu_view_split"))
                        .clicked()
                    {
                        actions.push(AppAction::ToggleSplit);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button(t!("menu_view_preferences")).clicked() {
                        actions.push(AppAction::OpenPreferences);
                        ui.close();
                    }
                });
            });
        });

        for action in actions {
            self.handle_action(ctx, action);
        }
    }

    fn render_error_bar(&mut self, ctx: &egui::Context) {
        if self.last_error.is_none() {
            return;
        }

        let mut dismiss = false;
        egui::TopBottomPanel::bottom("error_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(error) = &self.last_error {
                    ui.colored_label(Color32::LIGHT_RED, error);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        dismiss = true;
                    }
                });
            });
        });

        if dismiss {
            self.last_error = None;
        }
    }
}

impl eframe::App for WaveViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let had_results = self.process_loader_results();
        if had_results || self.view.loading() {
            ctx.request_repaint();
        }

        self.handle_keyboard_shortcuts(ctx);
        self.handle_dropped_files(ctx);
        self.handle_screenshot_events(ctx);

        self.render_menu_bar(ctx);
        self.render_error_bar(ctx);

        let mut actions = Vec::new();

        if self.view.drawer() {
            egui::SidePanel::left("drawer")
                .resizable(true)
                .default_width(220.0)
                .show(ctx, |ui| {
                    actions.extend(drawer::render(&mut self.drawer, &self.model, ui));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(toolbar::render(&mut self.chart, &self.model, ui));
            ui.separator();
            let split = self.view.split();
            actions.extend(chart::render(&mut self.chart, &self.model, split, ui));
        });

        if self.view.loading() {
            egui::Area::new(egui::Id::new("loading_overlay"))
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.add(egui::Spinner::new().size(32.0));
                });
        }

        self.render_dialogs(ctx);

        for action in actions {
            self.handle_action(ctx, action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_app_state();
    }
}
