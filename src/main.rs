//! WaveView - Main Entry Point
//!
//! Desktop waveform viewer: imports CSV/compressed transient files and
//! renders multi-channel line charts.

use waveview_rs::{
    config::AppState,
    frontend::WaveViewApp,
    io::LoaderBridge,
    types::ThemeMode,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,waveview_rs=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WaveView");

    // Load persisted UI preferences (theme mode, language)
    let app_state = AppState::load_or_default();
    waveview_rs::i18n::set_language(app_state.ui_preferences.language);

    // Spawn the background file loader thread
    let (bridge, worker) = LoaderBridge::new();
    let loader_handle = std::thread::spawn(move || worker.run());

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 680.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("WaveView")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // Run the eframe application
    let result = eframe::run_native(
        "WaveView",
        native_options,
        Box::new(move |cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_shadow.offset = [0, 0];
            cc.egui_ctx.set_style(style);

            match app_state.ui_preferences.theme {
                ThemeMode::Light => cc.egui_ctx.set_visuals(egui::Visuals::light()),
                ThemeMode::Dark => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
                ThemeMode::System => cc.egui_ctx.set_theme(egui::ThemePreference::System),
            }

            Ok(Box::new(WaveViewApp::new(cc, bridge, app_state)))
        }),
    );

    tracing::info!("Shutting down...");
    drop(loader_handle);

    result
}
