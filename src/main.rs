#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 640.0])
            .with_min_inner_size([800.0, 360.0])
            .with_title("Shift Timeline"),
        ..Default::default()
    };

    eframe::run_native(
        "Shift Timeline",
        options,
        Box::new(|cc| Ok(Box::new(app::ShiftApp::new(cc)))),
    )
}
