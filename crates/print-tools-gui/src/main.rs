#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod painter;
mod ui_components;
mod views;
mod worker;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(500);
    logger.clone().init()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Print Tools"),
        ..Default::default()
    };

    eframe::run_native(
        "Print Tools",
        options,
        Box::new(move |cc| Ok(Box::new(app::PrintToolsApp::new(cc, handle, logger)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the editor: {e}"))
}
