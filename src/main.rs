mod app;
mod auth;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use app::PartnershipApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Matriz de Partnership",
        options,
        Box::new(|_cc| Ok(Box::new(PartnershipApp::default()))),
    )
}
