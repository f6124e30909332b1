mod app;
mod chart;
mod color;
mod data;
mod error;
mod state;
mod ui;

use app::DrinkVizApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1320.0, 820.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DrinkViz – State Drinking Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(DrinkVizApp::new()))),
    )
}
