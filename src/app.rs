use std::path::Path;

use anyhow::Context;
use eframe::egui;

use crate::data::loader;
use crate::data::model::DrinkingDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

/// Data file looked up at startup (the `generate_sample` binary writes
/// it).
pub const DEFAULT_DATA_PATH: &str = "data/us_drinking.csv";

fn load_default_data() -> anyhow::Result<DrinkingDataset> {
    let path = Path::new(DEFAULT_DATA_PATH);
    loader::load_file(path).with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DrinkVizApp {
    pub state: AppState,
}

impl DrinkVizApp {
    /// Build the app, loading the default dataset when present.
    pub fn new() -> Self {
        let mut state = AppState::default();

        if Path::new(DEFAULT_DATA_PATH).exists() {
            match load_default_data() {
                Ok(dataset) => {
                    log::info!("Loaded {} rows from {DEFAULT_DATA_PATH}", dataset.len());
                    state.set_dataset(dataset, 0.0);
                }
                Err(e) => {
                    log::error!("Failed to load startup data: {e:#}");
                    state.status_message = Some(format!("Error: {e:#}"));
                }
            }
        }

        DrinkVizApp { state }
    }
}

impl Default for DrinkVizApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for DrinkVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::bar_chart(ui, &self.state);
        });
    }
}
