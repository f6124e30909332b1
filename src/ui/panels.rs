use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::data::model::{Beverage, Sex};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter toggles
// ---------------------------------------------------------------------------

/// Render the filter panel: the two mutually-exclusive toggle groups
/// plus the sort-order toggle. Any change refilters and re-renders the
/// chart immediately.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let now = ui.input(|i| i.time);

    ui.add_space(4.0);
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Gender toggle group ----
    ui.strong("Gender");
    ui.horizontal(|ui: &mut Ui| {
        for sex in Sex::ALL {
            if ui
                .selectable_label(state.selection.sex == sex, sex.label())
                .clicked()
            {
                state.set_sex(sex, now);
            }
        }
    });
    ui.separator();

    // ---- Beverage type toggle group ----
    ui.strong("Beverage type");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for beverage in Beverage::ALL {
            if ui
                .selectable_label(state.selection.beverage == beverage, beverage.label())
                .clicked()
            {
                state.set_beverage(beverage, now);
            }
        }
    });
    ui.separator();

    // ---- Sort toggle ----
    ui.strong("Sorting");
    if ui
        .selectable_label(state.chart.config.reverse_order, "Reverse order")
        .clicked()
    {
        state.toggle_sort_order(now);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state, ui.input(|i| i.time));
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} shown",
                ds.len(),
                state.chart.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, now: f64) {
    let file = rfd::FileDialog::new()
        .set_title("Open drinking survey data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} rows from {}", dataset.len(), path.display());
                state.set_dataset(dataset, now);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
