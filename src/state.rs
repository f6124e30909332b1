use crate::chart::{Chart, ChartConfig};
use crate::data::filter::{filtered_records, FilterSelection};
use crate::data::model::{Beverage, DrinkingDataset, Sex};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded corpus (None until a file is loaded).
    pub dataset: Option<DrinkingDataset>,

    /// Current mutually-exclusive toggle selections.
    pub selection: FilterSelection,

    /// The chart component, driven by the filtered view.
    pub chart: Chart,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let chart = Chart::new(ChartConfig::default(), &[])
            .expect("the built-in chart configuration is valid");
        AppState {
            dataset: None,
            selection: FilterSelection::default(),
            chart,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded corpus and rebind the chart.
    pub fn set_dataset(&mut self, dataset: DrinkingDataset, now: f64) {
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter(now);
    }

    /// Re-run the filter and push the fresh view into the chart.
    pub fn refilter(&mut self, now: f64) {
        if let Some(ds) = &self.dataset {
            let view = filtered_records(ds, self.selection);
            self.chart.update(&view, now);
        }
    }

    /// Switch the active sex toggle.
    pub fn set_sex(&mut self, sex: Sex, now: f64) {
        if self.selection.sex != sex {
            self.selection.sex = sex;
            self.refilter(now);
        }
    }

    /// Switch the active beverage toggle.
    pub fn set_beverage(&mut self, beverage: Beverage, now: f64) {
        if self.selection.beverage != beverage {
            self.selection.beverage = beverage;
            self.refilter(now);
        }
    }

    /// Flip the sort toggle. Flipping twice restores the original
    /// order.
    pub fn toggle_sort_order(&mut self, now: f64) {
        self.chart.config.reverse_order = !self.chart.config.reverse_order;
        self.refilter(now);
    }
}
