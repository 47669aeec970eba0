use std::path::PathBuf;

use eframe::egui::Color32;

use crate::color::series_palette;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Series parsed from the current log.
    pub dataset: Dataset,

    /// Path of the log currently shown.
    pub source: PathBuf,

    /// One color per series, regenerated whenever a log is loaded.
    pub palette: Vec<Color32>,

    /// Error message shown in the top bar after a failed reload.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state from the dataset parsed at startup.
    pub fn new(source: PathBuf, dataset: Dataset) -> Self {
        let palette = series_palette(dataset.len());
        Self {
            dataset,
            source,
            palette,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset, replacing the current one.
    pub fn set_dataset(&mut self, source: PathBuf, dataset: Dataset) {
        self.palette = series_palette(dataset.len());
        self.dataset = dataset;
        self.source = source;
        self.status_message = None;
    }

    /// Color for the series at `index`.
    pub fn color_for(&self, index: usize) -> Color32 {
        self.palette.get(index).copied().unwrap_or(Color32::GRAY)
    }
}
