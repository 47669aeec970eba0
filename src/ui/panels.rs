use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series overview
// ---------------------------------------------------------------------------

/// Render the left panel: one row per series with its color swatch and
/// sample count.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Series");
    ui.separator();

    if state.dataset.is_empty() {
        ui.label("No series loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, series) in state.dataset.series.iter().enumerate() {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(state.color_for(idx)));
                    ui.label(format!("series {}  ({} samples)", idx + 1, series.len()));
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} series from {}",
            state.dataset.len(),
            state.source.display()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Pick another log and load it. A parse failure leaves the current dataset
/// in place and surfaces the message in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open measurement log")
        .add_filter("Measurement logs", &["txt", "dat", "log"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::parser::parse_file(&path) {
            Ok(dataset) => {
                log::info!("loaded {} series from {}", dataset.len(), path.display());
                state.set_dataset(path, dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
