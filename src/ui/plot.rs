use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render every series as one line on the shared chart.
pub fn series_plot(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No series to plot  (File → Open…)");
        });
        return;
    }

    Plot::new("series_plot")
        .legend(Legend::default())
        .x_axis_label("Time")
        .y_axis_label("Force")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, series) in state.dataset.series.iter().enumerate() {
                let points: PlotPoints = series.points().collect();

                let line = Line::new(points)
                    .name(format!("series {}", idx + 1))
                    .color(state.color_for(idx))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
