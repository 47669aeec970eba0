mod app;
mod color;
mod data;
mod state;
mod ui;

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use app::TraceviewApp;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: traceview <log-file>");
    };

    let dataset = data::parser::parse_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    log::info!("loaded {} series from {}", dataset.len(), path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    let state = AppState::new(path, dataset);
    eframe::run_native(
        "Traceview – Measurement Log Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(TraceviewApp::new(state)))),
    )
    .map_err(|e| anyhow!("starting ui: {e}"))
}
