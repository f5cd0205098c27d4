mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::LaunchboardApp;
use eframe::egui;

/// Dataset read when no path is given on the command line.
const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // Startup load is fatal: without a dataset there is nothing to show.
    let dataset = match data::loader::load_file(&path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            eprintln!("launchboard: failed to load {}: {e:#}", path.display());
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launch records from {} ({} sites)",
        dataset.len(),
        path.display(),
        dataset.distinct_sites.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launchboard – Launch Records",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchboardApp::new(dataset)))),
    )
}
