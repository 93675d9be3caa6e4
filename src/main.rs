mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use app::HeatVizApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "heatviz", about = "Animate time-stamped 2D temperature samples")]
struct Cli {
    /// CSV file: header line, then rows of timestamp, x, y, temperature
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dataset = data::loader::load_csv(&cli.file)?;
    log::info!(
        "Loaded {} samples across {} frames from {}",
        dataset.len(),
        dataset.frame_count(),
        cli.file.display()
    );

    let app_state = AppState::new(dataset, cli.file);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Heatviz – Temperature Field Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(HeatVizApp::new(app_state)))),
    )
    .map_err(|e| anyhow!("failed to start viewer: {e}"))
}
