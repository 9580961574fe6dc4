mod app;
mod color;
mod constants;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::VoltageViewerApp;
use constants::{FILTER_WINDOW_SIZE, SAMPLE_FILE_NAME, WINDOW_MIN_SIZE, WINDOW_SIZE, WINDOW_TITLE};
use data::filter::FilteredSignals;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let file_path = sample_file_path()?;
    let cwd = std::env::current_dir().context("reading current directory")?;
    println!("Current folder: {}", cwd.display());
    println!("Sampling file: {}", file_path.display());

    let samples = data::loader::load_file(&file_path)?;
    let filtered = FilteredSignals::compute(&samples.values, FILTER_WINDOW_SIZE);
    let state = AppState::new(file_path, &samples, &filtered)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(VoltageViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer window: {e}"))
}

/// The dump file lives next to the executable, whatever the working directory.
fn sample_file_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("{} has no parent directory", exe.display()))?;
    Ok(dir.join(SAMPLE_FILE_NAME))
}
