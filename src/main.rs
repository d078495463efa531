//! Power Plot - CSV Preview & Interactive Chart Plotter
//!
//! Pick a CSV file, preview its first rows, choose two columns and draw
//! them as a line, bar or scatter chart.

mod charts;
mod config;
mod data;
mod gui;

use config::AppConfig;
use gui::PlotApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting power_plot");

    let config = AppConfig::default();
    let options = config.native_options();
    let title = config.window_title.clone();

    // Blocks until the window is closed
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(PlotApp::new(cc, config)))),
    )
}
