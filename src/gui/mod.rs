//! GUI module - Interactive histogram window

mod app;

pub use app::HistogramView;

use app::HistogramApp;

use crate::config::Settings;
use eframe::egui;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to open window: {0}")]
    Window(String),
}

/// Open the histogram window and block until it is closed.
pub fn show_histogram(settings: &Settings, view: HistogramView) -> Result<(), ViewerError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([640.0, 400.0])
            .with_title(&settings.window_title),
        ..Default::default()
    };

    log::info!("Opening histogram window");
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(|cc| Ok(Box::new(HistogramApp::new(cc, view)))),
    )
    .map_err(|e| ViewerError::Window(e.to_string()))?;

    log::info!("Histogram window closed");
    Ok(())
}
