//! Application configuration.
//! Compile-time defaults for the window and the preview region.

use eframe::egui;
use std::path::PathBuf;

/// Data file loaded on startup when present in the working directory.
pub const DEFAULT_DATA_FILE: &str = "power_usage_2016_to_2020.csv";

/// Rows shown in the preview until the user changes it.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// Upper bound of the row-count control.
pub const MAX_PREVIEW_ROWS: usize = 500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub preview_rows: usize,
    pub max_preview_rows: usize,
    /// Loaded once on startup if the file exists.
    pub startup_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Power Usage Plotting App".to_string(),
            inner_size: [1200.0, 800.0],
            min_inner_size: [800.0, 600.0],
            preview_rows: DEFAULT_PREVIEW_ROWS,
            max_preview_rows: MAX_PREVIEW_ROWS,
            startup_file: Some(PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }
}

impl AppConfig {
    /// Build the eframe window options.
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size)
                .with_title(&self.window_title),
            ..Default::default()
        }
    }

    /// Clamp a requested preview row count into the supported range.
    pub fn clamp_preview_rows(&self, rows: usize) -> usize {
        rows.clamp(1, self.max_preview_rows.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.preview_rows, 20);
        assert_eq!(config.window_title, "Power Usage Plotting App");
        assert_eq!(
            config.startup_file.as_deref(),
            Some(std::path::Path::new(DEFAULT_DATA_FILE))
        );
    }

    #[test]
    fn test_clamp_preview_rows() {
        let config = AppConfig::default();
        assert_eq!(config.clamp_preview_rows(0), 1);
        assert_eq!(config.clamp_preview_rows(5), 5);
        assert_eq!(config.clamp_preview_rows(10_000), MAX_PREVIEW_ROWS);
    }
}
