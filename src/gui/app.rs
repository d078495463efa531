//! Power Plot Main Application
//! Main window with control panel, data preview and the plot container.

use crate::charts::ChartPlotter;
use crate::config::AppConfig;
use crate::data::DataLoader;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::{RichText, ScrollArea, SidePanel, TopBottomPanel};
use std::path::Path;

const MISSING_SELECTION_WARNING: &str = "\nPlease select X and Y columns!";

/// Main application window.
///
/// Every operation runs to completion inside the frame callback that
/// triggered it.
pub struct PlotApp {
    config: AppConfig,
    loader: DataLoader,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    /// Text of the preview region: the table head, or a load error.
    preview_text: String,
}

impl PlotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self::with_config(config);

        if let Some(path) = app.config.startup_file.clone() {
            if path.is_file() {
                app.control_panel.settings.csv_path = Some(path.clone());
                app.load_data(&path);
            } else {
                log::debug!("Startup file {} not found, skipping", path.display());
            }
        }

        app
    }

    /// Build the app state without a window.
    pub fn with_config(config: AppConfig) -> Self {
        let rows = config.clamp_preview_rows(config.preview_rows);
        Self {
            control_panel: ControlPanel::new(rows, config.max_preview_rows),
            config,
            loader: DataLoader::new(),
            chart_viewer: ChartViewer::new(),
            preview_text: String::new(),
        }
    }

    /// Ask for a CSV file and load it.
    fn browse_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .pick_file()
        else {
            log::debug!("File dialog cancelled");
            return;
        };

        self.control_panel.settings.csv_path = Some(path.clone());
        self.load_data(&path);
    }

    /// Load `path` into the dataset. Failures end up in the preview text,
    /// leaving the previous dataset and column lists in place.
    pub fn load_data(&mut self, path: &Path) {
        let result = self.loader.load_csv(path).map(|_| ());

        match result {
            Ok(()) => {
                let columns = self.loader.get_columns();
                log::info!(
                    "Loaded {}: {} rows, {} columns",
                    path.display(),
                    self.loader.get_row_count(),
                    columns.len()
                );
                self.control_panel.update_columns(columns);
                self.refresh_preview();
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", path.display(), e);
                self.preview_text = format!("Error loading file: {}", e);
            }
        }
    }

    /// Plot the selected Y column against the selected X column.
    pub fn plot_data(&mut self) {
        let settings = &self.control_panel.settings;
        let (x_col, y_col, kind) = (settings.x_col.clone(), settings.y_col.clone(), settings.kind);

        if x_col.is_empty() || y_col.is_empty() {
            log::warn!("Plot requested without X/Y selection");
            self.preview_text.push_str(MISSING_SELECTION_WARNING);
            return;
        }

        let Some(df) = self.loader.get_dataframe() else {
            self.preview_text.push_str(MISSING_SELECTION_WARNING);
            return;
        };

        match ChartPlotter::build(df, &x_col, &y_col, kind) {
            Ok(chart) => {
                log::info!(
                    "Plotting {} vs {} as {} ({} points)",
                    y_col,
                    x_col,
                    kind.label(),
                    chart.points.len()
                );
                self.chart_viewer.replace(chart);
            }
            Err(e) => {
                log::warn!("Cannot plot {} vs {}: {}", y_col, x_col, e);
                self.preview_text
                    .push_str(&format!("\nCannot plot {} vs {}: {}", y_col, x_col, e));
            }
        }
    }

    /// Re-render the preview from the current dataset with the current row limit.
    pub fn set_preview_rows(&mut self, rows: usize) {
        self.control_panel.settings.preview_rows = self.config.clamp_preview_rows(rows);
        self.refresh_preview();
    }

    fn refresh_preview(&mut self) {
        let rows = self.control_panel.settings.preview_rows;
        if let Ok(text) = self.loader.preview(rows) {
            self.preview_text = text;
        }
    }

    #[cfg(test)]
    pub fn preview_text(&self) -> &str {
        &self.preview_text
    }

    fn show_preview(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Data Preview:").size(14.0).strong());
        ui.add_space(4.0);

        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .rounding(5.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(RichText::new(&self.preview_text).monospace())
                                .extend(),
                        );
                    });
            });
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::BrowseFile => self.browse_file(),
                        ControlPanelAction::PreviewRowsChanged => {
                            let rows = self.control_panel.settings.preview_rows;
                            self.set_preview_rows(rows);
                        }
                        ControlPanelAction::Plot => self.plot_data(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Top panel - Data Preview
        TopBottomPanel::top("preview")
            .resizable(true)
            .default_height(260.0)
            .min_height(120.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.show_preview(ui);
            });

        // Central panel - Plot container
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
