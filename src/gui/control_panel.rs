//! Control Panel Widget
//! Left side panel with file selection, column pickers and plot options.

use crate::charts::PlotKind;
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Current user selections. Never persisted.
#[derive(Default, Clone)]
pub struct UserSettings {
    pub csv_path: Option<PathBuf>,
    pub x_col: String,
    pub y_col: String,
    pub kind: PlotKind,
    pub preview_rows: usize,
}

/// Left side control panel.
pub struct ControlPanel {
    pub settings: UserSettings,
    /// Always exactly the loaded dataset's column names.
    pub columns: Vec<String>,
    max_preview_rows: usize,
}

impl ControlPanel {
    pub fn new(preview_rows: usize, max_preview_rows: usize) -> Self {
        Self {
            settings: UserSettings {
                preview_rows,
                ..UserSettings::default()
            },
            columns: Vec::new(),
            max_preview_rows,
        }
    }

    /// Replace the combo box contents after a successful load.
    /// Selections that are not columns of the new dataset are cleared.
    pub fn update_columns(&mut self, columns: Vec<String>) {
        if !columns.contains(&self.settings.x_col) {
            self.settings.x_col.clear();
        }
        if !columns.contains(&self.settings.y_col) {
            self.settings.y_col.clear();
        }
        self.columns = columns;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📈 Power Plot")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let path_text = self
                    .settings
                    .csv_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "No file selected".to_string());

                let path_color = if self.settings.csv_path.is_some() {
                    ui.visuals().strong_text_color()
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(&path_text).size(12.0).color(path_color));

                ui.add_space(4.0);
                if ui.button("📂 Browse File").clicked() {
                    action = ControlPanelAction::BrowseFile;
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Column Selection =====
        ui.label(RichText::new("🔧 Columns").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 70.0;
        let combo_width = 170.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("X-axis:"));
            Self::column_combo(ui, "x_col", combo_width, &self.columns, &mut self.settings.x_col);
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Y-axis:"));
            Self::column_combo(ui, "y_col", combo_width, &self.columns, &mut self.settings.y_col);
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Plot type:"));
            ComboBox::from_id_salt("plot_kind")
                .width(combo_width)
                .selected_text(self.settings.kind.label())
                .show_ui(ui, |ui| {
                    for kind in PlotKind::ALL {
                        ui.selectable_value(&mut self.settings.kind, kind, kind.label());
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Preview Options =====
        ui.label(RichText::new("👁 Preview").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Rows:"));
            let response = ui.add(
                egui::DragValue::new(&mut self.settings.preview_rows)
                    .range(1..=self.max_preview_rows)
                    .speed(1.0),
            );
            if response.changed() {
                action = ControlPanelAction::PreviewRowsChanged;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("▶ Plot").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::Plot;
            }
        });

        action
    }

    fn column_combo(
        ui: &mut egui::Ui,
        id: &str,
        width: f32,
        columns: &[String],
        selected: &mut String,
    ) {
        ComboBox::from_id_salt(id)
            .width(width)
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for col in columns {
                    if ui.selectable_label(*selected == *col, col).clicked() {
                        *selected = col.clone();
                    }
                }
            });
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseFile,
    PreviewRowsChanged,
    Plot,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_update_columns_keeps_valid_selection() {
        let mut panel = ControlPanel::new(20, 500);
        panel.update_columns(cols(&["A", "B"]));
        panel.settings.x_col = "A".to_string();
        panel.settings.y_col = "B".to_string();

        panel.update_columns(cols(&["B", "C"]));
        assert_eq!(panel.columns, cols(&["B", "C"]));
        assert!(panel.settings.x_col.is_empty());
        assert_eq!(panel.settings.y_col, "B");
    }

    #[test]
    fn test_new_defaults() {
        let panel = ControlPanel::new(5, 500);
        assert_eq!(panel.settings.preview_rows, 5);
        assert_eq!(panel.settings.kind, PlotKind::Line);
        assert!(panel.columns.is_empty());
    }
}
