//! Chart Viewer Widget
//! The plot container: holds and draws the single current chart.

use crate::charts::{ChartData, ChartPlotter};
use egui::RichText;

/// Holds at most one chart. Replacing it discards the old one.
#[derive(Default)]
pub struct ChartViewer {
    chart: Option<ChartData>,
    /// Bumped on every replacement so egui_plot drops zoom/pan memory.
    generation: u64,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current chart and show `chart` instead.
    pub fn replace(&mut self, chart: ChartData) {
        self.generation += 1;
        self.chart = Some(chart);
    }

    #[cfg(test)]
    pub fn chart(&self) -> Option<&ChartData> {
        self.chart.as_ref()
    }

    #[cfg(test)]
    pub fn chart_count(&self) -> usize {
        usize::from(self.chart.is_some())
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(chart) = &self.chart else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Chart").size(20.0));
            });
            return;
        };

        ui.label(RichText::new(chart.series_name()).size(16.0).strong());
        ui.add_space(6.0);
        ChartPlotter::draw_chart(ui, chart, &format!("chart_{}", self.generation));
    }
}
