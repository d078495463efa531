//! Chart Plotter Module
//! Turns two DataFrame columns into an interactive egui_plot chart.

use crate::data::cell_text;
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};
use polars::prelude::*;
use thiserror::Error;

pub const SERIES_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

/// Fraction of the smallest X gap a bar occupies.
const BAR_FILL: f64 = 0.8;
const PLOT_HEIGHT_MIN: f32 = 240.0;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("no numeric values to plot for {y} vs {x}")]
    NoPlottableRows { x: String, y: String },
}

/// Chart style selected in the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    #[default]
    Line,
    Bar,
    Scatter,
}

impl PlotKind {
    pub const ALL: [PlotKind; 3] = [PlotKind::Line, PlotKind::Bar, PlotKind::Scatter];

    pub fn label(self) -> &'static str {
        match self {
            PlotKind::Line => "Line",
            PlotKind::Bar => "Bar",
            PlotKind::Scatter => "Scatter",
        }
    }
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub x_label: String,
    pub y_label: String,
    pub kind: PlotKind,
    /// `[x, y]` pairs in row order.
    pub points: Vec<[f64; 2]>,
    /// Tick labels when X is not numeric; points then sit at row positions.
    pub x_categories: Option<Vec<String>>,
}

impl ChartData {
    pub fn series_name(&self) -> String {
        format!("{} vs {}", self.y_label, self.x_label)
    }
}

/// Builds and draws charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Build chart data from `df[x_col]` and `df[y_col]`.
    ///
    /// Rows with a null/NaN Y (or null/NaN numeric X) are skipped.
    pub fn build(
        df: &DataFrame,
        x_col: &str,
        y_col: &str,
        kind: PlotKind,
    ) -> Result<ChartData, PlotError> {
        let x_series = df.column(x_col)?;
        let y_f64 = df.column(y_col)?.cast(&DataType::Float64)?;
        let y_ca = y_f64.f64()?;

        let mut points = Vec::with_capacity(df.height());
        let mut x_categories = None;

        if is_numeric(x_series.dtype()) {
            let x_f64 = x_series.cast(&DataType::Float64)?;
            let x_ca = x_f64.f64()?;
            for i in 0..df.height() {
                if let (Some(x), Some(y)) = (x_ca.get(i), y_ca.get(i)) {
                    if !x.is_nan() && !y.is_nan() {
                        points.push([x, y]);
                    }
                }
            }
        } else {
            let mut labels = Vec::with_capacity(df.height());
            for i in 0..df.height() {
                labels.push(
                    x_series
                        .get(i)
                        .map(|v| cell_text(&v))
                        .unwrap_or_default(),
                );
                if let Some(y) = y_ca.get(i) {
                    if !y.is_nan() {
                        points.push([i as f64, y]);
                    }
                }
            }
            x_categories = Some(labels);
        }

        if points.is_empty() {
            return Err(PlotError::NoPlottableRows {
                x: x_col.to_string(),
                y: y_col.to_string(),
            });
        }

        Ok(ChartData {
            x_label: x_col.to_string(),
            y_label: y_col.to_string(),
            kind,
            points,
            x_categories,
        })
    }

    /// Bar width: a fraction of the smallest gap between distinct X values.
    pub fn bar_width(points: &[[f64; 2]]) -> f64 {
        let mut xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        xs.dedup();

        let min_gap = xs
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold(f64::INFINITY, f64::min);

        if min_gap.is_finite() && min_gap > 0.0 {
            min_gap * BAR_FILL
        } else {
            BAR_FILL
        }
    }

    /// Draw `chart` filling the available space. `plot_id` must change
    /// whenever the chart is replaced so zoom state starts fresh.
    pub fn draw_chart(ui: &mut egui::Ui, chart: &ChartData, plot_id: &str) {
        let name = chart.series_name();
        let height = ui.available_height().max(PLOT_HEIGHT_MIN);

        let mut plot = Plot::new(plot_id)
            .height(height)
            .legend(Legend::default())
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone());

        if let Some(categories) = chart.x_categories.clone() {
            plot = plot.x_axis_formatter(move |mark, _range| {
                category_label(&categories, mark.value)
            });
        }

        plot.show(ui, |plot_ui| match chart.kind {
            PlotKind::Line => {
                plot_ui.line(
                    Line::new(PlotPoints::from(chart.points.clone()))
                        .color(SERIES_COLOR)
                        .width(1.5)
                        .name(&name),
                );
            }
            PlotKind::Scatter => {
                plot_ui.points(
                    Points::new(PlotPoints::from(chart.points.clone()))
                        .color(SERIES_COLOR)
                        .radius(3.0)
                        .name(&name),
                );
            }
            PlotKind::Bar => {
                let width = Self::bar_width(&chart.points);
                let bars: Vec<Bar> = chart
                    .points
                    .iter()
                    .map(|&[x, y]| Bar::new(x, y).width(width))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(SERIES_COLOR).name(&name));
            }
        });
    }
}

/// Tick label for a category axis. Only whole, in-range positions get text.
fn category_label(categories: &[String], value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 || (value - rounded).abs() > 1e-6 {
        return String::new();
    }
    categories
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}
