//! Charts module - Chart building and rendering

mod plotter;

pub use plotter::{ChartData, ChartPlotter, PlotKind};
