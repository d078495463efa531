//! Data module - CSV loading and preview rendering

mod loader;
mod preview;

pub use loader::DataLoader;
pub use preview::cell_text;
