//! Output layer: CSV tables and SVG comparison charts.

pub mod chart;
pub mod table;

pub use chart::render_charts;
pub use table::write_tables;
