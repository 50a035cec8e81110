//! UI modules for the Olympics Dashboard application.
//!
//! The UI is split into distinct panels:
//! - Top bar: title, loading indicator, error banner, and status
//! - Left panel: data source controls
//! - Central canvas: statistics and the medal pie chart
//! - Detail page: per-country participation breakdown

pub mod colors;
mod detail;
mod left_panel;
mod pie_chart;
mod top_bar;

pub use detail::render_detail;
pub use left_panel::render_left_panel;
pub use pie_chart::render_dashboard;
pub use top_bar::render_top_bar;
