//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod chart_panel;
pub mod footer;
pub mod header;
pub mod logs;
pub mod popup;
pub mod stats_grid;
