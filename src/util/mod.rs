//! Utility functions.
//!
//! This module provides layout configuration and clipboard export helpers.

mod export;
mod layout_config;

pub use export::copy_table;
pub use layout_config::{ChartLayoutConfig, LayoutConfig, PanelLayoutConfig, TableLayoutConfig};
