//! Medalboard - a terminal cross-filter dashboard over Danish Olympic medalists.
//!
//! Medalboard joins a people file and a medal file into one in-memory table
//! and shows four linked views of it: a word cloud of sports, a discipline
//! table for a selected sport, a medal-count chart per Olympic event and a
//! ranked medalist table. Three independent filters (medal color, event year
//! and sport) narrow every view at once.
//!
//! # Features
//!
//! - CSV loading with an inner join on the person identifier
//! - A single transition function from (filter, event) to the next filter
//! - Resets that clear exactly the filter they name
//! - Pure view synthesizers, re-run in full after every event
//! - Gruvbox color themes and TSV clipboard export
//!
//! # Example
//!
//! ```ignore
//! use medalboard::controller::{Controller, DashboardEvent, ResetTarget};
//! use medalboard::data::DataReader;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let dataset = DataReader::load(Path::new("First_clean.csv"), Path::new("Second_clean.csv"))?;
//! let mut controller = Controller::new(Arc::new(dataset));
//!
//! controller.dispatch(DashboardEvent::SportClicked("Sailing".into()));
//! controller.dispatch(DashboardEvent::Reset(ResetTarget::Sport));
//! println!("{} sports", controller.snapshot().word_cloud.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod controller;
pub mod data;
pub mod error;
pub mod filter;
pub mod ui;
pub mod util;
pub mod views;

#[cfg(test)]
mod testing;

pub use error::{MedalboardError, Result};
