//! Data loading and representation.
//!
//! This module reads the people and medal CSV files, joins them on the
//! person identifier and derives the per-person medal ranking.

mod dataset;
mod rank;
mod reader;
mod record;

pub use dataset::Dataset;
pub use rank::{MedalRank, MedalRankTable};
pub use reader::{DataReader, MEDAL_COLUMNS, PEOPLE_COLUMNS};
pub use record::{MedalColor, MedalRecord};
