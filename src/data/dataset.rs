//! The loaded, joined dataset.

use super::{MedalColor, MedalRank, MedalRankTable, MedalRecord};
use crate::filter::ColorFilter;
use std::path::PathBuf;

/// Immutable joined dataset shared by every dashboard session.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Path to the people file, if loaded from disk.
    pub people_path: Option<PathBuf>,
    /// Path to the medal file, if loaded from disk.
    pub medals_path: Option<PathBuf>,
    records: Vec<MedalRecord>,
    ranks: MedalRankTable,
    colors: Vec<MedalColor>,
}

impl Dataset {
    /// Create a dataset from joined records and a precomputed rank table.
    ///
    /// `colors` are the distinct medal colors of the medal source in
    /// encounter order.
    pub fn new(records: Vec<MedalRecord>, ranks: MedalRankTable, colors: Vec<MedalColor>) -> Self {
        Self {
            people_path: None,
            medals_path: None,
            records,
            ranks,
            colors,
        }
    }

    /// Build a dataset directly from joined records.
    ///
    /// The rank table and color list are derived from the records themselves.
    pub fn from_records(records: Vec<MedalRecord>) -> Self {
        let ranks = MedalRankTable::build(
            records
                .iter()
                .map(|r| (r.person_id.as_str(), r.medal_color)),
        );
        let mut colors = Vec::new();
        for record in &records {
            if !colors.contains(&record.medal_color) {
                colors.push(record.medal_color);
            }
        }
        Self::new(records, ranks, colors)
    }

    /// All joined records.
    pub fn all_records(&self) -> &[MedalRecord] {
        &self.records
    }

    /// Rank of a person.
    pub fn rank_of(&self, person_id: &str) -> Option<MedalRank> {
        self.ranks.rank_of(person_id)
    }

    /// Options for the medal color selector, ending with `All`.
    pub fn color_options(&self) -> Vec<ColorFilter> {
        self.colors
            .iter()
            .map(|&c| ColorFilter::Only(c))
            .chain(std::iter::once(ColorFilter::All))
            .collect()
    }

    /// Number of joined records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
