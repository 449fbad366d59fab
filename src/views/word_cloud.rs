//! Word cloud of sports.

use super::dedup_records;
use crate::data::Dataset;
use crate::filter::{apply_only, FilterState, Predicate};

/// One word of the sport cloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Sport name.
    pub sport: String,
    /// Number of distinct medal rows for the sport.
    pub count: usize,
    /// Hover label, `"<sport>: <count> medals"`.
    pub label: String,
}

impl WordEntry {
    fn new(sport: &str, count: usize) -> Self {
        Self {
            sport: sport.to_string(),
            count,
            label: format!("{}: {} medals", sport, count),
        }
    }
}

/// Count medals per sport under the color and year filters.
///
/// The sport filter is never applied here, and the cloud is empty once a
/// sport is selected. Rows are collapsed on
/// `(discipline, medal color, year, gender)` so that team events count once.
pub fn word_cloud(dataset: &Dataset, state: &FilterState) -> Vec<WordEntry> {
    if state.detail_mode() {
        return Vec::new();
    }

    let rows = apply_only(
        dataset.all_records(),
        state,
        &[Predicate::Color, Predicate::Year],
    );
    let rows = dedup_records(rows, |r| {
        (r.discipline.as_str(), r.medal_color, r.year, r.gender.as_str())
    });

    // Sports keep first-encounter order.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for row in rows {
        match counts.iter_mut().find(|(sport, _)| *sport == row.sport) {
            Some((_, count)) => *count += 1,
            None => counts.push((row.sport.as_str(), 1)),
        }
    }

    counts
        .into_iter()
        .map(|(sport, count)| WordEntry::new(sport, count))
        .collect()
}
