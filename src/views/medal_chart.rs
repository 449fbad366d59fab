//! Medal count per Olympic event.

use super::dedup_records;
use crate::data::Dataset;
use crate::filter::{apply_only, FilterState, Predicate};
use std::collections::BTreeMap;

/// Bar of the medal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    /// Olympic event year.
    pub year: u16,
    /// Medals counted for that year.
    pub count: usize,
}

/// Bar series sorted by year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MedalChart {
    /// Bars in ascending year order.
    pub series: Vec<YearCount>,
}

impl MedalChart {
    /// Chart title.
    pub const TITLE: &'static str = "Number of medals won each olympic event";
    /// X axis label.
    pub const X_LABEL: &'static str = "Olympic events";
    /// Y axis label.
    pub const Y_LABEL: &'static str = "Number of Medals Won";

    /// Highest bar, or 0 for an empty chart.
    pub fn max_count(&self) -> usize {
        self.series.iter().map(|p| p.count).max().unwrap_or(0)
    }

    /// Position of a year in the series.
    pub fn position_of(&self, year: u16) -> Option<usize> {
        self.series.iter().position(|p| p.year == year)
    }
}

/// Count medals per year under the color and sport filters.
///
/// The year filter is never applied, so a clicked bar does not
/// collapse the chart. Rows are collapsed on
/// `(discipline, medal color, gender)`, without the year.
pub fn medal_chart(dataset: &Dataset, state: &FilterState) -> MedalChart {
    let rows = apply_only(
        dataset.all_records(),
        state,
        &[Predicate::Color, Predicate::Sport],
    );
    let rows = dedup_records(rows, |r| {
        (r.discipline.as_str(), r.medal_color, r.gender.as_str())
    });

    let mut by_year: BTreeMap<u16, usize> = BTreeMap::new();
    for row in rows {
        *by_year.entry(row.year).or_default() += 1;
    }

    MedalChart {
        series: by_year
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    }
}
