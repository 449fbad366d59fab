//! View synthesizers.
//!
//! Each synthesizer is a pure function of the dataset and the current
//! [`FilterState`]. [`synthesize`] runs all four and bundles the result in a
//! [`Snapshot`], which is everything the render surface needs to draw one
//! frame of the dashboard.

mod disciplines;
mod medal_chart;
mod medalists;
mod word_cloud;

pub use disciplines::{discipline_table, DisciplineRow, DisciplineTable};
pub use medal_chart::{medal_chart, MedalChart, YearCount};
pub use medalists::{medalist_table, MedalistRow, MedalistTable};
pub use word_cloud::{word_cloud, WordEntry};

use crate::data::{Dataset, MedalRecord};
use crate::filter::FilterState;
use std::collections::HashSet;
use std::hash::Hash;

/// Panel shown on the left side of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPanel {
    /// Aggregate word cloud of sports.
    WordCloud,
    /// Per-discipline rows for the selected sport.
    Disciplines,
}

/// Generic table payload for a render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Table title.
    pub title: String,
    /// Column headers.
    pub columns: Vec<&'static str>,
    /// Cell text, one inner vector per row.
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Render as tab-separated values with a header line.
    pub fn to_tsv(&self) -> String {
        let mut out = self.columns.join("\t");
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// All synthesized views for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Filter the views were built from.
    pub state: FilterState,
    /// Word cloud entries; empty in detail mode.
    pub word_cloud: Vec<WordEntry>,
    /// Discipline detail table; present only in detail mode.
    pub disciplines: Option<DisciplineTable>,
    /// Medal count per year.
    pub medal_chart: MedalChart,
    /// Ranked medalists.
    pub medalists: MedalistTable,
}

impl Snapshot {
    /// Which left panel is visible.
    pub fn detail_panel(&self) -> DetailPanel {
        if self.disciplines.is_some() {
            DetailPanel::Disciplines
        } else {
            DetailPanel::WordCloud
        }
    }

    /// Plain-text rendering of every view.
    pub fn to_text(&self) -> String {
        let mut out = format!("Filter: {}\n\n", self.state);

        match &self.disciplines {
            Some(table) => {
                out.push_str(&format!("== {} ==\n", table.title()));
                out.push_str(&table.to_table().to_tsv());
            },
            None => {
                out.push_str("== Wordcloud of Sport ==\n");
                for entry in &self.word_cloud {
                    out.push_str(&entry.label);
                    out.push('\n');
                }
            },
        }

        out.push_str(&format!("\n== {} ==\n", MedalChart::TITLE));
        for point in &self.medal_chart.series {
            out.push_str(&format!("{}\t{}\n", point.year, point.count));
        }

        out.push_str(&format!("\n== {} ==\n", MedalistTable::TITLE));
        out.push_str(&self.medalists.to_table().to_tsv());
        out
    }
}

/// Run every synthesizer against `state`.
pub fn synthesize(dataset: &Dataset, state: &FilterState) -> Snapshot {
    let snapshot = Snapshot {
        state: state.clone(),
        word_cloud: word_cloud(dataset, state),
        disciplines: discipline_table(dataset, state),
        medal_chart: medal_chart(dataset, state),
        medalists: medalist_table(dataset, state),
    };
    tracing::debug!(
        filter = %state,
        words = snapshot.word_cloud.len(),
        years = snapshot.medal_chart.series.len(),
        medalists = snapshot.medalists.rows.len(),
        "Synthesized views"
    );
    snapshot
}

/// Keep the first record for every distinct key.
pub(crate) fn dedup_records<'a, K, F>(rows: Vec<&'a MedalRecord>, key: F) -> Vec<&'a MedalRecord>
where
    K: Eq + Hash,
    F: Fn(&'a MedalRecord) -> K,
{
    let mut seen = HashSet::new();
    rows.into_iter().filter(|r| seen.insert(key(*r))).collect()
}
