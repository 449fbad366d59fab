//! Discipline detail table for a selected sport.

use super::TableView;
use crate::data::{Dataset, MedalColor};
use crate::filter::{apply, FilterState};

/// One medal of the selected sport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineRow {
    /// Discipline name.
    pub discipline: String,
    /// Medalist name.
    pub name: String,
    /// Medal color.
    pub medal_color: MedalColor,
    /// Olympic event year.
    pub year: u16,
}

/// Medals of the selected sport, sorted by discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineTable {
    /// The selected sport.
    pub sport: String,
    /// Table rows.
    pub rows: Vec<DisciplineRow>,
}

impl DisciplineTable {
    /// Column headers.
    pub const COLUMNS: [&'static str; 4] = ["Discipline", "Name", "Medal Color", "Olympic Event"];

    /// Table title.
    pub fn title(&self) -> String {
        format!("Disciplines of {}", self.sport)
    }

    /// Convert to a generic table payload.
    pub fn to_table(&self) -> TableView {
        TableView {
            title: self.title(),
            columns: Self::COLUMNS.to_vec(),
            rows: self
                .rows
                .iter()
                .map(|r| {
                    vec![
                        r.discipline.clone(),
                        r.name.clone(),
                        r.medal_color.to_string(),
                        r.year.to_string(),
                    ]
                })
                .collect(),
        }
    }
}

/// Build the discipline table; `None` unless a sport is selected.
pub fn discipline_table(dataset: &Dataset, state: &FilterState) -> Option<DisciplineTable> {
    let sport = state.selected_sport.as_ref()?;

    let mut rows = apply(dataset.all_records(), state);
    rows.sort_by(|a, b| a.discipline.cmp(&b.discipline));

    Some(DisciplineTable {
        sport: sport.clone(),
        rows: rows
            .into_iter()
            .map(|r| DisciplineRow {
                discipline: r.discipline.clone(),
                name: r.name.clone(),
                medal_color: r.medal_color,
                year: r.year,
            })
            .collect(),
    })
}
