//! Ranked medalist table.

use super::{dedup_records, TableView};
use crate::data::{Dataset, MedalRecord};
use crate::filter::{apply, FilterState};
use std::cmp::Reverse;

/// Personal information of one medalist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedalistRow {
    /// Person identifier.
    pub person_id: String,
    /// Full name.
    pub name: String,
    /// Gender.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: String,
    /// Date of death, if any.
    pub date_of_death: Option<String>,
    /// Place of birth.
    pub place_of_birth: String,
    /// Place of death, if any.
    pub place_of_death: Option<String>,
}

impl From<&MedalRecord> for MedalistRow {
    fn from(r: &MedalRecord) -> Self {
        Self {
            person_id: r.person_id.clone(),
            name: r.name.clone(),
            gender: r.gender.clone(),
            date_of_birth: r.date_of_birth.clone(),
            date_of_death: r.date_of_death.clone(),
            place_of_birth: r.place_of_birth.clone(),
            place_of_death: r.place_of_death.clone(),
        }
    }
}

/// Medalists ordered by best placement, then by medal count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MedalistTable {
    /// One row per person.
    pub rows: Vec<MedalistRow>,
}

impl MedalistTable {
    /// Table title.
    pub const TITLE: &'static str = "Personal information about each medalist";

    /// Column headers.
    pub const COLUMNS: [&'static str; 6] = [
        "Name",
        "Gender",
        "Birthday",
        "Deathday",
        "Place of birth",
        "Place of death",
    ];

    /// Convert to a generic table payload.
    pub fn to_table(&self) -> TableView {
        TableView {
            title: Self::TITLE.to_string(),
            columns: Self::COLUMNS.to_vec(),
            rows: self
                .rows
                .iter()
                .map(|r| {
                    vec![
                        r.name.clone(),
                        r.gender.clone(),
                        r.date_of_birth.clone(),
                        r.date_of_death.clone().unwrap_or_default(),
                        r.place_of_birth.clone(),
                        r.place_of_death.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
        }
    }
}

/// Build the medalist table from the fully filtered records.
///
/// Rows are stably sorted by placement ascending and personal medal count
/// descending, then reduced to the first row of each person. Persons
/// without a rank sort last.
pub fn medalist_table(dataset: &Dataset, state: &FilterState) -> MedalistTable {
    let mut rows = apply(dataset.all_records(), state);
    rows.sort_by_key(|r| match dataset.rank_of(&r.person_id) {
        Some(rank) => (rank.placement.placement(), Reverse(rank.count)),
        None => (u8::MAX, Reverse(0)),
    });
    let rows = dedup_records(rows, |r| r.person_id.as_str());

    MedalistTable {
        rows: rows.into_iter().map(MedalistRow::from).collect(),
    }
}
