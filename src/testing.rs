//! Record builders shared by unit tests.

use crate::data::{Dataset, MedalColor, MedalRecord};

/// A male medalist with placeholder bio fields.
pub(crate) fn record(
    person_id: &str,
    sport: &str,
    discipline: &str,
    medal_color: MedalColor,
    year: u16,
) -> MedalRecord {
    MedalRecord {
        person_id: person_id.to_string(),
        name: format!("Person {}", person_id),
        gender: "Male".to_string(),
        date_of_birth: "1900-01-01".to_string(),
        date_of_death: None,
        place_of_birth: "København".to_string(),
        place_of_death: None,
        sport: sport.to_string(),
        discipline: discipline.to_string(),
        medal_color,
        year,
    }
}

/// Sailing with three distinct medals (one of them a two-person crew) and
/// Rowing with one.
pub(crate) fn sailing_and_rowing() -> Dataset {
    Dataset::from_records(vec![
        record("1", "Sailing", "Firefly", MedalColor::Gold, 1948),
        record("1", "Sailing", "Finn", MedalColor::Gold, 1952),
        record("2", "Sailing", "Soling", MedalColor::Silver, 1988),
        record("3", "Sailing", "Soling", MedalColor::Silver, 1988),
        record("4", "Rowing", "Lightweight Four", MedalColor::Bronze, 2000),
    ])
}
