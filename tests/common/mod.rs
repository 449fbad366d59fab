//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use medalboard::data::{Dataset, MedalColor, MedalRecord};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const PEOPLE_CSV: &str = "\
id,name,gender,date_of_birth,date_of_death,place_of_birth,place_of_death
1,Paul Elvstrøm,Male,1928-02-25,2016-12-07,Hellerup,Hellerup
2,Jesper Bank,Male,1957-06-05,,Aabenraa,
3,Jan Mathiasen,Male,1955-03-14,,Svendborg,
4,Eskild Ebbesen,Male,1972-05-27,,Silkeborg,
";

pub const MEDALS_CSV: &str = "\
id,sport,discipline,medal_color,year
1,Sailing,Firefly,gold,1948
1,Sailing,Finn,gold,1952
2,Sailing,Soling,silver,1988
3,Sailing,Soling,silver,1988
4,Rowing,Lightweight Four,bronze,2000
";

/// Write both CSV files into a fresh temporary directory.
pub fn write_sources(people: &str, medals: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let people_path = dir.path().join("First_clean.csv");
    let medals_path = dir.path().join("Second_clean.csv");
    fs::write(&people_path, people).expect("write people");
    fs::write(&medals_path, medals).expect("write medals");
    (dir, people_path, medals_path)
}

/// Build a record with placeholder personal information.
pub fn record(
    person_id: &str,
    gender: &str,
    sport: &str,
    discipline: &str,
    medal_color: MedalColor,
    year: u16,
) -> MedalRecord {
    MedalRecord {
        person_id: person_id.to_string(),
        name: format!("Person {}", person_id),
        gender: gender.to_string(),
        date_of_birth: "1950-01-01".to_string(),
        date_of_death: None,
        place_of_birth: "Aarhus".to_string(),
        place_of_death: None,
        sport: sport.to_string(),
        discipline: discipline.to_string(),
        medal_color,
        year,
    }
}

/// Sailing with three distinct medals and Rowing with one.
pub fn sailing_and_rowing() -> Dataset {
    Dataset::from_records(vec![
        record("1", "Male", "Sailing", "Firefly", MedalColor::Gold, 1948),
        record("1", "Male", "Sailing", "Finn", MedalColor::Gold, 1952),
        record("2", "Male", "Sailing", "Soling", MedalColor::Silver, 1988),
        record("3", "Male", "Sailing", "Soling", MedalColor::Silver, 1988),
        record("4", "Male", "Rowing", "Lightweight Four", MedalColor::Bronze, 2000),
    ])
}

/// A wider dataset mixing colors, genders, years and sports.
pub fn mixed() -> Dataset {
    Dataset::from_records(vec![
        record("1", "Male", "Sailing", "Finn", MedalColor::Gold, 1952),
        record("2", "Female", "Sailing", "470", MedalColor::Silver, 2016),
        record("3", "Male", "Sailing", "Laser", MedalColor::Bronze, 2016),
        record("4", "Male", "Rowing", "Lightweight Four", MedalColor::Gold, 2016),
        record("5", "Male", "Rowing", "Lightweight Four", MedalColor::Gold, 2016),
        record("6", "Female", "Cycling", "Track", MedalColor::Silver, 1988),
        record("7", "Male", "Cycling", "Road", MedalColor::Bronze, 1952),
        record("8", "Female", "Handball", "Team", MedalColor::Gold, 2000),
    ])
}
