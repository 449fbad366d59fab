//! View synthesizer scenarios.

mod common;

use common::{mixed, record, sailing_and_rowing};
use medalboard::data::{Dataset, MedalColor};
use medalboard::filter::{ColorFilter, FilterState};
use medalboard::views::{
    discipline_table, medal_chart, medalist_table, word_cloud, DisciplineTable, MedalistTable,
    YearCount,
};

#[test]
fn word_cloud_counts_deduplicated_rows_per_sport() {
    let dataset = sailing_and_rowing();
    let words = word_cloud(&dataset, &FilterState::new());

    let triples: Vec<(&str, usize, &str)> = words
        .iter()
        .map(|w| (w.sport.as_str(), w.count, w.label.as_str()))
        .collect();
    assert_eq!(
        triples,
        vec![
            ("Sailing", 3, "Sailing: 3 medals"),
            ("Rowing", 1, "Rowing: 1 medals"),
        ]
    );
}

#[test]
fn word_cloud_is_empty_in_detail_mode() {
    let dataset = sailing_and_rowing();
    let mut state = FilterState::new();
    state.select_sport("Rowing");
    assert!(word_cloud(&dataset, &state).is_empty());
}

#[test]
fn word_cloud_respects_color_and_year() {
    let dataset = mixed();
    let mut state = FilterState::new();
    state.set_color(ColorFilter::Only(MedalColor::Gold));
    state.select_year(2016);

    let words = word_cloud(&dataset, &state);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].sport, "Rowing");
    assert_eq!(words[0].count, 1);
}

#[test]
fn word_cloud_and_chart_use_different_dedup_keys() {
    // Same discipline, color and gender in two different years.
    let dataset = Dataset::from_records(vec![
        record("1", "Male", "Sailing", "Finn", MedalColor::Gold, 1948),
        record("2", "Male", "Sailing", "Finn", MedalColor::Gold, 1952),
        record("3", "Female", "Sailing", "Finn", MedalColor::Gold, 1952),
    ]);
    let state = FilterState::new();

    assert_eq!(word_cloud(&dataset, &state)[0].count, 3);
    assert_eq!(
        medal_chart(&dataset, &state).series,
        vec![
            YearCount {
                year: 1948,
                count: 1
            },
            YearCount {
                year: 1952,
                count: 1
            },
        ]
    );
}

#[test]
fn chart_is_sorted_by_year_and_spans_all_years() {
    let dataset = mixed();
    let mut state = FilterState::new();
    state.select_year(2000);

    let years: Vec<u16> = medal_chart(&dataset, &state)
        .series
        .iter()
        .map(|p| p.year)
        .collect();
    assert_eq!(years, vec![1952, 1988, 2000, 2016]);
}

#[test]
fn chart_respects_sport() {
    let dataset = mixed();
    let mut state = FilterState::new();
    state.select_sport("Rowing");

    let chart = medal_chart(&dataset, &state);
    assert_eq!(chart.series, vec![YearCount { year: 2016, count: 1 }]);
    assert_eq!(chart.max_count(), 1);
}

#[test]
fn discipline_table_is_sorted_and_titled() {
    let dataset = mixed();
    let mut state = FilterState::new();
    assert!(discipline_table(&dataset, &state).is_none());

    state.select_sport("Sailing");
    let table = discipline_table(&dataset, &state).expect("sport selected");
    let disciplines: Vec<&str> = table.rows.iter().map(|r| r.discipline.as_str()).collect();
    assert_eq!(disciplines, vec!["470", "Finn", "Laser"]);

    let view = table.to_table();
    assert_eq!(view.title, "Disciplines of Sailing");
    assert_eq!(view.columns, DisciplineTable::COLUMNS.to_vec());
    assert_eq!(view.rows[1], vec!["Finn", "Person 1", "gold", "1952"]);
}

#[test]
fn medalists_order_by_placement_then_count() {
    // Encounter order is the reverse of the expected ranking.
    let dataset = Dataset::from_records(vec![
        record("d", "Male", "Rowing", "Four", MedalColor::Bronze, 2000),
        record("c", "Male", "Rowing", "Pair", MedalColor::Silver, 2000),
        record("c", "Male", "Rowing", "Pair", MedalColor::Silver, 2004),
        record("b", "Male", "Rowing", "Single", MedalColor::Silver, 1996),
        record("b", "Male", "Rowing", "Single", MedalColor::Silver, 2000),
        record("b", "Male", "Rowing", "Single", MedalColor::Silver, 2004),
        record("a", "Male", "Rowing", "Double", MedalColor::Gold, 2008),
    ]);

    let table = medalist_table(&dataset, &FilterState::new());
    let order: Vec<&str> = table.rows.iter().map(|r| r.person_id.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c", "d"]);
}

#[test]
fn medalist_rank_uses_the_whole_career() {
    let dataset = Dataset::from_records(vec![
        record("1", "Male", "Sailing", "Finn", MedalColor::Bronze, 1948),
        record("2", "Male", "Sailing", "Star", MedalColor::Bronze, 1948),
        record("2", "Male", "Sailing", "Star", MedalColor::Gold, 1952),
    ]);
    let mut state = FilterState::new();
    state.set_color(ColorFilter::Only(MedalColor::Bronze));

    let table = medalist_table(&dataset, &state);
    let order: Vec<&str> = table.rows.iter().map(|r| r.person_id.as_str()).collect();
    assert_eq!(order, vec!["2", "1"]);
}

#[test]
fn medalist_table_has_bio_columns() {
    let dataset = sailing_and_rowing();
    let view = medalist_table(&dataset, &FilterState::new()).to_table();

    assert_eq!(view.title, MedalistTable::TITLE);
    assert_eq!(view.columns.len(), 6);
    assert_eq!(view.rows.len(), 4);
    assert_eq!(view.rows[0][0], "Person 1");
    assert!(view.to_tsv().starts_with("Name\tGender\tBirthday"));
}
