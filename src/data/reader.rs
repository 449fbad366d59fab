//! CSV reader for the people and medal files.

use super::{Dataset, MedalColor, MedalRankTable, MedalRecord};
use crate::error::{MedalboardError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Columns required in the people file.
pub const PEOPLE_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "gender",
    "date_of_birth",
    "date_of_death",
    "place_of_birth",
    "place_of_death",
];

/// Columns required in the medal file.
pub const MEDAL_COLUMNS: [&str; 5] = ["id", "sport", "discipline", "medal_color", "year"];

#[derive(Debug, serde::Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    gender: String,
    date_of_birth: String,
    date_of_death: Option<String>,
    place_of_birth: String,
    place_of_death: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct MedalRow {
    id: String,
    sport: String,
    discipline: String,
    medal_color: String,
    year: String,
}

/// Medal row after validation.
#[derive(Debug)]
struct ParsedMedal {
    id: String,
    sport: String,
    discipline: String,
    color: MedalColor,
    year: u16,
}

/// Reader for the bundled medalist data.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Load both files and join them on the `id` column.
    pub fn load(people_path: &Path, medals_path: &Path) -> Result<Dataset> {
        let people = Self::read_people(people_path)?;
        let medals = Self::read_medals(medals_path)?;
        tracing::debug!(
            people = people.len(),
            medals = medals.len(),
            "Read source files"
        );

        let ranks = MedalRankTable::build(medals.iter().map(|m| (m.id.as_str(), m.color)));

        let mut colors = Vec::new();
        for medal in &medals {
            if !colors.contains(&medal.color) {
                colors.push(medal.color);
            }
        }

        let records = Self::join(&people, &medals);
        if records.is_empty() {
            return Err(MedalboardError::EmptyJoin {
                people: people_path.to_path_buf(),
                medals: medals_path.to_path_buf(),
            });
        }

        let mut dataset = Dataset::new(records, ranks, colors);
        dataset.people_path = Some(people_path.to_path_buf());
        dataset.medals_path = Some(medals_path.to_path_buf());

        tracing::info!(records = dataset.len(), "Dataset loaded");
        Ok(dataset)
    }

    /// Inner join in people-file order, medal-file order within a person.
    fn join(people: &[PersonRow], medals: &[ParsedMedal]) -> Vec<MedalRecord> {
        let mut by_person: HashMap<&str, Vec<&ParsedMedal>> = HashMap::new();
        for medal in medals {
            by_person.entry(medal.id.as_str()).or_default().push(medal);
        }

        let mut records = Vec::new();
        for person in people {
            let Some(person_medals) = by_person.get(person.id.as_str()) else {
                continue;
            };
            for medal in person_medals {
                records.push(MedalRecord {
                    person_id: person.id.clone(),
                    name: person.name.clone(),
                    gender: person.gender.clone(),
                    date_of_birth: person.date_of_birth.clone(),
                    date_of_death: person.date_of_death.clone(),
                    place_of_birth: person.place_of_birth.clone(),
                    place_of_death: person.place_of_death.clone(),
                    sport: medal.sport.clone(),
                    discipline: medal.discipline.clone(),
                    medal_color: medal.color,
                    year: medal.year,
                });
            }
        }
        records
    }

    fn read_people(path: &Path) -> Result<Vec<PersonRow>> {
        let mut reader = Self::open(path, &PEOPLE_COLUMNS)?;
        let mut rows = Vec::new();
        for result in reader.deserialize::<PersonRow>() {
            rows.push(result.map_err(|e| MedalboardError::csv(path.to_path_buf(), e))?);
        }
        Ok(rows)
    }

    fn read_medals(path: &Path) -> Result<Vec<ParsedMedal>> {
        let mut reader = Self::open(path, &MEDAL_COLUMNS)?;
        let mut rows = Vec::new();
        for (idx, result) in reader.deserialize::<MedalRow>().enumerate() {
            let row = result.map_err(|e| MedalboardError::csv(path.to_path_buf(), e))?;

            let color = row
                .medal_color
                .parse::<MedalColor>()
                .map_err(|value| MedalboardError::InvalidValue {
                    path: path.to_path_buf(),
                    field: "medal_color",
                    value,
                    row: idx + 1,
                })?;
            let year = row
                .year
                .trim()
                .parse::<u16>()
                .map_err(|_| MedalboardError::InvalidValue {
                    path: path.to_path_buf(),
                    field: "year",
                    value: row.year.clone(),
                    row: idx + 1,
                })?;

            rows.push(ParsedMedal {
                id: row.id,
                sport: row.sport,
                discipline: row.discipline,
                color,
                year,
            });
        }
        Ok(rows)
    }

    /// Open a CSV file and check that its header carries `required` columns.
    fn open(path: &Path, required: &[&str]) -> Result<csv::Reader<File>> {
        let file = File::open(path).map_err(|e| MedalboardError::file_open(path.to_path_buf(), e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| MedalboardError::csv(path.to_path_buf(), e))?
            .clone();
        for column in required {
            if !headers.iter().any(|h| h == *column) {
                return Err(MedalboardError::missing_column(path.to_path_buf(), *column));
            }
        }

        Ok(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const PEOPLE: &str = "\
id,name,gender,date_of_birth,date_of_death,place_of_birth,place_of_death
1,Paul Elvstrøm,Male,1928-02-25,2016-12-07,Hellerup,Hellerup
2,Jesper Bank,Male,1957-06-05,,Aabenraa,
3,Nobody Medals,Female,1990-01-01,,Odense,
";

    const MEDALS: &str = "\
id,sport,discipline,medal_color,year,event
2,Sailing,Soling,gold,1992,x
1,Sailing,Firefly,gold,1948,x
1,Sailing,Finn,Gold,1952,x
9,Rowing,Single Sculls,bronze,2000,x
2,Sailing,Soling,bronze,1988,x
";

    #[test]
    fn joins_in_people_order_and_keeps_medal_order() {
        let dir = tempfile::tempdir().unwrap();
        let people = write_file(&dir, "people.csv", PEOPLE);
        let medals = write_file(&dir, "medals.csv", MEDALS);

        let dataset = DataReader::load(&people, &medals).unwrap();
        let summary: Vec<(&str, u16)> = dataset
            .all_records()
            .iter()
            .map(|r| (r.person_id.as_str(), r.year))
            .collect();

        assert_eq!(summary, vec![("1", 1948), ("1", 1952), ("2", 1992), ("2", 1988)]);
        assert_eq!(dataset.all_records()[2].date_of_death, None);
        assert_eq!(
            dataset.all_records()[0].date_of_death.as_deref(),
            Some("2016-12-07")
        );
    }

    #[test]
    fn ranks_come_from_the_whole_medal_file() {
        let dir = tempfile::tempdir().unwrap();
        let people = write_file(&dir, "people.csv", PEOPLE);
        let medals = write_file(&dir, "medals.csv", MEDALS);

        let dataset = DataReader::load(&people, &medals).unwrap();

        let rank = dataset.rank_of("1").unwrap();
        assert_eq!(rank.placement, MedalColor::Gold);
        assert_eq!(rank.count, 2);
        assert_eq!(dataset.rank_of("9").unwrap().placement, MedalColor::Bronze);
        assert_eq!(
            dataset.color_options(),
            vec![
                crate::filter::ColorFilter::Only(MedalColor::Gold),
                crate::filter::ColorFilter::Only(MedalColor::Bronze),
                crate::filter::ColorFilter::All,
            ]
        );
    }

    #[test]
    fn missing_join_key_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let people = write_file(&dir, "people.csv", PEOPLE);
        let medals = write_file(
            &dir,
            "medals.csv",
            "person,sport,discipline,medal_color,year\n1,Sailing,Finn,gold,1952\n",
        );

        let err = DataReader::load(&people, &medals).unwrap_err();
        assert!(matches!(err, MedalboardError::MissingColumn { ref column, .. } if column == "id"));
    }

    #[test]
    fn unknown_medal_color_reports_row() {
        let dir = tempfile::tempdir().unwrap();
        let people = write_file(&dir, "people.csv", PEOPLE);
        let medals = write_file(
            &dir,
            "medals.csv",
            "id,sport,discipline,medal_color,year\n1,Sailing,Finn,gold,1952\n1,Sailing,Finn,tin,1956\n",
        );

        let err = DataReader::load(&people, &medals).unwrap_err();
        assert!(matches!(
            err,
            MedalboardError::InvalidValue { field: "medal_color", row: 2, .. }
        ));
    }
}
