//! Medal record types.

use std::fmt;
use std::str::FromStr;

/// Color of an Olympic medal.
///
/// The derived ordering follows placement: gold sorts before silver,
/// silver before bronze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MedalColor {
    /// First place.
    Gold,
    /// Second place.
    Silver,
    /// Third place.
    Bronze,
}

impl MedalColor {
    /// All colors in placement order.
    pub const ALL: [MedalColor; 3] = [MedalColor::Gold, MedalColor::Silver, MedalColor::Bronze];

    /// Placement ordinal: gold = 1, silver = 2, bronze = 3.
    pub fn placement(self) -> u8 {
        match self {
            MedalColor::Gold => 1,
            MedalColor::Silver => 2,
            MedalColor::Bronze => 3,
        }
    }

    /// Lowercase name as it appears in the medal file.
    pub fn as_str(self) -> &'static str {
        match self {
            MedalColor::Gold => "gold",
            MedalColor::Silver => "silver",
            MedalColor::Bronze => "bronze",
        }
    }

    /// Capitalized name for selector labels.
    pub fn label(self) -> &'static str {
        match self {
            MedalColor::Gold => "Gold",
            MedalColor::Silver => "Silver",
            MedalColor::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for MedalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MedalColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(MedalColor::Gold),
            "silver" => Ok(MedalColor::Silver),
            "bronze" => Ok(MedalColor::Bronze),
            other => Err(other.to_string()),
        }
    }
}

/// One row of the joined people/medal table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedalRecord {
    /// Person identifier (the join key).
    pub person_id: String,
    /// Full name.
    pub name: String,
    /// Gender as recorded in the people file.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: String,
    /// Date of death, if any.
    pub date_of_death: Option<String>,
    /// Place of birth.
    pub place_of_birth: String,
    /// Place of death, if any.
    pub place_of_death: Option<String>,
    /// Sport, e.g. "Sailing".
    pub sport: String,
    /// Discipline within the sport.
    pub discipline: String,
    /// Medal color.
    pub medal_color: MedalColor,
    /// Year of the Olympic event.
    pub year: u16,
}
