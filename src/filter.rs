//! Composite filter state and the filter engine.
//!
//! The dashboard narrows the dataset with three independent predicates:
//! medal color, Olympic event year and sport. [`FilterState`] holds their
//! current values and [`apply`] narrows a record slice with all of them,
//! always in the fixed order color, year, sport.

use crate::data::{MedalColor, MedalRecord};
use std::fmt;

/// Medal color selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFilter {
    /// No color restriction.
    #[default]
    All,
    /// Only medals of one color.
    Only(MedalColor),
}

impl ColorFilter {
    /// Check whether a medal color passes this filter.
    pub fn matches(self, color: MedalColor) -> bool {
        match self {
            ColorFilter::All => true,
            ColorFilter::Only(c) => c == color,
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            ColorFilter::All => "All",
            ColorFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the three predicates of the composite filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Medal color predicate.
    Color,
    /// Olympic event year predicate.
    Year,
    /// Sport predicate.
    Sport,
}

impl Predicate {
    /// All predicates in application order.
    pub const ALL: [Predicate; 3] = [Predicate::Color, Predicate::Year, Predicate::Sport];
}

/// The composite filter owned by a dashboard controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Medal color selection.
    pub medal_color: ColorFilter,
    /// Year picked from the medal chart.
    pub selected_year: Option<u16>,
    /// Sport picked from the word cloud.
    pub selected_sport: Option<String>,
}

impl FilterState {
    /// Create the initial state with no restrictions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the medal color selection.
    pub fn set_color(&mut self, color: ColorFilter) {
        self.medal_color = color;
    }

    /// Select an Olympic event year.
    pub fn select_year(&mut self, year: u16) {
        self.selected_year = Some(year);
    }

    /// Select a sport.
    pub fn select_sport(&mut self, sport: impl Into<String>) {
        self.selected_sport = Some(sport.into());
    }

    /// Reset the medal color to `All`.
    pub fn clear_color(&mut self) {
        self.medal_color = ColorFilter::All;
    }

    /// Clear the year selection.
    pub fn clear_year(&mut self) {
        self.selected_year = None;
    }

    /// Clear the sport selection.
    pub fn clear_sport(&mut self) {
        self.selected_sport = None;
    }

    /// Clear every predicate, one at a time.
    pub fn clear_all(&mut self) {
        self.clear_color();
        self.clear_year();
        self.clear_sport();
    }

    /// Whether a sport is selected and the discipline detail view is shown.
    pub fn detail_mode(&self) -> bool {
        self.selected_sport.is_some()
    }

    /// Whether no predicate narrows the data.
    pub fn is_unfiltered(&self) -> bool {
        self.medal_color == ColorFilter::All
            && self.selected_year.is_none()
            && self.selected_sport.is_none()
    }

    /// Check a single predicate against a record.
    pub fn passes(&self, predicate: Predicate, record: &MedalRecord) -> bool {
        match predicate {
            Predicate::Color => self.medal_color.matches(record.medal_color),
            Predicate::Year => self.selected_year.map_or(true, |y| record.year == y),
            Predicate::Sport => self
                .selected_sport
                .as_deref()
                .map_or(true, |s| record.sport == s),
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color={}", self.medal_color)?;
        match self.selected_year {
            Some(year) => write!(f, " year={}", year)?,
            None => write!(f, " year=-")?,
        }
        match &self.selected_sport {
            Some(sport) => write!(f, " sport={}", sport),
            None => write!(f, " sport=-"),
        }
    }
}

/// Narrow `records` with every predicate of `state`.
pub fn apply<'a>(records: &'a [MedalRecord], state: &FilterState) -> Vec<&'a MedalRecord> {
    apply_only(records, state, &Predicate::ALL)
}

/// Narrow `records` with a subset of the predicates of `state`.
///
/// Predicates are applied in the fixed order color, year, sport regardless
/// of the order they are listed in.
pub fn apply_only<'a>(
    records: &'a [MedalRecord],
    state: &FilterState,
    predicates: &[Predicate],
) -> Vec<&'a MedalRecord> {
    let mut rows: Vec<&MedalRecord> = records.iter().collect();
    for predicate in Predicate::ALL {
        if predicates.contains(&predicate) {
            rows.retain(|r| state.passes(predicate, r));
        }
    }
    rows
}
