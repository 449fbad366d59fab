//! Per-person medal ranking.

use super::MedalColor;
use std::collections::HashMap;

/// A person's best placement and how many medals of that color they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedalRank {
    /// Best medal color won.
    pub placement: MedalColor,
    /// Number of medals of that color.
    pub count: usize,
}

/// Mapping from person identifier to [`MedalRank`].
#[derive(Debug, Clone, Default)]
pub struct MedalRankTable {
    ranks: HashMap<String, MedalRank>,
}

impl MedalRankTable {
    /// Build the table from `(person_id, color)` pairs, one per medal row.
    pub fn build<'a, I>(medals: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, MedalColor)>,
    {
        let mut tallies: HashMap<&'a str, [usize; 3]> = HashMap::new();
        for (person_id, color) in medals {
            let slot = usize::from(color.placement() - 1);
            tallies.entry(person_id).or_default()[slot] += 1;
        }

        let ranks = tallies
            .into_iter()
            .filter_map(|(person_id, tally)| {
                MedalColor::ALL
                    .iter()
                    .zip(tally)
                    .find(|(_, count)| *count > 0)
                    .map(|(&placement, count)| (person_id.to_string(), MedalRank { placement, count }))
            })
            .collect();

        Self { ranks }
    }

    /// Look up the rank of a person.
    pub fn rank_of(&self, person_id: &str) -> Option<MedalRank> {
        self.ranks.get(person_id).copied()
    }

    /// Number of ranked persons.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether no person is ranked.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_color_wins_with_its_own_count() {
        let table = MedalRankTable::build([
            ("p1", MedalColor::Bronze),
            ("p1", MedalColor::Silver),
            ("p1", MedalColor::Silver),
            ("p1", MedalColor::Bronze),
            ("p1", MedalColor::Bronze),
        ]);

        assert_eq!(
            table.rank_of("p1"),
            Some(MedalRank {
                placement: MedalColor::Silver,
                count: 2
            })
        );
    }

    #[test]
    fn unknown_person_has_no_rank() {
        let table = MedalRankTable::build([("p1", MedalColor::Gold)]);
        assert_eq!(table.len(), 1);
        assert!(table.rank_of("p2").is_none());
    }
}
