use crate::season::fixture::{Competition, Fixture};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GoalTally {
    pub scored: u32,
    pub conceded: u32,
    pub clean_sheets: u32,
}

impl GoalTally {
    fn add(&mut self, other: &GoalTally) {
        self.scored += other.scored;
        self.conceded += other.conceded;
        self.clean_sheets += other.clean_sheets;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalStats {
    pub by_competition: BTreeMap<Competition, GoalTally>,
}

impl GoalStats {
    pub fn get(&self, competition: Competition) -> GoalTally {
        self.by_competition
            .get(&competition)
            .copied()
            .unwrap_or_default()
    }

    pub fn total(&self) -> GoalTally {
        let mut total = GoalTally::default();
        for tally in self.by_competition.values() {
            total.add(tally);
        }
        total
    }
}

/// This season's goals for, goals against and clean sheets per competition.
///
/// A row whose score is not two dash-separated integers is left out here
/// and nowhere else.
pub fn goal_stats(fixtures: &[Fixture]) -> GoalStats {
    let mut stats = GoalStats::default();
    for fixture in fixtures.iter().filter(|f| !f.is_structural()) {
        let Some(competition) = fixture.competition else {
            continue;
        };
        let Some((scored, conceded)) = fixture.current.goals(fixture.venue) else {
            continue;
        };
        let tally = stats.by_competition.entry(competition).or_default();
        tally.scored += scored;
        tally.conceded += conceded;
        if fixture.current.is_clean_sheet(fixture.venue) {
            tally.clean_sheets += 1;
        }
    }
    stats
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalComparison {
    pub competition: Competition,
    pub current: GoalTally,
    pub prior: GoalTally,
}

/// One row per competition, in display order, against last season's numbers.
pub fn compare(current: &GoalStats, baseline: &BTreeMap<Competition, GoalTally>) -> Vec<GoalComparison> {
    Competition::ALL
        .iter()
        .map(|competition| GoalComparison {
            competition: *competition,
            current: current.get(*competition),
            prior: baseline.get(competition).copied().unwrap_or_default(),
        })
        .collect()
}

/// Which competitions and seasons the goals panel shows. Everything starts
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalSelection {
    competitions: [bool; Competition::ALL.len()],
    pub prior: bool,
    pub current: bool,
}

impl Default for GoalSelection {
    fn default() -> Self {
        Self {
            competitions: [true; Competition::ALL.len()],
            prior: true,
            current: true,
        }
    }
}

impl GoalSelection {
    fn slot(competition: Competition) -> usize {
        Competition::ALL
            .iter()
            .position(|c| *c == competition)
            .unwrap_or_default()
    }

    pub fn includes(&self, competition: Competition) -> bool {
        self.competitions[Self::slot(competition)]
    }

    pub fn toggle_competition(&mut self, competition: Competition) {
        let slot = Self::slot(competition);
        self.competitions[slot] = !self.competitions[slot];
    }

    pub fn toggle_prior(&mut self) {
        self.prior = !self.prior;
    }

    pub fn toggle_current(&mut self) {
        self.current = !self.current;
    }

    /// Rows for the selected competitions, in display order.
    pub fn rows<'a>(&self, rows: &'a [GoalComparison]) -> Vec<&'a GoalComparison> {
        rows.iter().filter(|r| self.includes(r.competition)).collect()
    }

    /// Current and prior totals over the selected competitions.
    pub fn totals(&self, rows: &[GoalComparison]) -> (GoalTally, GoalTally) {
        let total = |side: fn(&GoalComparison) -> GoalTally| {
            GoalStats {
                by_competition: self
                    .rows(rows)
                    .into_iter()
                    .map(|r| (r.competition, side(r)))
                    .collect(),
            }
            .total()
        };
        (total(|r| r.current), total(|r| r.prior))
    }
}
