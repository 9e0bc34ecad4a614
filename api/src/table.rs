//! Ranked, sortable standings tables.
//!
//! Both feed shapes end up as a [`StandingsTable`]: the flat league table keeps
//! the rank ESPN reports, the grouped competition is flattened and re-ranked
//! globally. Sorting is shared by both.
use crate::{StandingsEntry, StandingsKind, StatKey};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            SortDirection::Ascending => '▲',
            SortDirection::Descending => '▼',
        }
    }
}

/// Active sort column and direction for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: StatKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: StatKey::Rank,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    /// Sort reducer: requesting the active key flips its direction, any other
    /// key starts in that key's default direction.
    pub fn request(current: Option<SortState>, key: StatKey) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key,
                direction: state.direction.flip(),
            },
            _ => SortState {
                key,
                direction: key.default_direction(),
            },
        }
    }

    pub fn toggled(self, key: StatKey) -> SortState {
        Self::request(Some(self), key)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedRow {
    pub rank: u32,
    pub entry: StandingsEntry,
}

impl RankedRow {
    fn value(&self, key: StatKey) -> f64 {
        match key {
            StatKey::Rank => f64::from(self.rank),
            _ => self.entry.stat_value(key),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StandingsTable {
    pub kind: StandingsKind,
    /// Rows in rank order.
    pub rows: Vec<RankedRow>,
    /// True when any team in the whole table carries recent results.
    pub has_form_data: bool,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl StandingsTable {
    pub fn empty(kind: StandingsKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Flat league table. The feed's own `rank` statistic is kept when every
    /// entry carries a usable one; otherwise the whole table is ranked by
    /// position in the feed.
    pub fn flat(entries: Vec<StandingsEntry>) -> Self {
        let reported = |entry: &StandingsEntry| {
            let value = entry.stat_value(StatKey::Rank);
            (entry.has_stat(StatKey::Rank) && value >= 1.0).then_some(value as u32)
        };
        let trust_feed = entries.iter().all(|e| reported(e).is_some());

        let mut rows: Vec<RankedRow> = entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                let rank = match reported(&entry) {
                    Some(rank) if trust_feed => rank,
                    _ => idx as u32 + 1,
                };
                RankedRow { rank, entry }
            })
            .collect();
        rows.sort_by_key(|r| r.rank);
        Self::from_rows(StandingsKind::Flat, rows)
    }

    /// Grouped competition: every group's entries are flattened and given a
    /// global rank by points, goal difference, goals for, then team name.
    pub fn grouped(groups: Vec<Vec<StandingsEntry>>) -> Self {
        let mut entries: Vec<StandingsEntry> = groups.into_iter().flatten().collect();
        entries.sort_by(compare_global);
        let rows = entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| RankedRow {
                rank: idx as u32 + 1,
                entry,
            })
            .collect();
        Self::from_rows(StandingsKind::Grouped, rows)
    }

    fn from_rows(kind: StandingsKind, rows: Vec<RankedRow>) -> Self {
        let has_form_data = rows.iter().any(|r| !r.entry.team.recent_results.is_empty());
        Self {
            kind,
            rows,
            has_form_data,
            fetched_at: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows ordered by the given sort state. The table itself is untouched.
    pub fn sorted(&self, sort: SortState) -> Vec<&RankedRow> {
        let mut rows: Vec<&RankedRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| compare_rows(a, b, sort));
        rows
    }

    /// Whether a qualification line follows `rank`. Lines only make sense in
    /// natural rank order.
    pub fn is_zone_break(&self, sort: SortState, rank: u32) -> bool {
        sort == SortState::default() && self.kind.zone_breaks().contains(&rank)
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Global ranking order for flattened group entries.
pub fn compare_global(a: &StandingsEntry, b: &StandingsEntry) -> Ordering {
    descending(a.stat_value(StatKey::Points), b.stat_value(StatKey::Points))
        .then_with(|| {
            descending(
                a.stat_value(StatKey::PointDifferential),
                b.stat_value(StatKey::PointDifferential),
            )
        })
        .then_with(|| {
            descending(a.stat_value(StatKey::PointsFor), b.stat_value(StatKey::PointsFor))
        })
        .then_with(|| a.team.name.cmp(&b.team.name))
}

/// Column comparator: requested key and direction first, then goal
/// difference and goals for (both descending) unless already the primary key.
pub fn compare_rows(a: &RankedRow, b: &RankedRow, sort: SortState) -> Ordering {
    let primary = a.value(sort.key).total_cmp(&b.value(sort.key));
    let primary = match sort.direction {
        SortDirection::Ascending => primary,
        SortDirection::Descending => primary.reverse(),
    };

    primary
        .then_with(|| match sort.key {
            StatKey::PointDifferential => Ordering::Equal,
            _ => descending(
                a.value(StatKey::PointDifferential),
                b.value(StatKey::PointDifferential),
            ),
        })
        .then_with(|| match sort.key {
            StatKey::PointsFor => Ordering::Equal,
            _ => descending(a.value(StatKey::PointsFor), b.value(StatKey::PointsFor)),
        })
}
