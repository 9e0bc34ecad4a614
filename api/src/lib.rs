pub mod client;
pub mod espn;
pub mod table;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use table::{RankedRow, SortDirection, SortState, StandingsTable};

// ---------------------------------------------------------------------------
// Domain types, independent of the ESPN wire format
// ---------------------------------------------------------------------------

/// The two standings shapes the dashboard consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandingsKind {
    /// Domestic league: a single table under `children[0]`.
    #[default]
    Flat,
    /// Continental competition: one table per group, flattened and re-ranked.
    Grouped,
}

impl StandingsKind {
    pub fn label(&self) -> &'static str {
        match self {
            StandingsKind::Flat => "Premier League",
            StandingsKind::Grouped => "Champions League",
        }
    }

    /// ESPN league slug used in the standings URL.
    pub fn league_slug(&self) -> &'static str {
        match self {
            StandingsKind::Flat => "eng.1",
            StandingsKind::Grouped => "uefa.champions",
        }
    }

    /// Ranks after which a qualification line is drawn.
    pub fn zone_breaks(&self) -> &'static [u32] {
        match self {
            StandingsKind::Flat => &[4],
            StandingsKind::Grouped => &[8, 24],
        }
    }

    pub fn other(self) -> Self {
        match self {
            StandingsKind::Flat => StandingsKind::Grouped,
            StandingsKind::Grouped => StandingsKind::Flat,
        }
    }
}

/// Sortable table columns, keyed by the ESPN statistic name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    #[default]
    Rank,
    GamesPlayed,
    Wins,
    Ties,
    Losses,
    PointsFor,
    PointsAgainst,
    PointDifferential,
    Points,
}

impl StatKey {
    /// Column order as rendered.
    pub const COLUMNS: [StatKey; 9] = [
        StatKey::Rank,
        StatKey::GamesPlayed,
        StatKey::Wins,
        StatKey::Ties,
        StatKey::Losses,
        StatKey::PointsFor,
        StatKey::PointsAgainst,
        StatKey::PointDifferential,
        StatKey::Points,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            StatKey::Rank => "rank",
            StatKey::GamesPlayed => "gamesPlayed",
            StatKey::Wins => "wins",
            StatKey::Ties => "ties",
            StatKey::Losses => "losses",
            StatKey::PointsFor => "pointsFor",
            StatKey::PointsAgainst => "pointsAgainst",
            StatKey::PointDifferential => "pointDifferential",
            StatKey::Points => "points",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Rank => "Pos",
            StatKey::GamesPlayed => "P",
            StatKey::Wins => "W",
            StatKey::Ties => "D",
            StatKey::Losses => "L",
            StatKey::PointsFor => "GF",
            StatKey::PointsAgainst => "GA",
            StatKey::PointDifferential => "GD",
            StatKey::Points => "Pts",
        }
    }

    /// Matches played is shown but never sorted on.
    pub fn is_sortable(&self) -> bool {
        !matches!(self, StatKey::GamesPlayed)
    }

    /// Lower is better for these columns, so a fresh sort starts ascending.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            StatKey::Rank | StatKey::Losses | StatKey::PointsAgainst => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stat {
    pub value: f64,
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResult {
    Win,
    Draw,
    Loss,
    Other,
}

impl FormResult {
    /// ESPN sends "win" / "draw" / "loss"; only the first letter is significant.
    pub fn parse(s: &str) -> Self {
        match s.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('W') => FormResult::Win,
            Some('D') => FormResult::Draw,
            Some('L') => FormResult::Loss,
            _ => FormResult::Other,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Loss => 'L',
            FormResult::Other => '-',
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub logo: Option<String>, // first logo href
    pub recent_results: Vec<FormResult>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandingsEntry {
    pub team: Team,
    /// Keyed by ESPN statistic name; unknown statistics are kept.
    pub stats: HashMap<String, Stat>,
}

impl StandingsEntry {
    /// Numeric value of a column. Missing statistics read as zero.
    pub fn stat_value(&self, key: StatKey) -> f64 {
        self.stats
            .get(key.wire_name())
            .map(|s| s.value)
            .unwrap_or_default()
    }

    /// Display string of a column, falling back to the formatted number.
    pub fn stat_display(&self, key: StatKey) -> String {
        match self.stats.get(key.wire_name()) {
            Some(stat) if !stat.display.is_empty() => stat.display.clone(),
            Some(stat) => format!("{}", stat.value),
            None => "0".to_string(),
        }
    }

    pub fn has_stat(&self, key: StatKey) -> bool {
        self.stats.contains_key(key.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directions() {
        assert_eq!(StatKey::Rank.default_direction(), SortDirection::Ascending);
        assert_eq!(StatKey::Losses.default_direction(), SortDirection::Ascending);
        assert_eq!(StatKey::PointsAgainst.default_direction(), SortDirection::Ascending);
        for key in [
            StatKey::Wins,
            StatKey::Ties,
            StatKey::PointsFor,
            StatKey::PointDifferential,
            StatKey::Points,
        ] {
            assert_eq!(key.default_direction(), SortDirection::Descending, "{key:?}");
        }
    }

    #[test]
    fn form_result_parses_first_letter() {
        assert_eq!(FormResult::parse("win"), FormResult::Win);
        assert_eq!(FormResult::parse("draw"), FormResult::Draw);
        assert_eq!(FormResult::parse("Loss"), FormResult::Loss);
        assert_eq!(FormResult::parse(""), FormResult::Other);
        assert_eq!(FormResult::parse("postponed"), FormResult::Other);
    }

    #[test]
    fn missing_stat_reads_as_zero() {
        let entry = StandingsEntry::default();
        assert_eq!(entry.stat_value(StatKey::Points), 0.0);
        assert_eq!(entry.stat_display(StatKey::Points), "0");
        assert!(!entry.has_stat(StatKey::Points));
    }

    #[test]
    fn zone_breaks_per_kind() {
        assert_eq!(StandingsKind::Flat.zone_breaks(), &[4]);
        assert_eq!(StandingsKind::Grouped.zone_breaks(), &[8, 24]);
        assert_eq!(StandingsKind::Flat.other(), StandingsKind::Grouped);
    }
}
