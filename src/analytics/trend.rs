use crate::season::fixture::{Fixture, MatchResult, Venue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Better,
    Same,
    Worse,
}

impl Trend {
    fn from_diff(diff: i32) -> Self {
        match diff.signum() {
            1 => Trend::Better,
            0 => Trend::Same,
            _ => Trend::Worse,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendFilter {
    #[default]
    All,
    Better,
    Same,
    Worse,
}

impl TrendFilter {
    pub fn cycle(self) -> Self {
        match self {
            TrendFilter::All => TrendFilter::Better,
            TrendFilter::Better => TrendFilter::Same,
            TrendFilter::Same => TrendFilter::Worse,
            TrendFilter::Worse => TrendFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendFilter::All => "All",
            TrendFilter::Better => "Better",
            TrendFilter::Same => "Same",
            TrendFilter::Worse => "Worse",
        }
    }

    /// Rows with no prior result only match `All`.
    pub fn matches(&self, trend: Option<Trend>) -> bool {
        match self {
            TrendFilter::All => true,
            TrendFilter::Better => trend == Some(Trend::Better),
            TrendFilter::Same => trend == Some(Trend::Same),
            TrendFilter::Worse => trend == Some(Trend::Worse),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendRow {
    pub opponent: String,
    pub venue: Venue,
    pub prior: Option<MatchResult>,
    pub current: MatchResult,
    /// Points swing, absent when last season has no counterpart result.
    pub diff: Option<i32>,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadToHead {
    pub rows: Vec<TrendRow>,
    pub better: usize,
    pub same: usize,
    pub worse: usize,
}

/// Every played league match against its counterpart from last season.
pub fn head_to_head(fixtures: &[Fixture]) -> HeadToHead {
    let mut h2h = HeadToHead::default();
    for fixture in fixtures.iter().filter(|f| f.is_played_league_match()) {
        let Some(current) = fixture.current.result else {
            continue;
        };
        let diff = fixture
            .prior
            .result
            .map(|prior| MatchResult::points(Some(current)) - MatchResult::points(Some(prior)));
        let trend = diff.map(Trend::from_diff);
        match trend {
            Some(Trend::Better) => h2h.better += 1,
            Some(Trend::Same) => h2h.same += 1,
            Some(Trend::Worse) => h2h.worse += 1,
            None => {}
        }
        h2h.rows.push(TrendRow {
            opponent: fixture.opponent_name().to_string(),
            venue: fixture.venue,
            prior: fixture.prior.result,
            current,
            diff,
            trend,
        });
    }
    h2h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::fixture::{Competition, SeasonRecord};
    use MatchResult::{Draw as D, Loss as L, Win as W};

    fn league(opponent: &str, current: Option<MatchResult>, prior: Option<MatchResult>) -> Fixture {
        Fixture {
            opponent: Some(opponent.to_string()),
            competition: Some(Competition::PremierLeague),
            current: SeasonRecord {
                result: current,
                ..Default::default()
            },
            prior: SeasonRecord {
                result: prior,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn counts_each_trend() {
        let h2h = head_to_head(&[
            league("Chelsea", Some(W), Some(D)),
            league("Leeds", Some(W), None),
            league("Fulham", Some(D), Some(D)),
            league("Liverpool", Some(L), Some(D)),
            league("Villa", Some(L), Some(W)),
            league("Spurs", None, Some(W)),
        ]);
        assert_eq!(h2h.rows.len(), 5);
        assert_eq!((h2h.better, h2h.same, h2h.worse), (1, 1, 2));
        assert_eq!(h2h.rows[0].diff, Some(2));
        assert_eq!(h2h.rows[1].trend, None);
        assert_eq!(h2h.rows[4].diff, Some(-3));
    }

    #[test]
    fn filter_matches_only_its_trend() {
        assert!(TrendFilter::All.matches(None));
        assert!(TrendFilter::Better.matches(Some(Trend::Better)));
        assert!(!TrendFilter::Better.matches(Some(Trend::Same)));
        assert!(!TrendFilter::Same.matches(None));
        assert!(TrendFilter::Worse.matches(Some(Trend::Worse)));
    }

    #[test]
    fn filter_cycle_wraps() {
        let mut filter = TrendFilter::All;
        for _ in 0..4 {
            filter = filter.cycle();
        }
        assert_eq!(filter, TrendFilter::All);
    }
}
