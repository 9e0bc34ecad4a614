//! Pure transforms over the fixture list. Nothing here does I/O or holds
//! state between calls.

pub mod annotate;
pub mod difficulty;
pub mod filter;
pub mod goals;
pub mod phases;
pub mod trend;
pub mod venue;

use crate::season::dataset::SeasonDataset;
use annotate::SeasonAnalysis;
use difficulty::DifficultyReport;
use goals::GoalComparison;
use phases::PhaseSplit;
use trend::HeadToHead;
use venue::HomeAwayTally;

/// Every derived view of the season, computed once from the dataset.
#[derive(Debug, Clone, Default)]
pub struct SeasonInsights {
    pub analysis: SeasonAnalysis,
    pub phases: Vec<PhaseSplit>,
    pub home_away: HomeAwayTally,
    pub goals: Vec<GoalComparison>,
    pub difficulty: DifficultyReport,
    pub head_to_head: HeadToHead,
}

impl SeasonInsights {
    pub fn compute(dataset: &SeasonDataset) -> Self {
        let fixtures = &dataset.fixtures;
        Self {
            analysis: annotate::analyze(fixtures),
            phases: phases::phase_points(fixtures),
            home_away: venue::home_away(fixtures),
            goals: goals::compare(&goals::goal_stats(fixtures), &dataset.baselines.goals),
            difficulty: difficulty::upcoming_difficulty(fixtures, &dataset.difficulty_table()),
            head_to_head: trend::head_to_head(fixtures),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::fixture::Competition;

    #[test]
    fn embedded_season_insights_are_consistent() {
        let dataset = SeasonDataset::embedded().unwrap();
        let insights = SeasonInsights::compute(&dataset);

        let summary = insights.analysis.summary;
        assert!(summary.matches_played > 0);
        assert_eq!(insights.analysis.cumulative.len(), summary.matches_played);
        assert_eq!(
            insights.home_away.home.played() + insights.home_away.away.played(),
            summary.matches_played as u16
        );

        let phase_total: u16 = insights.phases.iter().map(|p| p.current).sum();
        assert_eq!(phase_total, summary.current_points);

        let last_agg = insights.analysis.fixtures.iter().rev().find_map(|f| f.agg);
        assert_eq!(last_agg, Some(summary.difference()));

        assert_eq!(insights.goals.len(), Competition::ALL.len());
        assert!(insights.difficulty.outlook.is_some());
        assert_eq!(insights.head_to_head.rows.len(), summary.matches_played);
    }
}
