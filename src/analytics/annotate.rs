use crate::season::fixture::{Fixture, MatchResult};

/// Tail length of the form guide.
pub const FORM_LENGTH: usize = 8;

/// A fixture with its points swing against the same fixture last season.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedFixture {
    pub fixture: Fixture,
    /// Points this season minus points last season, league matches only.
    pub match_diff: Option<i32>,
    /// Running total of `match_diff` in source order.
    pub agg: Option<i32>,
}

impl AnnotatedFixture {
    fn plain(fixture: &Fixture) -> Self {
        Self {
            fixture: fixture.clone(),
            match_diff: None,
            agg: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CumulativePoint {
    pub label: String,
    pub diff: i32,
    pub opponent: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionPoint {
    pub label: String,
    pub prior: Option<u8>,
    pub current: Option<u8>,
    pub opponent: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub current_points: u16,
    pub prior_points: u16,
    pub matches_played: usize,
}

impl SummaryStats {
    pub fn difference(&self) -> i32 {
        i32::from(self.current_points) - i32::from(self.prior_points)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonAnalysis {
    pub fixtures: Vec<AnnotatedFixture>,
    pub form: Vec<MatchResult>,
    pub cumulative: Vec<CumulativePoint>,
    pub positions: Vec<PositionPoint>,
    pub summary: SummaryStats,
}

/// Single pass over the fixture list, order preserved.
///
/// Only league matches with a current-season result get a points swing and
/// feed the form guide and chart series; everything else passes through with
/// both derived fields empty.
pub fn analyze(fixtures: &[Fixture]) -> SeasonAnalysis {
    let mut agg = 0;
    let mut annotated = Vec::with_capacity(fixtures.len());
    let mut form = Vec::new();
    let mut cumulative = Vec::new();
    let mut positions = Vec::new();

    for fixture in fixtures {
        let Some(result) = fixture
            .current
            .result
            .filter(|_| fixture.is_played_league_match())
        else {
            annotated.push(AnnotatedFixture::plain(fixture));
            continue;
        };

        let match_diff = MatchResult::points(Some(result)) - MatchResult::points(fixture.prior.result);
        agg += match_diff;
        form.push(result);

        let label = fixture.label();
        cumulative.push(CumulativePoint {
            label: label.clone(),
            diff: agg,
            opponent: fixture.opponent.clone(),
        });
        positions.push(PositionPoint {
            label,
            prior: fixture.prior.position,
            current: fixture.current.position,
            opponent: fixture.opponent.clone(),
        });
        annotated.push(AnnotatedFixture {
            fixture: fixture.clone(),
            match_diff: Some(match_diff),
            agg: Some(agg),
        });
    }

    if form.len() > FORM_LENGTH {
        form.drain(..form.len() - FORM_LENGTH);
    }

    SeasonAnalysis {
        fixtures: annotated,
        form,
        cumulative,
        positions,
        summary: summary_stats(fixtures),
    }
}

/// Points come from the last played league match: the records are already
/// cumulative, so nothing is summed here.
fn summary_stats(fixtures: &[Fixture]) -> SummaryStats {
    let played: Vec<&Fixture> = fixtures
        .iter()
        .filter(|f| f.is_played_league_match())
        .collect();
    let last = played.last();

    SummaryStats {
        current_points: last.and_then(|f| f.current.points).unwrap_or_default(),
        prior_points: last.and_then(|f| f.prior.points).unwrap_or_default(),
        matches_played: played.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::fixture::{BreakKind, BreakRow, Competition, SeasonRecord};

    fn league(mw: u8, current: Option<MatchResult>, prior: Option<MatchResult>) -> Fixture {
        Fixture {
            matchweek: Some(mw),
            opponent: Some(format!("Opponent {mw}")),
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

    fn cup(current: Option<MatchResult>) -> Fixture {
        Fixture {
            round: Some("R3".into()),
            competition: Some(Competition::LeagueCup),
            current: SeasonRecord {
                result: current,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn international_break() -> Fixture {
        Fixture {
            break_row: Some(BreakRow {
                kind: BreakKind::International,
                edge: None,
            }),
            ..Default::default()
        }
    }

    use MatchResult::{Draw as D, Loss as L, Win as W};

    #[test]
    fn two_league_matches_example() {
        let analysis = analyze(&[league(1, Some(W), Some(L)), league(2, Some(D), Some(D))]);
        let diffs: Vec<_> = analysis.fixtures.iter().map(|f| f.match_diff).collect();
        let aggs: Vec<_> = analysis.fixtures.iter().map(|f| f.agg).collect();
        assert_eq!(diffs, vec![Some(3), Some(0)]);
        assert_eq!(aggs, vec![Some(3), Some(3)]);
    }

    #[test]
    fn derived_fields_present_only_for_played_league_matches() {
        let mut duplicate = league(3, Some(W), Some(L));
        duplicate.duplicate = true;
        let fixtures = vec![
            league(1, Some(W), None),
            international_break(),
            cup(Some(W)),
            duplicate,
            league(2, Some(L), Some(W)),
            league(3, None, Some(W)),
        ];
        let analysis = analyze(&fixtures);
        assert_eq!(analysis.fixtures.len(), fixtures.len());

        for (source, annotated) in fixtures.iter().zip(&analysis.fixtures) {
            assert_eq!(&annotated.fixture, source, "source order and content preserved");
            let expected = source.is_played_league_match();
            assert_eq!(annotated.match_diff.is_some(), expected, "{source:?}");
            assert_eq!(annotated.agg.is_some(), expected, "{source:?}");
        }
    }

    #[test]
    fn agg_is_the_running_sum_of_match_diffs() {
        let fixtures = vec![
            league(1, Some(W), Some(D)),
            cup(Some(L)),
            league(2, Some(L), Some(W)),
            international_break(),
            league(3, Some(D), Some(L)),
            league(4, Some(W), Some(W)),
        ];
        let analysis = analyze(&fixtures);
        let mut running = 0;
        for annotated in &analysis.fixtures {
            if let Some(diff) = annotated.match_diff {
                running += diff;
                assert_eq!(annotated.agg, Some(running));
            }
        }
        assert_eq!(running, 2 - 3 + 1);
    }

    #[test]
    fn form_is_the_tail_of_league_results() {
        let results = [W, W, L, D, W, L, W, D, D, W];
        let mut fixtures: Vec<Fixture> = results
            .iter()
            .enumerate()
            .map(|(i, r)| league(i as u8 + 1, Some(*r), None))
            .collect();
        fixtures.insert(3, cup(Some(L)));

        let analysis = analyze(&fixtures);
        assert_eq!(analysis.form.len(), FORM_LENGTH);
        assert_eq!(analysis.form, results[2..].to_vec());
    }

    #[test]
    fn short_seasons_keep_the_whole_form() {
        let analysis = analyze(&[league(1, Some(D), None), cup(Some(W))]);
        assert_eq!(analysis.form, vec![D]);
    }

    #[test]
    fn series_carry_labels_positions_and_opponents() {
        let mut first = league(1, Some(W), Some(D));
        first.current.position = Some(3);
        first.prior.position = Some(5);
        let analysis = analyze(&[first, league(2, None, Some(W))]);

        assert_eq!(analysis.cumulative.len(), 1);
        assert_eq!(analysis.cumulative[0].label, "MW1");
        assert_eq!(analysis.cumulative[0].diff, 2);
        assert_eq!(analysis.cumulative[0].opponent.as_deref(), Some("Opponent 1"));
        assert_eq!(analysis.positions[0].current, Some(3));
        assert_eq!(analysis.positions[0].prior, Some(5));
    }

    #[test]
    fn summary_reads_the_last_played_league_match() {
        let mut one = league(1, Some(W), Some(W));
        one.current.points = Some(3);
        one.prior.points = Some(3);
        let mut two = league(2, Some(D), Some(L));
        two.current.points = Some(4);
        two.prior.points = Some(3);
        let upcoming = league(3, None, Some(W));

        let summary = analyze(&[one, two, cup(Some(W)), upcoming]).summary;
        assert_eq!(
            summary,
            SummaryStats {
                current_points: 4,
                prior_points: 3,
                matches_played: 2
            }
        );
        assert_eq!(summary.difference(), 1);
    }

    #[test]
    fn empty_input_gives_empty_analysis() {
        let analysis = analyze(&[]);
        assert_eq!(analysis, SeasonAnalysis::default());
    }
}
