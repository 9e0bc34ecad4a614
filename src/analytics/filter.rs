use crate::analytics::annotate::AnnotatedFixture;
use crate::season::fixture::{BreakRow, Competition};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompetitionFilter {
    #[default]
    All,
    Only(Competition),
}

impl CompetitionFilter {
    pub fn cycle(self) -> Self {
        match self {
            CompetitionFilter::All => CompetitionFilter::Only(Competition::ALL[0]),
            CompetitionFilter::Only(current) => Competition::ALL
                .iter()
                .position(|c| *c == current)
                .and_then(|idx| Competition::ALL.get(idx + 1))
                .map(|next| CompetitionFilter::Only(*next))
                .unwrap_or(CompetitionFilter::All),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompetitionFilter::All => "All",
            CompetitionFilter::Only(c) => c.code(),
        }
    }
}

/// Which top-level view the fixture list is feeding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Fixtures,
    Analytics,
}

/// Rows for the active filter. Break rows survive every filter; the analytics
/// view always sees the whole list.
pub fn filter_fixtures(
    fixtures: &[AnnotatedFixture],
    filter: CompetitionFilter,
    view: View,
) -> Vec<&AnnotatedFixture> {
    match (filter, view) {
        (CompetitionFilter::All, _) | (_, View::Analytics) => fixtures.iter().collect(),
        (CompetitionFilter::Only(competition), View::Fixtures) => fixtures
            .iter()
            .filter(|f| f.fixture.competition == Some(competition) || f.fixture.is_break())
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayRow<'a> {
    Break(&'a BreakRow),
    Match {
        /// 1-based counter over visible matches.
        number: usize,
        fixture: &'a AnnotatedFixture,
    },
}

/// Turn a filtered list into table rows: duplicates hidden, breaks as
/// separators, matches numbered in order.
pub fn display_rows<'a>(fixtures: &[&'a AnnotatedFixture]) -> Vec<DisplayRow<'a>> {
    let mut number = 0;
    fixtures
        .iter()
        .filter(|f| !f.fixture.duplicate)
        .map(|f| match &f.fixture.break_row {
            Some(row) => DisplayRow::Break(row),
            None => {
                number += 1;
                DisplayRow::Match {
                    number,
                    fixture: f,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::annotate::analyze;
    use crate::season::fixture::{BreakKind, Fixture};

    fn fixture(competition: Option<Competition>) -> Fixture {
        Fixture {
            competition,
            ..Default::default()
        }
    }

    fn sample() -> Vec<AnnotatedFixture> {
        let mut duplicate = fixture(Some(Competition::PremierLeague));
        duplicate.duplicate = true;
        let brk = Fixture {
            break_row: Some(BreakRow {
                kind: BreakKind::International,
                edge: None,
            }),
            ..Default::default()
        };
        analyze(&[
            fixture(Some(Competition::PremierLeague)),
            fixture(Some(Competition::ChampionsLeague)),
            brk,
            duplicate,
            fixture(Some(Competition::LeagueCup)),
            fixture(Some(Competition::PremierLeague)),
        ])
        .fixtures
    }

    #[test]
    fn all_filter_returns_everything() {
        let rows = sample();
        assert_eq!(filter_fixtures(&rows, CompetitionFilter::All, View::Fixtures).len(), 6);
    }

    #[test]
    fn analytics_view_ignores_the_filter() {
        let rows = sample();
        let filter = CompetitionFilter::Only(Competition::LeagueCup);
        assert_eq!(filter_fixtures(&rows, filter, View::Analytics).len(), 6);
    }

    #[test]
    fn competition_filter_keeps_breaks() {
        let rows = sample();
        let filtered = filter_fixtures(
            &rows,
            CompetitionFilter::Only(Competition::ChampionsLeague),
            View::Fixtures,
        );
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].fixture.competition, Some(Competition::ChampionsLeague));
        assert!(filtered[1].fixture.is_break());
    }

    #[test]
    fn display_rows_number_visible_matches_only() {
        let rows = sample();
        let all = filter_fixtures(&rows, CompetitionFilter::All, View::Fixtures);
        let display = display_rows(&all);
        assert_eq!(display.len(), 5, "duplicate hidden");

        let numbers: Vec<usize> = display
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Match { number, .. } => Some(*number),
                DisplayRow::Break(_) => None,
            })
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(matches!(display[2], DisplayRow::Break(_)));
    }

    #[test]
    fn filter_cycles_through_every_competition() {
        let mut filter = CompetitionFilter::All;
        let mut seen = Vec::new();
        for _ in 0..5 {
            filter = filter.cycle();
            seen.push(filter.label());
        }
        assert_eq!(seen, vec!["PL", "UCL", "FA", "EFL", "All"]);
    }
}
