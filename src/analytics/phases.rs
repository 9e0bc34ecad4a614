use crate::season::fixture::{Fixture, SeasonRecord};

/// A contiguous band of league matchweeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub label: &'static str,
    pub start: u8,
    pub end: u8,
}

pub const PHASES: [Phase; 4] = [
    Phase { label: "MW 1-10", start: 1, end: 10 },
    Phase { label: "MW 11-19", start: 11, end: 19 },
    Phase { label: "MW 20-29", start: 20, end: 29 },
    Phase { label: "MW 30-38", start: 30, end: 38 },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSplit {
    pub label: &'static str,
    pub prior: u16,
    pub current: u16,
}

/// Points won inside each band, for both seasons.
pub fn phase_points(fixtures: &[Fixture]) -> Vec<PhaseSplit> {
    let mut last_prior = 0;
    let mut last_current = 0;

    PHASES
        .iter()
        .map(|phase| {
            let prior = points_at(fixtures, phase.end, |f| &f.prior);
            let current = points_at(fixtures, phase.end, |f| &f.current);
            let split = PhaseSplit {
                label: phase.label,
                prior: band_delta(prior, last_prior),
                current: band_delta(current, last_current),
            };
            last_prior = prior;
            last_current = current;
            split
        })
        .collect()
}

/// Zero cumulative points means nothing recorded yet, not a negative band.
fn band_delta(total: u16, previous: u16) -> u16 {
    if total > 0 {
        total.saturating_sub(previous)
    } else {
        0
    }
}

/// Cumulative points at the latest league matchweek `<= end` that has a
/// value. Ties on matchweek keep the earliest row in source order.
fn points_at(fixtures: &[Fixture], end: u8, season: impl Fn(&Fixture) -> &SeasonRecord) -> u16 {
    let mut best: Option<(u8, u16)> = None;
    for fixture in fixtures
        .iter()
        .filter(|f| !f.is_structural() && f.is_domestic_league())
    {
        let (Some(mw), Some(points)) = (fixture.matchweek, season(fixture).points) else {
            continue;
        };
        if mw > end {
            continue;
        }
        if best.is_none_or(|(best_mw, _)| mw > best_mw) {
            best = Some((mw, points));
        }
    }
    best.map(|(_, points)| points).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::fixture::Competition;

    fn league(mw: u8, prior: Option<u16>, current: Option<u16>) -> Fixture {
        Fixture {
            matchweek: Some(mw),
            competition: Some(Competition::PremierLeague),
            prior: SeasonRecord {
                points: prior,
                ..Default::default()
            },
            current: SeasonRecord {
                points: current,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn full_season() -> Vec<Fixture> {
        // two points a week last season, one and then three this season
        (1..=38)
            .map(|mw| {
                let current = if mw <= 19 { mw } else { 19 + 3 * (mw - 19) };
                league(mw, Some(2 * u16::from(mw)), Some(u16::from(current)))
            })
            .collect()
    }

    #[test]
    fn band_deltas_sum_to_the_final_total() {
        let fixtures = full_season();
        let splits = phase_points(&fixtures);
        assert_eq!(splits.len(), 4);

        let prior: Vec<u16> = splits.iter().map(|s| s.prior).collect();
        assert_eq!(prior, vec![20, 18, 20, 18]);
        assert_eq!(prior.iter().sum::<u16>(), 76);

        let current: Vec<u16> = splits.iter().map(|s| s.current).collect();
        assert_eq!(current, vec![10, 9, 30, 27]);
        assert_eq!(current.iter().sum::<u16>(), 19 + 3 * 19);
    }

    #[test]
    fn bands_without_data_are_zero() {
        let fixtures: Vec<Fixture> = (1..=12)
            .map(|mw| league(mw, Some(u16::from(mw)), Some(2 * u16::from(mw))))
            .chain((13..=38).map(|mw| league(mw, Some(u16::from(mw)), None)))
            .collect();
        let current: Vec<u16> = phase_points(&fixtures).iter().map(|s| s.current).collect();
        // band two only sees MW11-12 this season; later bands repeat MW12's total
        assert_eq!(current, vec![20, 4, 0, 0]);
    }

    #[test]
    fn gap_at_band_end_uses_latest_earlier_matchweek() {
        let fixtures = vec![league(8, None, Some(15)), league(12, None, Some(20))];
        let current: Vec<u16> = phase_points(&fixtures).iter().map(|s| s.current).collect();
        assert_eq!(current, vec![15, 5, 0, 0]);
    }

    #[test]
    fn zero_points_at_a_boundary_reads_as_no_data() {
        // a pointless opening run is indistinguishable from a missing band
        let fixtures = vec![league(10, None, Some(0)), league(19, None, Some(7))];
        let current: Vec<u16> = phase_points(&fixtures).iter().map(|s| s.current).collect();
        assert_eq!(current, vec![0, 7, 0, 0]);
    }

    #[test]
    fn cup_and_structural_rows_are_ignored() {
        let mut duplicate = league(5, None, Some(99));
        duplicate.duplicate = true;
        let cup = Fixture {
            matchweek: Some(6),
            competition: Some(Competition::LeagueCup),
            current: SeasonRecord {
                points: Some(50),
                ..Default::default()
            },
            ..Default::default()
        };
        let fixtures = vec![league(4, None, Some(10)), duplicate, cup];
        assert_eq!(phase_points(&fixtures)[0].current, 10);
    }

    #[test]
    fn empty_input_gives_four_empty_bands() {
        let splits = phase_points(&[]);
        assert_eq!(splits.len(), 4);
        assert!(splits.iter().all(|s| s.prior == 0 && s.current == 0));
        assert_eq!(splits[3].label, "MW 30-38");
    }
}
