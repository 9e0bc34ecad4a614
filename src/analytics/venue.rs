use crate::season::fixture::{Fixture, MatchResult, Venue};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct VenueRecord {
    pub wins: u16,
    pub draws: u16,
    pub losses: u16,
}

impl VenueRecord {
    fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Draw => self.draws += 1,
            MatchResult::Loss => self.losses += 1,
        }
    }

    pub fn played(&self) -> u16 {
        self.wins + self.draws + self.losses
    }

    pub fn points(&self) -> u16 {
        3 * self.wins + self.draws
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct HomeAwayTally {
    pub home: VenueRecord,
    pub away: VenueRecord,
}

/// W/D/L per venue over this season's played league matches. Rows with no
/// known venue are left out.
pub fn home_away(fixtures: &[Fixture]) -> HomeAwayTally {
    let mut tally = HomeAwayTally::default();
    for fixture in fixtures.iter().filter(|f| f.is_played_league_match()) {
        let Some(result) = fixture.current.result else {
            continue;
        };
        match fixture.venue {
            Venue::Home => tally.home.record(result),
            Venue::Away => tally.away.record(result),
            Venue::Unknown => {}
        }
    }
    tally
}
