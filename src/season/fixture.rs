use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Competitions the club plays in. Structural rows carry no competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Competition {
    #[serde(rename = "PL")]
    PremierLeague,
    #[serde(rename = "UCL")]
    ChampionsLeague,
    #[serde(rename = "FA")]
    FaCup,
    #[serde(rename = "EFL")]
    LeagueCup,
}

impl Competition {
    /// Display and aggregation order.
    pub const ALL: [Competition; 4] = [
        Competition::PremierLeague,
        Competition::ChampionsLeague,
        Competition::FaCup,
        Competition::LeagueCup,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Competition::PremierLeague => "PL",
            Competition::ChampionsLeague => "UCL",
            Competition::FaCup => "FA",
            Competition::LeagueCup => "EFL",
        }
    }

    /// The round-robin league used as the points-pace baseline.
    pub fn is_domestic_league(&self) -> bool {
        matches!(self, Competition::PremierLeague)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl MatchResult {
    /// League points for a result; unplayed counts as zero.
    pub fn points(result: Option<MatchResult>) -> i32 {
        match result {
            Some(MatchResult::Win) => 3,
            Some(MatchResult::Draw) => 1,
            Some(MatchResult::Loss) | None => 0,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            MatchResult::Win => 'W',
            MatchResult::Draw => 'D',
            MatchResult::Loss => 'L',
        }
    }

    /// Win or draw: the only results that can come with a clean sheet.
    pub fn is_unbeaten(&self) -> bool {
        matches!(self, MatchResult::Win | MatchResult::Draw)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Venue {
    pub fn short(&self) -> &'static str {
        match self {
            Venue::Home => "H",
            Venue::Away => "A",
            Venue::Unknown => "-",
        }
    }

    /// Split a "home-away" score into (scored, conceded) for the club.
    /// Anything but two dash-separated integers is rejected.
    pub fn goals(&self, score: &str) -> Option<(u32, u32)> {
        let (home, away) = score.split_once('-')?;
        let home = home.trim().parse::<u32>().ok()?;
        let away = away.trim().parse::<u32>().ok()?;
        match self {
            Venue::Home => Some((home, away)),
            Venue::Away | Venue::Unknown => Some((away, home)),
        }
    }
}

/// One season's view of a fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    #[serde(default)]
    pub result: Option<MatchResult>,
    /// Final score as "home-away".
    #[serde(default)]
    pub score: Option<String>,
    /// League position after the match.
    #[serde(default)]
    pub position: Option<u8>,
    /// Cumulative league points after the match.
    #[serde(default)]
    pub points: Option<u16>,
}

impl SeasonRecord {
    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn goals(&self, venue: Venue) -> Option<(u32, u32)> {
        self.score.as_deref().and_then(|s| venue.goals(s))
    }

    pub fn is_clean_sheet(&self, venue: Venue) -> bool {
        let unbeaten = self.result.is_some_and(|r| r.is_unbeaten());
        unbeaten && self.goals(venue).is_some_and(|(_, conceded)| conceded == 0)
    }

    /// Score as listed, with a trailing `*` when it was a clean sheet.
    pub fn marked_score(&self, venue: Venue) -> Option<String> {
        let score = self.score.as_deref()?;
        if self.is_clean_sheet(venue) {
            Some(format!("{score}*"))
        } else {
            Some(score.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakKind {
    /// International window.
    International,
    /// Continental tournament window (e.g. AFCON) that takes players away.
    ContinentalTournament,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEdge {
    Start,
    End,
}

/// Placeholder row marking a gap in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRow {
    pub kind: BreakKind,
    #[serde(default)]
    pub edge: Option<BreakEdge>,
}

impl BreakRow {
    pub fn label(&self) -> &'static str {
        match (self.kind, self.edge) {
            (BreakKind::International, _) => "International break",
            (BreakKind::ContinentalTournament, Some(BreakEdge::End)) => "AFCON window ends",
            (BreakKind::ContinentalTournament, _) => "AFCON window begins",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Postponement {
    pub reason: String,
    /// Already rescheduled elsewhere in the list; shown without emphasis.
    #[serde(default)]
    pub skip: bool,
}

/// A row of the hand-maintained fixture list. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub matchweek: Option<u8>,
    /// Cup round label ("R3", "League Phase 4").
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub venue: Venue,
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub prior: SeasonRecord,
    #[serde(default)]
    pub current: SeasonRecord,
    #[serde(default)]
    pub break_row: Option<BreakRow>,
    #[serde(default)]
    pub duplicate: bool,
    #[serde(default)]
    pub postponement: Option<Postponement>,
    /// Prior-season counterpart when the opponent changed (promotion).
    #[serde(default)]
    pub correlated: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Fixture {
    pub fn is_break(&self) -> bool {
        self.break_row.is_some()
    }

    /// Break and duplicate rows are display structure, not matches.
    pub fn is_structural(&self) -> bool {
        self.is_break() || self.duplicate
    }

    pub fn is_domestic_league(&self) -> bool {
        self.competition.is_some_and(|c| c.is_domestic_league())
    }

    /// A domestic league match with a current-season result.
    pub fn is_played_league_match(&self) -> bool {
        !self.is_structural() && self.is_domestic_league() && self.current.is_played()
    }

    /// A real match with no current-season result yet.
    pub fn is_unplayed(&self) -> bool {
        !self.is_structural() && !self.current.is_played()
    }

    pub fn is_postponed(&self) -> bool {
        self.postponement.as_ref().is_some_and(|p| !p.skip)
    }

    /// Round label if present, otherwise "MW{n}".
    pub fn label(&self) -> String {
        match (&self.round, self.matchweek) {
            (Some(round), _) => round.clone(),
            (None, Some(mw)) => format!("MW{mw}"),
            (None, None) => "-".to_string(),
        }
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.as_deref().unwrap_or("TBD")
    }
}
