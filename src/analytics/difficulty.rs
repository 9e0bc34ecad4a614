use crate::season::fixture::{Competition, Fixture, Venue};
use std::collections::HashMap;

/// Rank used for opponents the table does not know.
pub const DEFAULT_RANK: u8 = 10;

/// How many upcoming fixtures the outlook looks at.
pub const LOOKAHEAD: usize = 6;

/// Opponent name to strength rank (1 = strongest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifficultyTable {
    ranks: HashMap<String, u8>,
}

impl DifficultyTable {
    pub fn new(ranks: HashMap<String, u8>) -> Self {
        Self { ranks }
    }

    pub fn rank(&self, opponent: &str) -> u8 {
        self.ranks.get(opponent).copied().unwrap_or(DEFAULT_RANK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Tier {
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            0..=4 => Tier::VeryHard,
            5..=8 => Tier::Hard,
            9..=12 => Tier::Medium,
            13..=16 => Tier::Easy,
            _ => Tier::VeryEasy,
        }
    }

    pub fn score(&self) -> u8 {
        match self {
            Tier::VeryHard => 5,
            Tier::Hard => 4,
            Tier::Medium => 3,
            Tier::Easy => 2,
            Tier::VeryEasy => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::VeryHard => "Very Hard",
            Tier::Hard => "Hard",
            Tier::Medium => "Medium",
            Tier::Easy => "Easy",
            Tier::VeryEasy => "Very Easy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    VeryFavorable,
    Favorable,
    Balanced,
    Challenging,
    VeryChallenging,
}

impl Outlook {
    pub fn from_average(average: f64) -> Self {
        if average <= 1.5 {
            Outlook::VeryFavorable
        } else if average <= 2.5 {
            Outlook::Favorable
        } else if average <= 3.5 {
            Outlook::Balanced
        } else if average <= 4.5 {
            Outlook::Challenging
        } else {
            Outlook::VeryChallenging
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outlook::VeryFavorable => "Very Favorable",
            Outlook::Favorable => "Favorable",
            Outlook::Balanced => "Balanced",
            Outlook::Challenging => "Challenging",
            Outlook::VeryChallenging => "Very Challenging",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatedFixture {
    pub label: String,
    pub opponent: String,
    pub venue: Venue,
    pub competition: Option<Competition>,
    pub rank: u8,
    pub tier: Tier,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DifficultyReport {
    pub upcoming: Vec<RatedFixture>,
    pub average: Option<f64>,
    pub outlook: Option<Outlook>,
}

/// Rate the next [`LOOKAHEAD`] unplayed matches in source order.
///
/// The mean is taken over however many are left, so the run-in still gets an
/// outlook with fewer than six fixtures remaining.
pub fn upcoming_difficulty(fixtures: &[Fixture], table: &DifficultyTable) -> DifficultyReport {
    let upcoming: Vec<RatedFixture> = fixtures
        .iter()
        .filter(|f| !f.is_structural() && !f.current.is_played())
        .take(LOOKAHEAD)
        .map(|f| {
            let opponent = f.opponent_name().to_string();
            let rank = table.rank(&opponent);
            RatedFixture {
                label: f.label(),
                venue: f.venue,
                competition: f.competition,
                tier: Tier::from_rank(rank),
                rank,
                opponent,
            }
        })
        .collect();

    if upcoming.is_empty() {
        return DifficultyReport::default();
    }

    let total: u32 = upcoming.iter().map(|f| u32::from(f.tier.score())).sum();
    let average = f64::from(total) / upcoming.len() as f64;

    DifficultyReport {
        upcoming,
        average: Some(average),
        outlook: Some(Outlook::from_average(average)),
    }
}
