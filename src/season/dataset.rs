use crate::analytics::difficulty::DifficultyTable;
use crate::analytics::goals::GoalTally;
use crate::analytics::venue::HomeAwayTally;
use crate::season::fixture::{Competition, Fixture};
use anyhow::{Context, Result};
use log::{error, info};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Season snapshot compiled into the binary.
const EMBEDDED_SEASON_JSON: &str = include_str!("../../data/season.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Club {
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonLabels {
    pub prior: String,
    pub current: String,
}

/// Last season's totals, precomputed because its full fixture list is not
/// part of the dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriorBaselines {
    #[serde(flatten)]
    pub home_away: HomeAwayTally,
    #[serde(default)]
    pub goals: BTreeMap<Competition, GoalTally>,
}

/// Opta supercomputer projection for the domestic league.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomesticProjection {
    pub team: String,
    pub x_pos: f64,
    pub x_pts: f64,
    /// Title probability, percent.
    pub title: f64,
    /// Top-four (Champions League) probability, percent.
    pub ucl: f64,
}

/// Opta projection for the continental competition, percent per stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContinentalProjection {
    pub team: String,
    pub x_pos: f64,
    pub x_pts: f64,
    pub league_phase: f64,
    pub quarter_final: f64,
    pub semi_final: f64,
    #[serde(rename = "final")]
    pub final_: f64,
    pub winner: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Projections {
    #[serde(default)]
    pub domestic: Vec<DomesticProjection>,
    #[serde(default)]
    pub continental: Vec<ContinentalProjection>,
}

/// Everything the dashboard knows about the season before any fetch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonDataset {
    pub club: Club,
    pub seasons: SeasonLabels,
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub difficulty_ranks: HashMap<String, u8>,
    #[serde(default)]
    pub marquee_opponents: Vec<String>,
    #[serde(default)]
    pub baselines: PriorBaselines,
    #[serde(default)]
    pub projections: Projections,
}

impl SeasonDataset {
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_SEASON_JSON).context("embedded season dataset is invalid")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading season dataset {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing season dataset {}", path.display()))
    }

    /// Load the override if one is given, falling back to the embedded
    /// snapshot when it can't be read.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            match Self::from_path(path) {
                Ok(dataset) => {
                    info!("loaded season dataset from {}", path.display());
                    return Ok(dataset);
                }
                Err(e) => error!("{e:#}; using embedded dataset"),
            }
        }
        Self::embedded()
    }

    pub fn difficulty_table(&self) -> DifficultyTable {
        DifficultyTable::new(self.difficulty_ranks.clone())
    }

    pub fn is_marquee(&self, opponent: &str) -> bool {
        self.marquee_opponents.iter().any(|m| m == opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::fixture::MatchResult;

    #[test]
    fn embedded_dataset_parses() {
        let dataset = SeasonDataset::embedded().unwrap();
        assert!(!dataset.club.name.is_empty());
        assert!(!dataset.fixtures.is_empty());
        assert!(!dataset.projections.domestic.is_empty());
        assert!(!dataset.projections.continental.is_empty());
        assert!(dataset.baselines.goals.contains_key(&Competition::PremierLeague));
    }

    #[test]
    fn embedded_cumulative_points_match_results() {
        let dataset = SeasonDataset::embedded().unwrap();
        let league: Vec<&Fixture> = dataset
            .fixtures
            .iter()
            .filter(|f| !f.is_structural() && f.is_domestic_league())
            .collect();

        let mut current = 0;
        let mut prior = 0;
        for f in league {
            if let Some(result) = f.current.result {
                current += MatchResult::points(Some(result));
                assert_eq!(f.current.points.map(i32::from), Some(current), "{}", f.label());
            }
            if let Some(result) = f.prior.result {
                prior += MatchResult::points(Some(result));
                assert_eq!(f.prior.points.map(i32::from), Some(prior), "{}", f.label());
            }
        }
    }

    #[test]
    fn every_league_opponent_has_a_difficulty_rank() {
        let dataset = SeasonDataset::embedded().unwrap();
        for f in dataset.fixtures.iter().filter(|f| f.is_domestic_league()) {
            let opponent = f.opponent_name();
            assert!(
                dataset.difficulty_ranks.contains_key(opponent),
                "{opponent} has no rank"
            );
        }
    }

    #[test]
    fn unreadable_override_falls_back_to_embedded() {
        let dataset = SeasonDataset::load(Some(Path::new("/nonexistent/season.json"))).unwrap();
        assert_eq!(dataset.club.name, SeasonDataset::embedded().unwrap().club.name);
    }

    #[test]
    fn from_path_reports_the_file() {
        let err = SeasonDataset::from_path(Path::new("/nonexistent/season.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/season.json"));
    }
}
