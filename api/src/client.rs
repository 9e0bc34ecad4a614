use crate::espn::{EspnEntry, EspnGroup, EspnTeam, StandingsResponse};
use crate::{FormResult, Stat, StandingsEntry, StandingsKind, StandingsTable, Team};
use chrono::Utc;
use log::debug;
use reqwest::Client;
use std::collections::HashMap;
use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

pub const ESPN_WEB_BASE: &str = "https://site.web.api.espn.com";

/// Standings client backed by ESPN's public endpoints.
///
/// Requests carry no timeout and are never retried: a failed fetch is
/// reported once and the caller decides what to show.
#[derive(Debug, Clone)]
pub struct StandingsApi {
    client: Client,
    base_url: String,
}

impl Default for StandingsApi {
    fn default() -> Self {
        Self::with_base_url(ESPN_WEB_BASE)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl StandingsApi {
    /// Point the client at another host, e.g. a local mirror or test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("pacetui/0.1 (terminal season dashboard)")
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn standings_url(&self, kind: StandingsKind) -> String {
        format!(
            "{}/apis/v2/sports/soccer/{}/standings",
            self.base_url,
            kind.league_slug()
        )
    }

    /// Fetch and normalize one competition's standings.
    ///
    /// Transport, status and body errors are returned; a well-formed document
    /// with missing or oddly shaped fields yields an empty table instead.
    pub async fn fetch_standings(&self, kind: StandingsKind) -> ApiResult<StandingsTable> {
        let url = self.standings_url(kind);
        debug!("fetching {} standings from {url}", kind.label());
        let raw: StandingsResponse = self.get(&url).await?;
        let mut table = normalize(kind, raw);
        table.fetched_at = Some(Utc::now());
        debug!("{} standings: {} rows", kind.label(), table.rows.len());
        Ok(table)
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

/// Build the ranked table for a competition from its raw payload.
pub fn normalize(kind: StandingsKind, raw: StandingsResponse) -> StandingsTable {
    match kind {
        StandingsKind::Flat => StandingsTable::flat(flat_entries(raw)),
        StandingsKind::Grouped => StandingsTable::grouped(group_entries(raw)),
    }
}

/// `children[0].standings.entries`, or nothing.
fn flat_entries(raw: StandingsResponse) -> Vec<StandingsEntry> {
    raw.children
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(map_group)
        .unwrap_or_default()
}

/// One entry list per child group.
fn group_entries(raw: StandingsResponse) -> Vec<Vec<StandingsEntry>> {
    raw.children
        .unwrap_or_default()
        .into_iter()
        .map(map_group)
        .collect()
}

fn map_group(group: EspnGroup) -> Vec<StandingsEntry> {
    group
        .standings
        .and_then(|s| s.entries)
        .unwrap_or_default()
        .into_iter()
        .filter_map(map_entry)
        .collect()
}

fn map_entry(raw: EspnEntry) -> Option<StandingsEntry> {
    let Some(team) = raw.team else {
        debug!("skipping standings entry without a team");
        return None;
    };

    let stats: HashMap<String, Stat> = raw
        .stats
        .unwrap_or_default()
        .into_iter()
        .filter_map(|s| {
            let name = s.name?;
            let display = s.display_value.unwrap_or_default();
            let value = s
                .value
                .or_else(|| display.trim_start_matches('+').parse::<f64>().ok())
                .unwrap_or_default();
            Some((name, Stat { value, display }))
        })
        .collect();

    Some(StandingsEntry {
        team: map_team(team),
        stats,
    })
}

fn map_team(t: EspnTeam) -> Team {
    let name = t
        .name
        .clone()
        .or_else(|| t.display_name.clone())
        .unwrap_or_default();
    Team {
        id: t.id.unwrap_or_else(|| name.to_lowercase().replace(' ', "-")),
        abbreviation: t.abbreviation.unwrap_or_default(),
        logo: t
            .logos
            .unwrap_or_default()
            .into_iter()
            .find_map(|l| l.href),
        recent_results: t
            .recent_events
            .unwrap_or_default()
            .iter()
            .filter_map(|e| e.result.as_deref())
            .map(FormResult::parse)
            .collect(),
        name,
    }
}
