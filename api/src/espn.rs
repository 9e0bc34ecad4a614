/// ESPN wire types: serde shapes for deserializing standings responses.
/// These map to our clean domain types via the mapping functions in client.rs.
///
/// Container fields use `lenient`: a field of the wrong shape deserializes to
/// `None` instead of failing the whole document.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// ---------------------------------------------------------------------------
// Standings  (v2 API)
// ---------------------------------------------------------------------------

/// Flat competitions expose one child; grouped competitions one child per group.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct StandingsResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub children: Option<Vec<EspnGroup>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnGroup {
    pub name: Option<String>, // "English Premier League", "League Phase", "Group A"
    #[serde(default, deserialize_with = "lenient")]
    pub standings: Option<EspnStandings>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandings {
    #[serde(default, deserialize_with = "lenient")]
    pub entries: Option<Vec<EspnEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<EspnTeam>,
    #[serde(default, deserialize_with = "lenient")]
    pub stats: Option<Vec<EspnStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeam {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub logos: Option<Vec<EspnLogo>>,
    #[serde(rename = "recentEvents", default, deserialize_with = "lenient")]
    pub recent_events: Option<Vec<EspnRecentEvent>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnLogo {
    pub href: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnRecentEvent {
    pub result: Option<String>, // "win" | "draw" | "loss"
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStat {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<f64>,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_shaped_children_become_none() {
        let raw: StandingsResponse = serde_json::from_str(r#"{"children": {"oops": 1}}"#).unwrap();
        assert!(raw.children.is_none());
    }

    #[test]
    fn missing_standings_inside_a_group_is_tolerated() {
        let raw: StandingsResponse =
            serde_json::from_str(r#"{"children": [{"name": "A"}, {"standings": "nope"}]}"#).unwrap();
        let children = raw.children.unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.standings.is_none()));
    }

    #[test]
    fn stat_without_value_still_parses() {
        let raw: EspnStat =
            serde_json::from_str(r#"{"name": "overall", "displayValue": "5-2-1"}"#).unwrap();
        assert!(raw.value.is_none());
        assert_eq!(raw.display_value.as_deref(), Some("5-2-1"));
    }
}
