use log::LevelFilter;
use standings_api::client::ESPN_WEB_BASE;
use std::path::PathBuf;

pub const ENV_SEASON_JSON: &str = "PACETUI_SEASON_JSON";
pub const ENV_ESPN_BASE: &str = "PACETUI_ESPN_BASE";
pub const ENV_LOG: &str = "PACETUI_LOG";
pub const ENV_FULL_SCREEN: &str = "PACETUI_FULL_SCREEN";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    /// Replaces the embedded season dataset.
    pub season_path: Option<PathBuf>,
    pub espn_base: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            season_path: None,
            espn_base: ESPN_WEB_BASE.to_string(),
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            full_screen: var(ENV_FULL_SCREEN).is_some_and(|v| parse_flag(&v)),
            log_level: var(ENV_LOG).and_then(|v| v.parse::<LevelFilter>().ok()),
            season_path: var(ENV_SEASON_JSON).map(PathBuf::from),
            espn_base: var(ENV_ESPN_BASE).unwrap_or_else(|| ESPN_WEB_BASE.to_string()),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> AppSettings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let s = settings(&[]);
        assert!(!s.full_screen);
        assert_eq!(s.log_level, None);
        assert_eq!(s.season_path, None);
        assert_eq!(s.espn_base, ESPN_WEB_BASE);
    }

    #[test]
    fn reads_every_variable() {
        let s = settings(&[
            (ENV_FULL_SCREEN, "true"),
            (ENV_LOG, "debug"),
            (ENV_SEASON_JSON, "/tmp/season.json"),
            (ENV_ESPN_BASE, "http://localhost:8080"),
        ]);
        assert!(s.full_screen);
        assert_eq!(s.log_level, Some(LevelFilter::Debug));
        assert_eq!(s.season_path, Some(PathBuf::from("/tmp/season.json")));
        assert_eq!(s.espn_base, "http://localhost:8080");
    }

    #[test]
    fn blank_and_invalid_values_are_ignored() {
        let s = settings(&[(ENV_LOG, "chatty"), (ENV_ESPN_BASE, "  "), (ENV_FULL_SCREEN, "0")]);
        assert_eq!(s.log_level, None);
        assert_eq!(s.espn_base, ESPN_WEB_BASE);
        assert!(!s.full_screen);
    }
}
