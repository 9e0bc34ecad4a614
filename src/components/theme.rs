use crate::analytics::difficulty::{Outlook, Tier};
use crate::analytics::trend::Trend;
use crate::season::fixture::{Competition, MatchResult};
use tui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    /// Club colour: current season lines and highlights.
    Primary,
    /// Prior season series.
    Secondary,
    Accent,
    Dim,
    Good,
    Neutral,
    Bad,
}

pub fn resolve(color: ThemeColor) -> Style {
    match color {
        ThemeColor::Primary => Style::default().fg(Color::Rgb(219, 0, 7)),
        ThemeColor::Secondary => Style::default().fg(Color::Rgb(160, 174, 192)),
        ThemeColor::Accent => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ThemeColor::Dim => Style::default().fg(Color::Indexed(240)),
        ThemeColor::Good => Style::default().fg(Color::Green),
        ThemeColor::Neutral => Style::default().fg(Color::Yellow),
        ThemeColor::Bad => Style::default().fg(Color::Red),
    }
}

pub fn result_style(result: MatchResult) -> Style {
    match result {
        MatchResult::Win => resolve(ThemeColor::Good),
        MatchResult::Draw => resolve(ThemeColor::Neutral),
        MatchResult::Loss => resolve(ThemeColor::Bad),
    }
}

/// Green for a gain, red for a loss, yellow for level.
pub fn signed_style(value: i32) -> Style {
    match value.signum() {
        1 => resolve(ThemeColor::Good),
        0 => resolve(ThemeColor::Neutral),
        _ => resolve(ThemeColor::Bad),
    }
}

pub fn trend_style(trend: Option<Trend>) -> Style {
    match trend {
        Some(Trend::Better) => resolve(ThemeColor::Good),
        Some(Trend::Same) => resolve(ThemeColor::Neutral),
        Some(Trend::Worse) => resolve(ThemeColor::Bad),
        None => resolve(ThemeColor::Dim),
    }
}

pub fn tier_style(tier: Tier) -> Style {
    let color = match tier {
        Tier::VeryHard => Color::Red,
        Tier::Hard => Color::LightRed,
        Tier::Medium => Color::Yellow,
        Tier::Easy => Color::LightGreen,
        Tier::VeryEasy => Color::Green,
    };
    Style::default().fg(color)
}

pub fn outlook_style(outlook: Outlook) -> Style {
    let color = match outlook {
        Outlook::VeryFavorable => Color::Green,
        Outlook::Favorable => Color::LightGreen,
        Outlook::Balanced => Color::Yellow,
        Outlook::Challenging => Color::LightRed,
        Outlook::VeryChallenging => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn competition_style(competition: Competition) -> Style {
    let color = match competition {
        Competition::PremierLeague => Color::Magenta,
        Competition::ChampionsLeague => Color::Blue,
        Competition::FaCup => Color::Red,
        Competition::LeagueCup => Color::Green,
    };
    Style::default().fg(color)
}
