use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use standings_api::{StandingsKind, StandingsTable};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadStandings { kind: StandingsKind },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    StandingsLoaded { table: StandingsTable },
    /// The fetch failed; only this competition's table is affected.
    StandingsUnavailable { kind: StandingsKind, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
