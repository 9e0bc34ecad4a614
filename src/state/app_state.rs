use crate::analytics::filter::CompetitionFilter;
use crate::analytics::goals::GoalSelection;
use crate::analytics::trend::TrendFilter;
use crate::app::MenuItem;
use standings_api::{SortState, StandingsKind, StandingsTable, StatKey};

// ---------------------------------------------------------------------------
// Fixtures tab state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FixturesState {
    pub filter: CompetitionFilter,
    pub scroll_offset: u16,
}

impl FixturesState {
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.cycle();
        self.scroll_offset = 0;
    }
}

// ---------------------------------------------------------------------------
// Standings tables state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub enum TableStatus {
    #[default]
    Loading,
    Loaded(StandingsTable),
    /// Fetch failed, or succeeded with nothing to show.
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct TableState {
    pub status: TableStatus,
    pub sort: SortState,
    /// Index into `StatKey::COLUMNS` under the column cursor.
    pub cursor: usize,
    pub scroll_offset: u16,
}

impl TableState {
    pub fn table(&self) -> Option<&StandingsTable> {
        match &self.status {
            TableStatus::Loaded(table) => Some(table),
            _ => None,
        }
    }

    pub fn cursor_key(&self) -> StatKey {
        StatKey::COLUMNS
            .get(self.cursor)
            .copied()
            .unwrap_or_default()
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(StatKey::COLUMNS.len() - 1);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Sort by the column under the cursor. Columns that cannot be sorted
    /// leave the current order alone.
    pub fn sort_by_cursor(&mut self) {
        let key = self.cursor_key();
        if key.is_sortable() {
            self.sort = self.sort.toggled(key);
            self.scroll_offset = 0;
        }
    }
}

#[derive(Debug, Default)]
pub struct StandingsState {
    pub flat: TableState,
    pub grouped: TableState,
    pub focused: StandingsKind,
}

impl StandingsState {
    pub fn get(&self, kind: StandingsKind) -> &TableState {
        match kind {
            StandingsKind::Flat => &self.flat,
            StandingsKind::Grouped => &self.grouped,
        }
    }

    pub fn get_mut(&mut self, kind: StandingsKind) -> &mut TableState {
        match kind {
            StandingsKind::Flat => &mut self.flat,
            StandingsKind::Grouped => &mut self.grouped,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TableState {
        self.get_mut(self.focused)
    }

    pub fn switch_focus(&mut self) {
        self.focused = self.focused.other();
    }

    pub fn on_loaded(&mut self, table: StandingsTable) {
        let state = self.get_mut(table.kind);
        state.status = if table.is_empty() {
            TableStatus::Unavailable("no standings in response".to_string())
        } else {
            TableStatus::Loaded(table)
        };
    }

    pub fn on_unavailable(&mut self, kind: StandingsKind, message: String) {
        self.get_mut(kind).status = TableStatus::Unavailable(message);
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub fixtures: FixturesState,
    pub standings: StandingsState,
    pub trend_filter: TrendFilter,
    pub goal_selection: GoalSelection,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standings_api::SortDirection;

    #[test]
    fn failure_in_one_table_leaves_the_other_alone() {
        let mut state = StandingsState::default();
        state.on_loaded(StandingsTable::flat(vec![Default::default()]));
        state.on_unavailable(StandingsKind::Grouped, "HTTP 503".into());

        assert!(state.get(StandingsKind::Flat).table().is_some());
        assert!(matches!(
            state.get(StandingsKind::Grouped).status,
            TableStatus::Unavailable(_)
        ));
    }

    #[test]
    fn empty_table_counts_as_unavailable() {
        let mut state = StandingsState::default();
        state.on_loaded(StandingsTable::empty(StandingsKind::Grouped));
        assert!(matches!(
            state.get(StandingsKind::Grouped).status,
            TableStatus::Unavailable(_)
        ));
    }

    #[test]
    fn enter_on_a_column_sorts_and_toggles() {
        let mut table = TableState::default();
        table.cursor_right();
        table.cursor_right();
        assert_eq!(table.cursor_key(), StatKey::Wins);

        table.sort_by_cursor();
        assert_eq!(table.sort.key, StatKey::Wins);
        assert_eq!(table.sort.direction, SortDirection::Descending);

        table.sort_by_cursor();
        assert_eq!(table.sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn unsortable_column_keeps_current_sort() {
        let mut table = TableState::default();
        table.cursor_right();
        assert_eq!(table.cursor_key(), StatKey::GamesPlayed);
        table.sort_by_cursor();
        assert_eq!(table.sort, SortState::default());
    }

    #[test]
    fn cursor_stays_within_columns() {
        let mut table = TableState::default();
        table.cursor_left();
        assert_eq!(table.cursor, 0);
        for _ in 0..20 {
            table.cursor_right();
        }
        assert_eq!(table.cursor_key(), StatKey::Points);
    }

    #[test]
    fn fixture_filter_cycle_resets_scroll() {
        let mut fixtures = FixturesState {
            scroll_offset: 7,
            ..Default::default()
        };
        fixtures.cycle_filter();
        assert_eq!(fixtures.scroll_offset, 0);
        assert_eq!(fixtures.filter.label(), "PL");
    }
}
