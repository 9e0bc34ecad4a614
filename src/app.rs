use crate::analytics::SeasonInsights;
use crate::analytics::filter::{self, DisplayRow, View};
use crate::season::dataset::SeasonDataset;
use crate::season::fixture::Competition;
use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use log::info;
use standings_api::{StandingsKind, StandingsTable};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Fixtures,
    Graphs,
    Tables,
    Projections,
    Help,
}

impl MenuItem {
    /// Which fixture view a tab feeds; the competition filter only applies to
    /// the fixture list itself.
    pub fn view(&self) -> View {
        match self {
            MenuItem::Graphs => View::Analytics,
            _ => View::Fixtures,
        }
    }
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
    pub dataset: SeasonDataset,
    pub insights: SeasonInsights,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let settings = AppSettings::load();

        if let Some(level) = settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        let dataset = SeasonDataset::load(settings.season_path.as_deref())?;
        Ok(Self::with_dataset(settings, dataset))
    }

    pub fn with_dataset(settings: AppSettings, dataset: SeasonDataset) -> Self {
        let insights = SeasonInsights::compute(&dataset);
        info!(
            "{} {}: {} fixtures, {} league matches played",
            dataset.club.name,
            dataset.seasons.current,
            dataset.fixtures.len(),
            insights.analysis.summary.matches_played
        );
        Self {
            settings,
            state: AppState::new(),
            dataset,
            insights,
        }
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_standings_loaded(&mut self, table: StandingsTable) {
        info!("{} standings: {} teams", table.kind.label(), table.rows.len());
        self.state.standings.on_loaded(table);
    }

    pub fn on_standings_unavailable(&mut self, kind: StandingsKind, message: String) {
        self.state.last_error = Some(format!("{}: {message}", kind.label()));
        self.state.standings.on_unavailable(kind, message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Fixtures and graphs
    // -----------------------------------------------------------------------

    /// Rows for the fixture table under the current filter, rebuilt on every
    /// call from the annotated list.
    pub fn fixture_rows(&self) -> Vec<DisplayRow<'_>> {
        let filtered = filter::filter_fixtures(
            &self.insights.analysis.fixtures,
            self.state.fixtures.filter,
            self.state.active_tab.view(),
        );
        filter::display_rows(&filtered)
    }

    pub fn cycle_fixture_filter(&mut self) {
        self.state.fixtures.cycle_filter();
    }

    pub fn fixtures_scroll_down(&mut self) {
        let max = self.fixture_rows().len().saturating_sub(1) as u16;
        self.state.fixtures.scroll_offset = (self.state.fixtures.scroll_offset + 1).min(max);
    }

    pub fn fixtures_scroll_up(&mut self) {
        self.state.fixtures.scroll_offset = self.state.fixtures.scroll_offset.saturating_sub(1);
    }

    pub fn cycle_trend_filter(&mut self) {
        self.state.trend_filter = self.state.trend_filter.cycle();
    }

    pub fn toggle_goal_competition(&mut self, competition: Competition) {
        self.state.goal_selection.toggle_competition(competition);
    }

    pub fn toggle_goal_prior(&mut self) {
        self.state.goal_selection.toggle_prior();
    }

    pub fn toggle_goal_current(&mut self) {
        self.state.goal_selection.toggle_current();
    }

    // -----------------------------------------------------------------------
    // Standings tables
    // -----------------------------------------------------------------------

    pub fn switch_table(&mut self) {
        self.state.standings.switch_focus();
    }

    pub fn table_cursor_left(&mut self) {
        self.state.standings.focused_mut().cursor_left();
    }

    pub fn table_cursor_right(&mut self) {
        self.state.standings.focused_mut().cursor_right();
    }

    pub fn table_sort(&mut self) {
        self.state.standings.focused_mut().sort_by_cursor();
    }

    pub fn table_scroll_down(&mut self) {
        let table = self.state.standings.focused_mut();
        let max = table.table().map(|t| t.rows.len()).unwrap_or(0).saturating_sub(1) as u16;
        table.scroll_offset = (table.scroll_offset + 1).min(max);
    }

    pub fn table_scroll_up(&mut self) {
        let table = self.state.standings.focused_mut();
        table.scroll_offset = table.scroll_offset.saturating_sub(1);
    }
}
