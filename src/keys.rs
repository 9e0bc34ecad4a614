use crate::app::{App, MenuItem};
use crate::season::fixture::Competition;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_key_bindings(key_event: KeyEvent, app: &Arc<Mutex<App>>) {
    let mut guard = app.lock().await;

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Fixtures),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Graphs),
        (_, Char('3'), _) => guard.update_tab(MenuItem::Tables),
        (_, Char('4'), _) => guard.update_tab(MenuItem::Projections),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Fixtures
        (MenuItem::Fixtures, Char('c'), _) => guard.cycle_fixture_filter(),
        (MenuItem::Fixtures, Char('j') | KeyCode::Down, _) => guard.fixtures_scroll_down(),
        (MenuItem::Fixtures, Char('k') | KeyCode::Up, _) => guard.fixtures_scroll_up(),

        // Graphs
        (MenuItem::Graphs, Char('t'), _) => guard.cycle_trend_filter(),
        (MenuItem::Graphs, Char('P'), _) => guard.toggle_goal_competition(Competition::PremierLeague),
        (MenuItem::Graphs, Char('U'), _) => guard.toggle_goal_competition(Competition::ChampionsLeague),
        (MenuItem::Graphs, Char('A'), _) => guard.toggle_goal_competition(Competition::FaCup),
        (MenuItem::Graphs, Char('E'), _) => guard.toggle_goal_competition(Competition::LeagueCup),
        (MenuItem::Graphs, Char('['), _) => guard.toggle_goal_prior(),
        (MenuItem::Graphs, Char(']'), _) => guard.toggle_goal_current(),

        // Standings tables
        (MenuItem::Tables, KeyCode::Tab, _) => guard.switch_table(),
        (MenuItem::Tables, Char('l') | KeyCode::Right, _) => guard.table_cursor_right(),
        (MenuItem::Tables, Char('h') | KeyCode::Left, _) => guard.table_cursor_left(),
        (MenuItem::Tables, KeyCode::Enter, _) => guard.table_sort(),
        (MenuItem::Tables, Char('j') | KeyCode::Down, _) => guard.table_scroll_down(),
        (MenuItem::Tables, Char('k') | KeyCode::Up, _) => guard.table_scroll_up(),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
