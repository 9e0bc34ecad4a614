mod analytics;
mod app;
mod components;
mod draw;
mod keys;
mod season;
mod state;
mod ui;

use crate::app::App;
use crate::state::messages::{NetworkRequest, NetworkResponse, UiEvent};
use crate::state::network::{LoadingState, NetworkWorker};
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::{error, info};
use standings_api::StandingsKind;
use standings_api::client::StandingsApi;
use std::io::Stdout;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();

    tui_logger::init_logger(log::LevelFilter::Error)?;
    tui_logger::set_default_level(log::LevelFilter::Error);

    // Load the dataset before touching the terminal so a bad file fails loudly.
    let app = App::new()?;
    let client = StandingsApi::with_base_url(app.settings.espn_base.clone());
    let app = Arc::new(Mutex::new(app));

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal();

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(100);
    let (network_resp_tx, network_resp_rx) = mpsc::channel::<NetworkResponse>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Network thread
    let network_worker = NetworkWorker::new(client, network_req_rx, network_resp_tx);
    let network_task = tokio::spawn(network_worker.run());

    // Fetch both tables on startup
    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx, network_req_tx, network_resp_rx).await;

    input_handler.abort();
    network_task.abort();

    Ok(())
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("pacetui {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "pacetui - season pace dashboard for the terminal

Usage:
  pacetui
  pacetui --help
  pacetui --version

Environment:
  PACETUI_SEASON_JSON   Path to a season dataset JSON file (default: built-in)
  PACETUI_ESPN_BASE     Standings API base URL (default https://site.web.api.espn.com)
  PACETUI_LOG           Log level: error, warn, info, debug, trace
  PACETUI_FULL_SCREEN   Start without the tab bar (1/true)"
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    network_requests: mpsc::Sender<NetworkRequest>,
    mut network_responses: mpsc::Receiver<NetworkResponse>,
) {
    let mut loading = LoadingState::default();

    loop {
        tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                let should_redraw = handle_ui_event(ui_event, &app, &network_requests).await;
                if should_redraw {
                    let mut app_guard = app.lock().await;
                    draw::draw(&mut terminal, &mut app_guard, loading);
                }
            }

            Some(response) = network_responses.recv() => {
                handle_network_response(response, &app, &mut loading).await;
                let mut app_guard = app.lock().await;
                draw::draw(&mut terminal, &mut app_guard, loading);
            }

            else => break,
        }
    }
}

async fn handle_ui_event(
    ui_event: UiEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) -> bool {
    match ui_event {
        UiEvent::AppStarted => {
            for kind in [StandingsKind::Flat, StandingsKind::Grouped] {
                if network_requests
                    .send(NetworkRequest::LoadStandings { kind })
                    .await
                    .is_err()
                {
                    error!("network worker stopped before {} was requested", kind.label());
                }
            }
            true
        }
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app).await;
            true
        }
        UiEvent::Resize => true,
    }
}

async fn handle_network_response(
    response: NetworkResponse,
    app: &Arc<Mutex<App>>,
    loading: &mut LoadingState,
) {
    match response {
        NetworkResponse::LoadingStateChanged { loading_state } => {
            *loading = loading_state;
        }
        NetworkResponse::StandingsLoaded { table } => {
            let mut guard = app.lock().await;
            guard.on_standings_loaded(table);
        }
        NetworkResponse::StandingsUnavailable { kind, message } => {
            info!("showing {} as unavailable", kind.label());
            let mut guard = app.lock().await;
            guard.on_standings_unavailable(kind, message);
        }
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        if let Ok(event) = crossterm_event::read() {
            let ui_event = match event {
                Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
                Event::Resize(_, _) => Some(UiEvent::Resize),
                _ => None,
            };

            if let Some(ui_event) = ui_event
                && ui_events.send(ui_event).await.is_err()
            {
                break;
            }
        }
    }
}

fn setup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Hide);
    let _ = execute!(stdout, terminal::EnterAlternateScreen);
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    if let Err(e) = terminal::enable_raw_mode() {
        error!("could not enable raw mode: {e}");
    }
}

pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
