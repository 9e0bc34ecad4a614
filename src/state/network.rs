use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error, warn};
use standings_api::StandingsKind;
use standings_api::client::StandingsApi;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Receives fetch requests and runs each one as its own task, so the two
/// standings feeds finish independently and in any order.
pub struct NetworkWorker {
    client: StandingsApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    in_flight: Arc<AtomicUsize>,
    /// Set when any fetch in the current batch failed; cleared when a new batch starts.
    any_failed: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        client: StandingsApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            requests,
            responses,
            in_flight: Arc::new(AtomicUsize::new(0)),
            any_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            match request {
                NetworkRequest::LoadStandings { kind } => self.spawn_load_standings(kind),
            }
        }
    }

    fn spawn_load_standings(&self, kind: StandingsKind) {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            self.any_failed.store(false, Ordering::SeqCst);
            start_loading_animation(self.responses.clone(), self.in_flight.clone());
        }

        let client = self.client.clone();
        let responses = self.responses.clone();
        let in_flight = self.in_flight.clone();
        let any_failed = self.any_failed.clone();

        tokio::spawn(async move {
            debug!("loading {} standings", kind.label());
            let result = client.fetch_standings(kind).await;
            let response = match result {
                Ok(table) => {
                    if table.is_empty() {
                        warn!("{} standings came back empty", kind.label());
                    }
                    NetworkResponse::StandingsLoaded { table }
                }
                Err(err) => {
                    any_failed.store(true, Ordering::SeqCst);
                    error!("{} standings unavailable: {err}", kind.label());
                    NetworkResponse::StandingsUnavailable {
                        kind,
                        message: err.to_string(),
                    }
                }
            };

            if let Err(e) = responses.send(response).await {
                error!("Failed to send network response: {e}");
            }

            if in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
                stop_loading_animation(&responses, !any_failed.load(Ordering::SeqCst)).await;
            }
        });
    }
}

fn start_loading_animation(
    responses: mpsc::Sender<NetworkResponse>,
    in_flight: Arc<AtomicUsize>,
) {
    tokio::spawn(async move {
        let mut loading_state = LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let mut spinner_index = 1;
        let mut interval = tokio::time::interval(Duration::from_millis(33));
        loop {
            if responses
                .send(NetworkResponse::LoadingStateChanged { loading_state })
                .await
                .is_err()
            {
                break;
            }
            interval.tick().await;
            if in_flight.load(Ordering::SeqCst) == 0 {
                break;
            }
            loading_state.spinner_char = SPINNER_CHARS[spinner_index];
            spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
        }
    });
}

async fn stop_loading_animation(responses: &mpsc::Sender<NetworkResponse>, is_ok: bool) {
    tokio::time::sleep(Duration::from_millis(15)).await;

    let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
    let _ = responses
        .send(NetworkResponse::LoadingStateChanged {
            loading_state: LoadingState { is_loading: false, spinner_char },
        })
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn failed_fetch_reports_only_its_own_competition() {
        // nothing listens on the discard port, so both fetches fail fast
        let client = StandingsApi::with_base_url("http://127.0.0.1:9");
        let (req_tx, req_rx) = mpsc::channel(8);
        let (resp_tx, mut resp_rx) = mpsc::channel(64);
        let worker = NetworkWorker::new(client, req_rx, resp_tx);
        let handle = tokio::spawn(worker.run());

        req_tx
            .send(NetworkRequest::LoadStandings { kind: StandingsKind::Flat })
            .await
            .unwrap();
        req_tx
            .send(NetworkRequest::LoadStandings { kind: StandingsKind::Grouped })
            .await
            .unwrap();

        let mut unavailable = Vec::new();
        let mut stopped_with = None;
        while unavailable.len() < 2 || stopped_with.is_none() {
            match resp_rx.recv().await {
                Some(NetworkResponse::StandingsUnavailable { kind, .. }) => unavailable.push(kind),
                Some(NetworkResponse::LoadingStateChanged { loading_state }) => {
                    if !loading_state.is_loading {
                        stopped_with = Some(loading_state.spinner_char);
                    }
                }
                Some(NetworkResponse::StandingsLoaded { .. }) => panic!("nothing should load"),
                None => break,
            }
        }

        unavailable.sort_by_key(|k| *k == StandingsKind::Grouped);
        assert_eq!(unavailable, vec![StandingsKind::Flat, StandingsKind::Grouped]);
        assert_eq!(stopped_with, Some(ERROR_CHAR));
        handle.abort();
    }

    #[tokio::test]
    async fn error_indicator_survives_a_later_success() {
        let mut server = mockito::Server::new_async().await;
        let _failing = server
            .mock("GET", "/apis/v2/sports/soccer/eng.1/standings")
            .with_status(500)
            .create_async()
            .await;
        let _slow = server
            .mock("GET", "/apis/v2/sports/soccer/uefa.champions/standings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(300));
                w.write_all(br#"{"children": []}"#)
            })
            .create_async()
            .await;

        let client = StandingsApi::with_base_url(server.url());
        let (req_tx, req_rx) = mpsc::channel(8);
        let (resp_tx, mut resp_rx) = mpsc::channel(256);
        let handle = tokio::spawn(NetworkWorker::new(client, req_rx, resp_tx).run());

        for kind in [StandingsKind::Flat, StandingsKind::Grouped] {
            req_tx.send(NetworkRequest::LoadStandings { kind }).await.unwrap();
        }

        let mut unavailable = Vec::new();
        let mut loaded = Vec::new();
        let mut stopped_with = None;
        while loaded.len() + unavailable.len() < 2 || stopped_with.is_none() {
            match resp_rx.recv().await {
                Some(NetworkResponse::StandingsUnavailable { kind, .. }) => unavailable.push(kind),
                Some(NetworkResponse::StandingsLoaded { table }) => loaded.push(table.kind),
                Some(NetworkResponse::LoadingStateChanged { loading_state }) => {
                    if !loading_state.is_loading {
                        stopped_with = Some(loading_state.spinner_char);
                    }
                }
                None => break,
            }
        }

        assert_eq!(unavailable, vec![StandingsKind::Flat]);
        assert_eq!(loaded, vec![StandingsKind::Grouped]);
        assert_eq!(stopped_with, Some(ERROR_CHAR));
        handle.abort();
    }
}
