//! Stub garage backend for end-to-end tests
//!
//! Serves the `{ success, data?, message? }` envelope contract the console
//! consumes. Each test gets an isolated instance on a random port with
//! scriptable failure modes.

use super::fixtures::{job_card_42, job_card_7};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use garage_console::api::{ApiEnvelope, JobCard, JobCardUpdate, JobStatus};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Default)]
struct BackendState {
    cards: HashMap<String, JobCard>,
    reject_update_with: Option<String>,
    fail_reads: bool,
}

type SharedState = Arc<Mutex<BackendState>>;

/// Stub backend instance
///
/// When dropped, the server gracefully shuts down.
pub struct StubBackend {
    /// Base URL for the client under test (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the stub is listening on
    pub port: u16,

    state: SharedState,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl StubBackend {
    /// Spawns a stub backend seeded with the standard fixtures.
    pub async fn spawn() -> Self {
        Self::spawn_with_cards(vec![job_card_42(), job_card_7()]).await
    }

    /// Spawns a stub backend seeded with the given cards.
    pub async fn spawn_with_cards(cards: Vec<JobCard>) -> Self {
        let state: SharedState = Arc::new(Mutex::new(BackendState {
            cards: cards.into_iter().map(|card| (card.id.clone(), card)).collect(),
            ..Default::default()
        }));

        let app = Router::new()
            .route("/api/job-cards", get(list_cards))
            .route("/api/job-cards/{id}", get(fetch_card).put(update_card))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Stub backend failed");
        });

        Self {
            base_url,
            port,
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Make every PUT come back as `success: false` with this message.
    pub fn reject_updates_with(&self, message: impl Into<String>) {
        self.state.lock().unwrap().reject_update_with = Some(message.into());
    }

    /// Make every GET come back as `success: false`.
    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    /// Replace (or insert) a card in the seed data.
    pub fn put_card(&self, card: JobCard) {
        self.state
            .lock()
            .unwrap()
            .cards
            .insert(card.id.clone(), card);
    }

    /// Snapshot of a card as the backend currently holds it.
    pub fn card(&self, id: &str) -> Option<JobCard> {
        self.state.lock().unwrap().cards.get(id).cloned()
    }
}

async fn fetch_card(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Json<ApiEnvelope<JobCard>> {
    let state = state.lock().unwrap();
    if state.fail_reads {
        return Json(ApiEnvelope {
            success: false,
            data: None,
            message: Some("Internal error".to_string()),
        });
    }
    match state.cards.get(&id) {
        Some(card) => Json(ApiEnvelope {
            success: true,
            data: Some(card.clone()),
            message: None,
        }),
        None => Json(ApiEnvelope {
            success: false,
            data: None,
            message: Some("Job card not found".to_string()),
        }),
    }
}

async fn update_card(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(update): Json<JobCardUpdate>,
) -> Json<ApiEnvelope<JobCard>> {
    let mut state = state.lock().unwrap();
    if let Some(message) = state.reject_update_with.clone() {
        return Json(ApiEnvelope {
            success: false,
            data: None,
            message: Some(message),
        });
    }
    let card = JobCard {
        id: id.clone(),
        customer_name: update.customer_name,
        phone: update.phone,
        vehicle_make: update.vehicle_make,
        vehicle_model: update.vehicle_model,
        registration_no: update.registration_no,
        service_type: update.service_type,
        status: JobStatus::from_str(&update.status).unwrap_or(JobStatus::Pending),
        bill_amount: update.bill_amount,
        notes: update.notes,
    };
    state.cards.insert(id, card.clone());
    Json(ApiEnvelope {
        success: true,
        data: Some(card),
        message: None,
    })
}

async fn list_cards(State(state): State<SharedState>) -> Json<ApiEnvelope<Vec<JobCard>>> {
    let state = state.lock().unwrap();
    if state.fail_reads {
        return Json(ApiEnvelope {
            success: false,
            data: None,
            message: Some("Internal error".to_string()),
        });
    }
    let mut cards: Vec<JobCard> = state.cards.values().cloned().collect();
    cards.sort_by(|a, b| a.id.cmp(&b.id));
    Json(ApiEnvelope {
        success: true,
        data: Some(cards),
        message: None,
    })
}

/// A base URL nothing listens on; connections are refused immediately.
pub async fn dead_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let port = listener
        .local_addr()
        .expect("Failed to get local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
