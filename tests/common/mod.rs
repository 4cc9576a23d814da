//! Shared test utilities: a mock quote server on an ephemeral port.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response for the mock server to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn quote(person: &str, quote: &str) -> Self {
        Self {
            status: 200,
            body: format!(r#"{{"Person":"{}","Quote":"{}"}}"#, person, quote),
            delay_ms: 0,
        }
    }

    /// A body returned verbatim, valid JSON or not.
    pub fn raw(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    hits: Arc<AtomicUsize>,
}

/// Serves queued responses from `GET /`. With an empty queue it falls back
/// to a fixed well-formed quote.
pub struct MockQuoteServer {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockQuoteServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/", get(serve_quote))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub async fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Wait until at least `count` requests have been served.
    pub async fn wait_for_hits(&self, count: usize) {
        for _ in 0..100 {
            if self.hits() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("mock server never saw {} request(s)", count);
    }
}

async fn serve_quote(State(state): State<MockState>) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let next = state.responses.lock().await.pop_front();
    match next {
        Some(response) => {
            if response.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
            }
            let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
            (status, response.body)
        }
        None => (
            StatusCode::OK,
            r#"{"Person":"System","Quote":"Default"}"#.to_string(),
        ),
    }
}
