use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub const TRANSLATE_PATH: &str = "/translate";
pub const TTS_PATH: &str = "/text-to-speech";

/// Canned answer for one upstream path
#[derive(Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// One call received by the stub
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct StubState {
    responses: Mutex<HashMap<String, StubResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// In-process stand-in for the Sarvam API and the front-end dev server.
///
/// POSTs to the Sarvam paths are recorded and answered with the canned
/// response for that path; any other request gets a small HTML page echoing
/// the method and URI.
#[derive(Clone)]
pub struct StubUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubUpstream {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        state.responses.lock().insert(
            TRANSLATE_PATH.to_string(),
            StubResponse::new(200, r#"{"request_id":"stub","translated_text":"नमस्ते","source_language_code":"en-IN"}"#),
        );
        state.responses.lock().insert(
            TTS_PATH.to_string(),
            StubResponse::new(200, r#"{"request_id":"stub","audios":["BASE64DATA"]}"#),
        );

        let app = Router::new()
            .route(TRANSLATE_PATH, post(record_and_respond))
            .route(TTS_PATH, post(record_and_respond))
            .fallback(dev_page)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub upstream");
        let addr = listener.local_addr().expect("Failed to get stub addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn respond(&self, path: &str, response: StubResponse) {
        self.state
            .responses
            .lock()
            .insert(path.to_string(), response);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().clone()
    }

    pub fn last_call(&self, path: &str) -> RecordedCall {
        self.calls()
            .into_iter()
            .rev()
            .find(|call| call.path == path)
            .unwrap_or_else(|| panic!("No call recorded for {}", path))
    }
}

async fn record_and_respond(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.calls.lock().push(RecordedCall {
        path: path.clone(),
        api_key: headers
            .get("api-subscription-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let response = state
        .responses
        .lock()
        .get(&path)
        .cloned()
        .unwrap_or_else(|| StubResponse::new(404, "not found"));

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    (
        StatusCode::from_u16(response.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}

async fn dev_page(method: Method, uri: Uri) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        format!("<html>dev server: {} {}</html>", method, uri),
    )
        .into_response()
}
