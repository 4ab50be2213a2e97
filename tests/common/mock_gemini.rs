//! Mock Gemini server: `:generateContent` and `:predict` on any model path.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }

    pub fn is_text(&self) -> bool {
        self.path.ends_with(":generateContent")
    }

    pub fn is_image(&self) -> bool {
        self.path.ends_with(":predict")
    }
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": { "code": status, "message": message } })
                .to_string()
                .into_bytes(),
            delay_ms: 0,
        }
    }

    /// `generateContent` answer whose single text part is `text`.
    pub fn text(text: &str) -> Self {
        Self::json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
        }))
    }

    /// `generateContent` answer carrying `ideas` serialized as the text part.
    pub fn ideas(ideas: &[(&str, &str, &str)]) -> Self {
        let items: Vec<Value> = ideas
            .iter()
            .map(|(name, meaning, prompt)| {
                json!({ "name": name, "meaning": meaning, "imagePrompt": prompt })
            })
            .collect();
        Self::text(&Value::Array(items).to_string())
    }

    /// `predict` answer with one JPEG prediction of `bytes`.
    pub fn image(bytes: &[u8]) -> Self {
        Self::json(json!({
            "predictions": [{
                "bytesBase64Encoded": STANDARD.encode(bytes),
                "mimeType": "image/jpeg"
            }]
        }))
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    text_responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Image requests run concurrently, so answers are picked by prompt.
    image_rules: Arc<Mutex<Vec<(String, MockResponse)>>>,
    image_default: Arc<Mutex<MockResponse>>,
}

/// Mock Gemini API server for testing.
pub struct MockGemini {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockGemini {
    /// Start a new mock server. Image requests succeed by default.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            text_responses: Arc::new(Mutex::new(VecDeque::new())),
            image_rules: Arc::new(Mutex::new(Vec::new())),
            image_default: Arc::new(Mutex::new(MockResponse::image(b"jpeg-bytes"))),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue the answer to the next text request.
    pub async fn enqueue_text(&self, resp: MockResponse) {
        self.state.text_responses.lock().await.push_back(resp);
    }

    /// Answer image requests whose prompt contains `needle` with `resp`.
    pub async fn image_for_prompt(&self, needle: &str, resp: MockResponse) {
        self.state
            .image_rules
            .lock()
            .await
            .push((needle.to_string(), resp));
    }

    /// Answer for image requests that match no rule.
    pub async fn set_default_image(&self, resp: MockResponse) {
        *self.state.image_default.lock().await = resp;
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub async fn text_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests()
            .await
            .into_iter()
            .filter(CapturedRequest::is_text)
            .collect()
    }

    pub async fn image_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests()
            .await
            .into_iter()
            .filter(CapturedRequest::is_image)
            .collect()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body_bytes = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    let captured = CapturedRequest {
        method,
        path,
        headers,
        body: body_bytes,
    };
    state.requests.lock().await.push(captured.clone());

    let mock_resp = if captured.is_text() {
        state
            .text_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockResponse::error(500, "no text response queued"))
    } else if captured.is_image() {
        let body = String::from_utf8_lossy(&captured.body).to_string();
        let rule = state
            .image_rules
            .lock()
            .await
            .iter()
            .find(|(needle, _)| body.contains(needle.as_str()))
            .map(|(_, resp)| resp.clone());
        match rule {
            Some(resp) => resp,
            None => state.image_default.lock().await.clone(),
        }
    } else {
        MockResponse::error(404, "unknown method")
    };

    if mock_resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(mock_resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(mock_resp.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(mock_resp.body))
        .unwrap()
}
