//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_gemini;

use babynames::config::{GeminiConfig, SecureString, ShareConfig};
use babynames::controller::Controller;
use babynames::generation::{GeminiBackend, GenerationError, NameGenerationClient, NameGenerator};
use babynames::model::{NameRecord, RequestParameters};
use babynames::share::{ClipboardWriter, ShareError, Sharer};
use babynames::storage::{FavoritesStore, KeyValueStore, MemoryStore};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub use mock_gemini::{CapturedRequest, MockGemini, MockResponse};

pub const TEST_API_KEY: &str = "test-key";

/// Six ideas for "Japanese" / "A", first one is Aiko.
pub const JAPANESE_A: &[(&str, &str, &str)] = &[
    ("Aiko", "Love child", "a baby in cherry blossoms"),
    ("Akira", "Bright", "a baby at sunrise"),
    ("Asuka", "Flying bird", "a baby with cranes"),
    ("Ayame", "Iris", "a baby among irises"),
    ("Aoi", "Hollyhock", "a baby in a hollyhock garden"),
    ("Arata", "Fresh", "a baby by a spring stream"),
];

pub fn gemini_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        base_url: base_url.to_string(),
        ..GeminiConfig::default()
    }
}

/// Generation client pointed at the mock server.
pub fn client_for(mock: &MockGemini) -> NameGenerationClient<GeminiBackend> {
    let backend = GeminiBackend::new(
        &gemini_config(&mock.base_url()),
        SecureString::new(TEST_API_KEY.to_string()),
    )
    .expect("client builds");
    NameGenerationClient::new(backend)
}

pub fn japanese_a() -> RequestParameters {
    RequestParameters::new("Japanese", "A").unwrap()
}

pub fn record(name: &str) -> NameRecord {
    NameRecord::new(name, format!("meaning of {name}"), "data:image/jpeg;base64,AAAA")
}

/// Create a temporary config file with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Controller helpers -------------------------------------------------------

/// Generator that returns a scripted result.
pub struct ScriptedGenerator {
    results: Mutex<Vec<Result<Vec<NameRecord>, GenerationError>>>,
    pub calls: Mutex<Vec<RequestParameters>>,
}

impl ScriptedGenerator {
    pub fn new(results: Vec<Result<Vec<NameRecord>, GenerationError>>) -> Self {
        Self {
            results: Mutex::new(results),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl NameGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        params: &RequestParameters,
    ) -> Result<Vec<NameRecord>, GenerationError> {
        self.calls.lock().push(params.clone());
        let mut results = self.results.lock();
        if results.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        results.remove(0)
    }
}

pub type SpyBuffer = Arc<Mutex<Vec<String>>>;

/// Clipboard that records writes, or fails every write.
pub struct SpyClipboard {
    pub writes: SpyBuffer,
    pub fail: bool,
}

impl ClipboardWriter for SpyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError> {
        if self.fail {
            return Err(ShareError::Clipboard("no clipboard".to_string()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub controller: Controller,
    pub store: Arc<MemoryStore>,
    pub generator: Arc<ScriptedGenerator>,
    pub clipboard: SpyBuffer,
}

/// Controller over in-memory storage, a scripted generator and a spy clipboard.
pub fn harness(results: Vec<Result<Vec<NameRecord>, GenerationError>>) -> Harness {
    harness_with(results, Arc::new(MemoryStore::new()), false)
}

pub fn harness_with(
    results: Vec<Result<Vec<NameRecord>, GenerationError>>,
    store: Arc<MemoryStore>,
    clipboard_fails: bool,
) -> Harness {
    let generator = Arc::new(ScriptedGenerator::new(results));
    let clipboard: SpyBuffer = Arc::new(Mutex::new(Vec::new()));
    let sharer = Sharer::new(
        None,
        Box::new(SpyClipboard {
            writes: Arc::clone(&clipboard),
            fail: clipboard_fails,
        }),
    );
    let kv: Arc<dyn KeyValueStore> = store.clone();
    let mut controller = Controller::new(
        generator.clone(),
        FavoritesStore::new(kv),
        sharer,
        Duration::from_secs(ShareConfig::default().notification_seconds),
    );
    controller.load_favorites();
    Harness {
        controller,
        store,
        generator,
        clipboard,
    }
}

// -- App helpers --------------------------------------------------------------

use babynames::ui::app::App;
use babynames::ui::events::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc;

pub struct AppHarness {
    pub app: App,
    pub events: mpsc::Receiver<AppEvent>,
    pub store: Arc<MemoryStore>,
    pub clipboard: SpyBuffer,
    // Keeps spawned generations alive for the test.
    pub runtime: tokio::runtime::Runtime,
}

pub fn make_app(results: Vec<Result<Vec<NameRecord>, GenerationError>>) -> AppHarness {
    let h = harness(results);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let (tx, rx) = mpsc::channel();
    let app = App::new(h.controller, runtime.handle().clone(), tx);
    AppHarness {
        app,
        events: rx,
        store: h.store,
        clipboard: h.clipboard,
        runtime,
    }
}

impl AppHarness {
    /// Block until the spawned generation reports back, then apply it.
    pub fn finish_generation(&mut self) {
        match self.events.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Generation(outcome)) => self.app.on_generation(outcome),
            Ok(_) => panic!("unexpected event"),
            Err(err) => panic!("no generation outcome: {err}"),
        }
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
