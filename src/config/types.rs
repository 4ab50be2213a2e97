use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Upstream generative AI service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL for the API (scheme + host, no path).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for the structured name/meaning/prompt request.
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model used for the per-name image requests.
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Direct API key. Takes precedence over the environment.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not set.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Where favorites are persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the key-value files. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// How a name is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeShareKind {
    /// No native share; always fall back to the clipboard.
    #[default]
    None,
    /// Hand a `mailto:` link to the system URL opener.
    Mailto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default)]
    pub native: NativeShareKind,
    /// Lifetime of the "Copied to clipboard!" toast.
    #[serde(default = "default_notification_seconds")]
    pub notification_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_notification_seconds() -> u64 {
    3
}

fn default_tick_ms() -> u64 {
    250
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            native: NativeShareKind::default(),
            notification_seconds: default_notification_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl StorageConfig {
    /// Resolved data directory.
    ///
    /// Falls back to `./.babynames` when the platform has no data dir.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("babynames"))
                .unwrap_or_else(|| PathBuf::from(".babynames"))
        })
    }
}
