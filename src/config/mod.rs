//! Configuration: TOML file, defaults, validation, credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{Credentials, SecureString, FALLBACK_API_KEY_ENV};
pub use loader::ConfigError;
pub use types::{Config, GeminiConfig, NativeShareKind, ShareConfig, StorageConfig, UiConfig};
