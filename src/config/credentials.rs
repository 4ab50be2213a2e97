//! Credential resolution from configuration.
//!
//! The API key is resolved once, explicitly, by the composition root. A
//! missing key is reported as an error instead of aborting at startup.

use super::loader::ConfigError;
use super::types::Config;

/// Fallback variable consulted after the configured one.
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// API key holder whose formatting never reveals the key.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// The raw key, for the request header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

const MASK: &str = "••••••••";

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SecureString").field(&MASK).finish()
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(MASK)
    }
}

pub struct Credentials;

impl Credentials {
    /// Resolve the API key from config, then the process environment.
    pub fn resolve(config: &Config) -> Result<SecureString, ConfigError> {
        Self::resolve_with(config, |name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment access.
    ///
    /// Order: `gemini.api_key`, `gemini.api_key_env`, `GEMINI_API_KEY`.
    /// Empty values count as missing.
    pub fn resolve_with<F>(config: &Config, lookup: F) -> Result<SecureString, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = config.gemini.api_key.as_deref() {
            if !key.trim().is_empty() {
                return Ok(SecureString::new(key.trim().to_string()));
            }
        }

        let env_var = config.gemini.api_key_env.as_str();
        [env_var, FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(SecureString::new)
            .ok_or_else(|| ConfigError::MissingCredential {
                env_var: env_var.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_masked_in_logs() {
        let key = SecureString::new("AIza-secret".to_string());

        assert_eq!(key.to_string(), MASK);
        assert!(!format!("{key:?}").contains("AIza"));
        assert_eq!(key.expose(), "AIza-secret");
    }

    #[test]
    fn config_key_wins_over_environment() {
        let mut config = Config::default();
        config.gemini.api_key = Some("from-config".to_string());

        let key = Credentials::resolve_with(&config, |_| Some("from-env".to_string())).unwrap();
        assert_eq!(key.expose(), "from-config");
    }

    #[test]
    fn configured_env_var_is_used() {
        let config = Config::default();
        let key = Credentials::resolve_with(&config, |name| {
            (name == "API_KEY").then(|| "env-key".to_string())
        })
        .unwrap();
        assert_eq!(key.expose(), "env-key");
    }

    #[test]
    fn falls_back_to_gemini_api_key() {
        let config = Config::default();
        let key = Credentials::resolve_with(&config, |name| {
            (name == FALLBACK_API_KEY_ENV).then(|| "fallback".to_string())
        })
        .unwrap();
        assert_eq!(key.expose(), "fallback");
    }

    #[test]
    fn missing_key_is_an_error_naming_the_variable() {
        let mut config = Config::default();
        config.gemini.api_key = Some("   ".to_string());

        let err = Credentials::resolve_with(&config, |_| Some(String::new())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { .. }));
        assert_eq!(err.to_string(), "API_KEY environment variable is not set");
    }
}
