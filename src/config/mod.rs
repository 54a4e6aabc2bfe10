//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEXIGATE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use lexigate::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod llm;
mod server;
mod word_api;

pub use error::{ConfigError, ValidationError};
pub use llm::{LlmConfig, LlmProvider};
pub use server::ServerConfig;
pub use word_api::WordApiConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Model provider configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// Word-analysis API configuration
    #[serde(default)]
    pub word_api: WordApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `LEXIGATE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `LEXIGATE__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `LEXIGATE__LLM__PROVIDER=ollama` -> `llm.provider = Ollama`
    /// - `LEXIGATE__WORD_API__BASE_URL=...` -> `word_api.base_url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEXIGATE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.llm.validate()?;
        self.word_api.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("LEXIGATE__SERVER__PORT");
        env::remove_var("LEXIGATE__LLM__PROVIDER");
        env::remove_var("LEXIGATE__LLM__MODEL");
        env::remove_var("LEXIGATE__WORD_API__BASE_URL");
    }

    #[test]
    fn test_load_with_no_env_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.word_api.timeout_secs, 15);
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LEXIGATE__SERVER__PORT", "9000");
        env::set_var("LEXIGATE__LLM__PROVIDER", "ollama");
        env::set_var("LEXIGATE__LLM__MODEL", "mistral");
        env::set_var("LEXIGATE__WORD_API__BASE_URL", "http://words.test/api");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.llm.provider, LlmProvider::Ollama);
        assert_eq!(config.llm.model, "mistral");
        assert_eq!(config.word_api.base_url, "http://words.test/api");
    }

    #[test]
    fn test_default_config_validates() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert!(config.validate().is_ok());
    }
}
