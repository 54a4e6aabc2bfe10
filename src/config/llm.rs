//! Model provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Model provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: LlmProvider,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Gemini API key (OpenAI-compatible endpoint)
    pub gemini_api_key: Option<String>,

    /// Base URL of a local Ollama instance
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Model name (e.g. "gpt-4o-mini", "mistral")
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature for answer-generating calls
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Supported model providers, all speaking the OpenAI chat-completion wire format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    OpenAI,
    Gemini,
    Ollama,
}

impl LlmProvider {
    /// Lowercase provider name for logs and the health endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAI => "openai",
            LlmProvider::Gemini => "gemini",
            LlmProvider::Ollama => "ollama",
        }
    }
}

impl LlmConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Name of the credential the selected provider needs but lacks, if any.
    ///
    /// A missing key is not a startup error: the service still runs and
    /// `/chat` answers with an explanation instead of calling the provider.
    pub fn missing_credential(&self) -> Option<&'static str> {
        let has = |key: &Option<String>| key.as_ref().is_some_and(|k| !k.is_empty());
        match self.provider {
            LlmProvider::OpenAI if !has(&self.openai_api_key) => Some("OPENAI_API_KEY"),
            LlmProvider::Gemini if !has(&self.gemini_api_key) => Some("GEMINI_API_KEY"),
            _ => None,
        }
    }

    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModelName);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.provider == LlmProvider::Ollama && !self.ollama_url.starts_with("http") {
            return Err(ValidationError::InvalidOllamaUrl);
        }
        Ok(())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            openai_api_key: None,
            gemini_api_key: None,
            ollama_url: default_ollama_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1200
}

fn default_temperature() -> f32 {
    0.2
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();
        assert_eq!(config.provider, LlmProvider::OpenAI);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 1200);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_missing_credential_openai() {
        let config = LlmConfig::default();
        assert_eq!(config.missing_credential(), Some("OPENAI_API_KEY"));

        let config = LlmConfig {
            openai_api_key: Some("sk-xxx".to_string()),
            ..Default::default()
        };
        assert_eq!(config.missing_credential(), None);
    }

    #[test]
    fn test_missing_credential_gemini() {
        let config = LlmConfig {
            provider: LlmProvider::Gemini,
            ..Default::default()
        };
        assert_eq!(config.missing_credential(), Some("GEMINI_API_KEY"));
    }

    #[test]
    fn test_ollama_needs_no_credential() {
        let config = LlmConfig {
            provider: LlmProvider::Ollama,
            ..Default::default()
        };
        assert_eq!(config.missing_credential(), None);
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let config = LlmConfig {
            openai_api_key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.missing_credential(), Some("OPENAI_API_KEY"));
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let config = LlmConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyModelName)
        ));
    }

    #[test]
    fn test_validation_rejects_bad_temperature() {
        let config = LlmConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTemperature)
        ));
    }

    #[test]
    fn test_validation_rejects_bad_ollama_url() {
        let config = LlmConfig {
            provider: LlmProvider::Ollama,
            ollama_url: "localhost:11434".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidOllamaUrl)
        ));
    }
}
