//! Word-analysis API configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the remote word-processing API
#[derive(Debug, Clone, Deserialize)]
pub struct WordApiConfig {
    /// Base URL, e.g. "https://words.example.com/api"
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Whether category keyword matching lowercases the question first.
    ///
    /// Folding is a no-op for Indic scripts, so it only affects Latin-script
    /// keywords; exposed as configuration rather than hard-coded.
    #[serde(default = "default_fold_keywords")]
    pub fold_keywords: bool,
}

impl WordApiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate word API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidWordApiUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for WordApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            fold_keywords: default_fold_keywords(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost/api".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_fold_keywords() -> bool {
    true
}
