//! Client configuration.

use std::fmt;

use crate::error::{EmbedError, Result};

/// DeepSeek embeddings endpoint.
pub const DEEPSEEK_EMBEDDINGS_URL: &str = "https://api.deepseek.com/v1/embeddings";

/// Default embedding model.
pub const DEFAULT_MODEL: &str = "text-embedding-3";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DEEP_SEEK_API_KEY";

/// Validated configuration for [`crate::DeepSeek`].
///
/// Build it with [`Config::new`] or [`Config::from_env`]; both fail fast
/// when the API key is missing, so a `Config` always carries a credential.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    model: String,
    endpoint: String,
}

impl Config {
    /// Creates a configuration from an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(EmbedError::Configuration(
                "api_key must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEEPSEEK_EMBEDDINGS_URL.to_string(),
        })
    }

    /// Reads the API key from `DEEP_SEEK_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the API key through `lookup`, keyed by [`API_KEY_ENV`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup(API_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => Self::new(key),
            _ => Err(EmbedError::Configuration(format!(
                "{API_KEY_ENV} not found, set it in the environment or a .env file"
            ))),
        }
    }

    /// Selects the embedding model. An empty name keeps the default.
    pub fn with_model(mut self, model: &str) -> Self {
        if !model.is_empty() {
            self.model = model.to_string();
        }
        self
    }

    #[cfg(test)]
    pub(crate) fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Masks the API key for display.
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
    }
}
