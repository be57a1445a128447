use reqwest::blocking::Client;

use crate::config::Config;
use crate::embed::Embeddings;
use crate::error::{EmbedError, Result};

/// DeepSeek embedder using the DeepSeek embeddings API.
///
/// Every call performs exactly one blocking POST; nothing is cached or
/// retried. The client is immutable and can be shared across threads.
#[derive(Debug, Clone)]
pub struct DeepSeek {
    client: Client,
    config: Config,
}

impl DeepSeek {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a client with the default model, reading the API key from
    /// `DEEP_SEEK_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Like [`DeepSeek::from_env`] with an explicit model.
    pub fn from_env_with_model(model: &str) -> Result<Self> {
        Ok(Self::new(Config::from_env()?.with_model(model)))
    }

    /// Creates a client whose API key is resolved through `lookup`.
    /// See [`Config::from_lookup`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, model: &str) -> Result<Self> {
        Ok(Self::new(Config::from_lookup(lookup)?.with_model(model)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn model(&self) -> &str {
        self.config.model()
    }

    fn call_api(&self, texts: &[&str]) -> Result<Vec<Vec<f64>>> {
        crate::openai_compat::call_embedding_api(
            &self.client,
            self.config.api_key(),
            self.config.endpoint(),
            self.config.model(),
            texts,
        )
    }
}

impl Embeddings for DeepSeek {
    fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f64>>> {
        if texts.is_empty() {
            return Err(EmbedError::EmptyInput);
        }
        self.call_api(texts)
    }
}
