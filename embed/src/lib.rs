//! Blocking client for the DeepSeek embeddings API.
//!
//! ```rust,no_run
//! use deepseek_embed::{DeepSeek, Embeddings};
//!
//! let client = DeepSeek::from_env()?;
//! let vectors = client.embed_documents(&["Hello, world!", "LangChain is awesome."])?;
//! let query = client.embed_query("Hello LangChain!")?;
//! # Ok::<(), deepseek_embed::EmbedError>(())
//! ```

pub mod config;
pub mod deepseek;
pub mod embed;
pub mod error;
pub(crate) mod openai_compat;

pub use config::{API_KEY_ENV, Config, DEEPSEEK_EMBEDDINGS_URL, DEFAULT_MODEL};
pub use deepseek::DeepSeek;
pub use embed::Embeddings;
pub use error::{EmbedError, Result};
