use crate::error::{EmbedError, Result};

/// Embeddings converts text into dense float64 vectors.
///
/// Implementations must be safe for concurrent use (Send + Sync).
pub trait Embeddings: Send + Sync {
    /// Return one embedding vector per input text, in input order.
    fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f64>>>;

    /// Return the embedding vector for a single query text.
    ///
    /// Equal to the first element of `embed_documents(&[text])`.
    fn embed_query(&self, text: &str) -> Result<Vec<f64>> {
        self.embed_documents(&[text])?
            .into_iter()
            .next()
            .ok_or_else(|| EmbedError::MalformedResponse("no embedding returned for query".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns `[len, first byte]` for every text.
    struct Echo;

    impl Embeddings for Echo {
        fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f64>>> {
            if texts.is_empty() {
                return Err(EmbedError::EmptyInput);
            }
            Ok(texts
                .iter()
                .map(|t| vec![t.len() as f64, t.bytes().next().unwrap_or(0) as f64])
                .collect())
        }
    }

    struct Silent;

    impl Embeddings for Silent {
        fn embed_documents(&self, _texts: &[&str]) -> Result<Vec<Vec<f64>>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_query_matches_first_document() {
        for text in ["", "a", "Hello LangChain!"] {
            let docs = Echo.embed_documents(&[text]).unwrap();
            assert_eq!(Echo.embed_query(text).unwrap(), docs[0]);
        }
    }

    #[test]
    fn test_query_without_vectors_is_malformed() {
        let err = Silent.embed_query("hi").unwrap_err();
        assert!(matches!(err, EmbedError::MalformedResponse(_)));
    }
}
