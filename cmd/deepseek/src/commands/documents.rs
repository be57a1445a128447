//! Batch document embedding.

use anyhow::Context as _;
use clap::Args;
use serde::Serialize;

use deepseek_embed::Embeddings;

use super::{create_client, load_request, output_result};
use crate::Cli;

/// Embed documents with one request.
#[derive(Args)]
pub struct DocumentsCommand {
    /// Texts to embed
    texts: Vec<String>,

    /// YAML or JSON file holding a list of texts (appended after TEXTS)
    #[arg(short = 'f', long = "file")]
    file: Option<String>,
}

#[derive(Debug, Serialize)]
struct DocumentsResult {
    model: String,
    count: usize,
    dimension: usize,
    embeddings: Vec<Vec<f64>>,
}

impl DocumentsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let texts = self.collect_texts()?;
        if texts.is_empty() {
            anyhow::bail!("no texts given, pass TEXT arguments or use -f");
        }

        let client = create_client(cli)?;
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let embeddings = client
            .embed_documents(&refs)
            .context("embedding documents failed")?;

        let result = DocumentsResult {
            model: client.model().to_string(),
            count: embeddings.len(),
            dimension: embeddings.first().map_or(0, Vec::len),
            embeddings,
        };
        output_result(&result, cli.output.as_deref(), cli.json)
    }

    fn collect_texts(&self) -> anyhow::Result<Vec<String>> {
        let mut texts = self.texts.clone();
        if let Some(path) = self.file.as_deref() {
            let loaded: Vec<String> = load_request(path)?;
            texts.extend(loaded);
        }
        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_collect_texts_appends_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(file, r#"["from file"]"#).unwrap();

        let cmd = DocumentsCommand {
            texts: vec!["from args".to_string()],
            file: Some(file.path().to_str().unwrap().to_string()),
        };
        assert_eq!(cmd.collect_texts().unwrap(), vec!["from args", "from file"]);
    }
}
