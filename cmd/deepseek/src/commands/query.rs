use anyhow::Context as _;
use clap::Args;
use serde::Serialize;

use deepseek_embed::Embeddings;

use super::{create_client, output_result};
use crate::Cli;

/// Embed a single query.
#[derive(Args)]
pub struct QueryCommand {
    /// Query text
    text: String,
}

#[derive(Debug, Serialize)]
struct QueryResult {
    model: String,
    dimension: usize,
    embedding: Vec<f64>,
}

impl QueryCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = create_client(cli)?;
        let embedding = client
            .embed_query(&self.text)
            .context("embedding query failed")?;

        let result = QueryResult {
            model: client.model().to_string(),
            dimension: embedding.len(),
            embedding,
        };
        output_result(&result, cli.output.as_deref(), cli.json)
    }
}
