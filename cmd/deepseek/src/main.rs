//! DeepSeek CLI - embed text with the DeepSeek embeddings API.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{DocumentsCommand, QueryCommand};

/// DeepSeek CLI - A command line interface for DeepSeek embeddings.
///
/// The API key is read from DEEP_SEEK_API_KEY. A .env file in the
/// working directory is loaded first if present.
#[derive(Parser)]
#[command(name = "deepseek")]
#[command(about = "DeepSeek embeddings CLI tool")]
#[command(version)]
pub struct Cli {
    /// Embedding model (default is text-embedding-3)
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Embed one or more documents with a single request
    Documents(DocumentsCommand),
    /// Embed a single query
    Query(QueryCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    match &cli.command {
        Commands::Documents(cmd) => cmd.run(&cli),
        Commands::Query(cmd) => cmd.run(&cli),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_documents() {
        let cli = Cli::try_parse_from(["deepseek", "--json", "documents", "a", "b"]).unwrap();
        assert!(cli.json);
        assert!(cli.model.is_none());
        assert!(matches!(cli.command, Commands::Documents(_)));
    }

    #[test]
    fn test_parse_query_with_global_flags() {
        let cli = Cli::try_parse_from([
            "deepseek",
            "query",
            "Hello LangChain!",
            "-m",
            "text-embedding-3-large",
            "-o",
            "out.yaml",
        ])
        .unwrap();
        assert_eq!(cli.model.as_deref(), Some("text-embedding-3-large"));
        assert_eq!(cli.output.as_deref(), Some("out.yaml"));
        assert!(matches!(cli.command, Commands::Query(_)));
    }

    #[test]
    fn test_query_requires_text() {
        assert!(Cli::try_parse_from(["deepseek", "query"]).is_err());
    }
}
