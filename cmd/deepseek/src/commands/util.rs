//! Utility functions for CLI commands.

use std::path::Path;

use anyhow::Context as _;
use deepseek_embed::{Config, DeepSeek};

use crate::Cli;

/// Creates a DeepSeek client from the environment and CLI flags.
pub fn create_client(cli: &Cli) -> anyhow::Result<DeepSeek> {
    let mut config = Config::from_env().context("cannot configure DeepSeek client")?;
    if let Some(model) = cli.model.as_deref() {
        config = config.with_model(model);
    }
    tracing::debug!(?config, "client configured");
    Ok(DeepSeek::new(config))
}

/// Loads a request from a YAML or JSON file.
pub fn load_request<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yaml");

    let result = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };

    Ok(result)
}

/// Outputs result as JSON or YAML.
pub fn output_result<T: serde::Serialize>(
    result: &T,
    output_path: Option<&str>,
    as_json: bool,
) -> anyhow::Result<()> {
    let output = render(result, as_json)?;

    match output_path {
        Some(path) => std::fs::write(path, output)?,
        None => print!("{}", output),
    }

    Ok(())
}

fn render<T: serde::Serialize>(result: &T, as_json: bool) -> anyhow::Result<String> {
    if as_json {
        Ok(serde_json::to_string_pretty(result)? + "\n")
    } else {
        Ok(serde_yaml::to_string(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_yaml_list() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "- Hello, world!\n- LangChain is awesome.").unwrap();

        let texts: Vec<String> = load_request(file.path().to_str().unwrap()).unwrap();
        assert_eq!(texts, vec!["Hello, world!", "LangChain is awesome."]);
    }

    #[test]
    fn test_load_json_list() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(file, r#"["a", ""]"#).unwrap();

        let texts: Vec<String> = load_request(file.path().to_str().unwrap()).unwrap();
        assert_eq!(texts, vec!["a", ""]);
    }

    #[test]
    fn test_load_missing_file() {
        let result: anyhow::Result<Vec<String>> = load_request("/nonexistent/texts.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_render_formats() {
        let value = serde_json::json!({"dimension": 2});
        assert_eq!(render(&value, true).unwrap(), "{\n  \"dimension\": 2\n}\n");
        assert_eq!(render(&value, false).unwrap(), "dimension: 2\n");
    }

    #[test]
    fn test_output_to_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        output_result(&vec![1.5_f64], Some(path), true).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        let parsed: Vec<f64> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, vec![1.5]);
    }
}
