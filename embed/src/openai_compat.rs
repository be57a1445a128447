use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EmbedError, Result};

/// OpenAI-compatible embedding request body.
#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

/// OpenAI-compatible embedding response.
#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f64>,
}

/// Call an OpenAI-compatible embedding endpoint with one POST.
///
/// The returned vectors are aligned with `texts`.
pub(crate) fn call_embedding_api(
    client: &Client,
    api_key: &str,
    url: &str,
    model: &str,
    texts: &[&str],
) -> Result<Vec<Vec<f64>>> {
    debug!(model, inputs = texts.len(), "embedding request");

    let body = EmbeddingRequest { model, input: texts };
    let resp = client
        .post(url)
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()?;

    let status = resp.status();
    let text = resp.text()?;

    if status != StatusCode::OK {
        warn!(status = status.as_u16(), "embedding request rejected");
        return Err(EmbedError::RemoteService {
            status: status.as_u16(),
            body: text,
        });
    }

    let parsed: EmbeddingResponse = serde_json::from_str(&text)
        .map_err(|e| EmbedError::MalformedResponse(e.to_string()))?;

    let vecs = align(parsed.data, texts.len())?;
    debug!(
        vectors = vecs.len(),
        dimension = vecs.first().map_or(0, Vec::len),
        "embedding response"
    );
    Ok(vecs)
}

/// Orders response items to match the request input.
///
/// Items are placed by `index` when every item carries one, otherwise by
/// position.
fn align(data: Vec<EmbeddingData>, batch_size: usize) -> Result<Vec<Vec<f64>>> {
    if data.len() != batch_size {
        return Err(EmbedError::MalformedResponse(format!(
            "expected {batch_size} embeddings, got {}",
            data.len()
        )));
    }

    let indexed = data.iter().all(|item| item.index.is_some());
    let mut vecs: Vec<Option<Vec<f64>>> = vec![None; batch_size];
    for (pos, item) in data.into_iter().enumerate() {
        let slot = if indexed { item.index.unwrap_or(pos) } else { pos };
        if slot >= batch_size {
            return Err(EmbedError::MalformedResponse(format!(
                "unexpected embedding index {slot} for batch size {batch_size}"
            )));
        }
        if vecs[slot].is_some() {
            return Err(EmbedError::MalformedResponse(format!(
                "duplicate embedding index {slot}"
            )));
        }
        if item.embedding.is_empty() {
            return Err(EmbedError::MalformedResponse(format!(
                "empty embedding at index {slot}"
            )));
        }
        vecs[slot] = Some(item.embedding);
    }

    vecs.into_iter()
        .enumerate()
        .map(|(i, v)| {
            v.ok_or_else(|| EmbedError::MalformedResponse(format!("missing embedding for index {i}")))
        })
        .collect()
}
