
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::Embedder;
use crate::config::EmbeddingConfig;
use crate::{ClaimsError, Result};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const EMBEDDINGS_PATH: &str = "/v1/embeddings";

/// Client for the OpenAI embeddings endpoint
#[derive(Debug, Clone)]
pub struct EmbeddingClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl EmbeddingClient {
    #[inline]
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClaimsError::Config(format!(
                "Invalid embedding provider URL {}: {}",
                config.base_url, e
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| ClaimsError::Embedding(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Generate an embedding for a single text input
    #[inline]
    pub async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>> {
        debug!("Generating embedding for text (length: {})", text.len());

        let url = self
            .base_url
            .join(EMBEDDINGS_PATH)
            .map_err(|e| ClaimsError::Embedding(format!("Failed to build embedding URL: {}", e)))?;

        let request = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClaimsError::Embedding(format!("Embedding request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(embedding_status_error(status, response).await);
        }

        let parsed: EmbeddingResponse = response.json().await.map_err(|e| {
            ClaimsError::Embedding(format!("Failed to parse embedding response: {}", e))
        })?;

        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                ClaimsError::Embedding("Embedding response contained no data".to_string())
            })?;

        debug!("Generated embedding with {} dimensions", vector.len());
        Ok(vector)
    }
}

async fn embedding_status_error(status: StatusCode, response: reqwest::Response) -> ClaimsError {
    let body = response.text().await.unwrap_or_default();
    ClaimsError::Embedding(format!(
        "Embedding provider returned {}: {}",
        status,
        body.trim()
    ))
}

#[async_trait]
impl Embedder for EmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.generate_embedding(text).await
    }
}
