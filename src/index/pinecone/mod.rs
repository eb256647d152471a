#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::{QueryMatch, VectorEntry, VectorIndex};
use crate::config::PineconeConfig;
use crate::{ClaimsError, Result};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const API_KEY_HEADER: &str = "Api-Key";

/// Client for the Pinecone controller and data-plane APIs.
///
/// The controller resolves an index name to its data-plane host; hosts are
/// cached per index for the lifetime of the client.
#[derive(Debug)]
pub struct PineconeClient {
    http: reqwest::Client,
    controller_url: Url,
    api_key: String,
    index_hosts: Mutex<HashMap<String, Url>>,
}

#[derive(Debug, Deserialize)]
struct DescribeIndexResponse {
    host: String,
}

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [VectorEntry],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest {
    vector: Vec<f32>,
    top_k: usize,
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

impl PineconeClient {
    #[inline]
    pub fn new(config: &PineconeConfig) -> Result<Self> {
        let controller_url = Url::parse(&config.controller_url).map_err(|e| {
            ClaimsError::Config(format!(
                "Invalid Pinecone controller URL {}: {}",
                config.controller_url, e
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| ClaimsError::VectorStore(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            controller_url,
            api_key: config.api_key.clone(),
            index_hosts: Mutex::new(HashMap::new()),
        })
    }

    /// Resolve the data-plane host for an index, consulting the cache first
    async fn index_host(&self, index_name: &str) -> Result<Url> {
        let cached = {
            let hosts = self.index_hosts.lock().expect("host cache lock poisoned");
            hosts.get(index_name).cloned()
        };
        if let Some(host) = cached {
            return Ok(host);
        }

        let describe_url = self
            .controller_url
            .join(&format!("/indexes/{}", index_name))
            .map_err(|e| {
                ClaimsError::VectorStore(format!("Failed to build describe-index URL: {}", e))
            })?;

        debug!("Resolving host for index {} via {}", index_name, describe_url);

        let response = self
            .http
            .get(describe_url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                ClaimsError::VectorStore(format!("Describe-index request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_status_error("Describe-index", status, response).await);
        }

        let described: DescribeIndexResponse = response.json().await.map_err(|e| {
            ClaimsError::VectorStore(format!("Failed to parse describe-index response: {}", e))
        })?;

        let host = parse_host(&described.host)?;

        debug!("Index {} served from {}", index_name, host);
        self.index_hosts
            .lock()
            .expect("host cache lock poisoned")
            .insert(index_name.to_string(), host.clone());

        Ok(host)
    }
}

/// The controller reports hosts without a scheme; default to https
fn parse_host(host: &str) -> Result<Url> {
    let with_scheme = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };

    Url::parse(&with_scheme)
        .map_err(|e| ClaimsError::VectorStore(format!("Invalid index host {}: {}", host, e)))
}

async fn store_status_error(
    operation: &str,
    status: StatusCode,
    response: reqwest::Response,
) -> ClaimsError {
    let body = response.text().await.unwrap_or_default();
    ClaimsError::VectorStore(format!(
        "{} returned {}: {}",
        operation,
        status,
        body.trim()
    ))
}

#[async_trait]
impl VectorIndex for PineconeClient {
    async fn upsert(&self, index_name: &str, entries: Vec<VectorEntry>) -> Result<()> {
        if entries.is_empty() {
            debug!("No entries to upsert");
            return Ok(());
        }

        let host = self.index_host(index_name).await?;
        let url = host
            .join("/vectors/upsert")
            .map_err(|e| ClaimsError::VectorStore(format!("Failed to build upsert URL: {}", e)))?;

        let count = entries.len();
        let request = UpsertRequest { vectors: &entries };

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClaimsError::VectorStore(format!("Upsert request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_status_error("Upsert", status, response).await);
        }

        info!("Upserted {} vectors into index {}", count, index_name);
        Ok(())
    }

    async fn query(
        &self,
        index_name: &str,
        vector: Vec<f32>,
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<QueryMatch>> {
        let host = self.index_host(index_name).await?;
        let url = host
            .join("/query")
            .map_err(|e| ClaimsError::VectorStore(format!("Failed to build query URL: {}", e)))?;

        let request = QueryRequest {
            vector,
            top_k,
            include_metadata,
        };

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClaimsError::VectorStore(format!("Query request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(store_status_error("Query", status, response).await);
        }

        let parsed: QueryResponse = response.json().await.map_err(|e| {
            ClaimsError::VectorStore(format!("Failed to parse query response: {}", e))
        })?;

        debug!(
            "Query against index {} returned {} matches",
            index_name,
            parsed.matches.len()
        );
        Ok(parsed.matches)
    }
}
